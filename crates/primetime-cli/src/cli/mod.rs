//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "primetime")]
#[command(version)]
#[command(about = "Drive the PrimeTime store from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Dispatch actions against a fresh store and print the final state
    Run {
        /// Actions to dispatch, in order: incr, decr, save, remove, delete:<i>[,<j>...]
        #[arg(value_name = "ACTION")]
        actions: Vec<String>,

        /// Read further actions from a file (one or more per line, `#` starts a comment)
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,

        /// Print the state after every dispatch as one JSON line
        #[arg(long)]
        trace: bool,

        /// Print the final state on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Compute the Nth prime (1-based)
    NthPrime {
        #[arg(value_name = "N")]
        n: u64,
    },

    /// Check whether a number is prime
    IsPrime {
        #[arg(value_name = "N", allow_negative_numbers = true)]
        n: i64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a commented default config file
    Init,
    /// Print the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            actions,
            script,
            trace,
            compact,
        } => commands::run::execute(&actions, script.as_deref(), trace, compact),
        Commands::NthPrime { n } => commands::primes::nth_prime(n),
        Commands::IsPrime { n } => commands::primes::is_prime(n),
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(),
        },
    }
}
