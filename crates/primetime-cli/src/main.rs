mod cli;
mod logging;

fn main() {
    let guard = match logging::init_tracing() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    if let Err(e) = cli::run() {
        drop(guard);
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
