//! Tracing initialisation.
//!
//! Filter comes from `RUST_LOG` (default `warn`). Output goes to stderr,
//! or to the file named by `PRIMETIME_LOG` through a non-blocking writer so
//! stdout stays clean for JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered file logs are flushed.
pub fn init_tracing() -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(log_path) = std::env::var_os("PRIMETIME_LOG").map(PathBuf::from) else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(env_filter)
            .init();
        return Ok(None);
    };

    let file_name = log_path
        .file_name()
        .with_context(|| format!("PRIMETIME_LOG has no file name: {}", log_path.display()))?;
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log dir {}", directory.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter)
        .init();

    tracing::info!(path = %log_path.display(), "Logging initialized");
    Ok(Some(guard))
}
