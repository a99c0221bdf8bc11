//! File logging setup.
//!
//! The terminal is owned by the UI, so tracing output goes to a log file
//! through a non-blocking writer. Panics are logged before the process dies.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes tracing to the given log file and returns the guard that
/// flushes buffered output on drop.
///
/// Filtering honors `RUST_LOG` and defaults to `bucketty=info`.
///
/// # Errors
///
/// Returns an error when the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(log_file: &Path) -> io::Result<WorkerGuard> {
    let directory = log_file.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;
    let file_name = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("bucketty.log"));

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bucketty=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(io::Error::other)?;

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_file = %log_file.display(), "logging initialized");

    Ok(guard)
}
