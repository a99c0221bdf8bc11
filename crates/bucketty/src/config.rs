//! Command-line arguments and the resolved runtime configuration.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

/// Directory under the home directory holding app files.
const BUCKETTY_DIR: &str = ".bucketty";
/// Default log file name.
const LOG_FILE: &str = "bucketty.log";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "bucketty",
    about = "Terminal file manager for versioned object-storage buckets"
)]
pub struct Cli {
    /// Base URL of the storage backend
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: Url,

    /// Directory downloads are written to; defaults to the system download directory
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Log file path; defaults to ~/.bucketty/bucketty.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Runtime configuration with every default resolved.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory downloads are written to.
    pub download_dir: PathBuf,
    /// Log file path.
    pub log_file: PathBuf,
    /// Base URL of the storage backend.
    pub server_url: Url,
}

impl Config {
    /// Resolves the defaults that depend on the host environment.
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            download_dir: cli.download_dir.unwrap_or_else(default_download_dir),
            log_file: cli.log_file.unwrap_or_else(default_log_file),
            server_url: cli.server,
        }
    }
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_log_file() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from(LOG_FILE),
        |home| home.join(BUCKETTY_DIR).join(LOG_FILE),
    )
}
