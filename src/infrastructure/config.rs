use super::directory::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "coleta")]
#[command(about = "Pick a state and city, then hand them to the collection points screen")]
#[command(version)]
pub struct Config {
    /// Base URL of the geographic directory service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for each directory request, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Log file (default: coleta.log in the system temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("coleta.log"))
    }
}
