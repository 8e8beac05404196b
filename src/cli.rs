use std::path::PathBuf;

use clap::Parser;
use nc_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "notchclip", version, about = "Clipboard history panel (headless shell)")]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Clipboard polling period in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Number of history entries to keep
    #[arg(long)]
    pub max_entries: Option<usize>,

    /// Disable the log file, log to stdout only
    #[arg(long)]
    pub no_log_file: bool,

    /// Poll the clipboard once, print the history as JSON and exit
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ms) = self.poll_interval_ms {
            config.poll_interval_ms = ms;
        }
        if let Some(max) = self.max_entries {
            config.max_entries = max;
        }
        if self.no_log_file {
            config.log_to_file = false;
        }
        config
    }
}
