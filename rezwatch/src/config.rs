//! Configuration for a monitoring run.
//!
//! `MonitorConfig` is the resolved form of the `watch` CLI arguments and is
//! handed to the monitor at construction. Args structs (for CLI parsing)
//! remain in their subcommand modules.

use crate::watch;
use eyre::{Result, ensure};
use std::path::PathBuf;
use std::time::Duration;

/// Videos polled when none are given on the command line.
pub const DEFAULT_VIDEOS: &[&str] = &[
    "https://www.youtube.com/watch?v=CdyWcKaFAqU",
    "https://www.youtube.com/watch?v=F0cwPiOahQY",
    "https://www.youtube.com/watch?v=p-hZmEFkXXo",
];

/// Default wait between passes (5 minutes)
pub const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Token yt-dlp prints in its format listing once the 8K encoding exists
pub const DEFAULT_MARKER: &str = "4320p";

/// Append-only completion log, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "8k3_status_log.txt";

/// Title used when the title lookup fails.
pub const UNKNOWN_TITLE: &str = "Unknown Video Title";

/// Resolved monitoring configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Video URLs or IDs, in polling order
    pub videos: Vec<String>,
    /// Wait between passes
    pub interval: Duration,
    /// Substring of the format listing that signals availability
    pub marker: String,
    /// Completion log path
    pub log_path: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            videos: DEFAULT_VIDEOS.iter().map(|url| url.to_string()).collect(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            marker: DEFAULT_MARKER.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl TryFrom<watch::Args> for MonitorConfig {
    type Error = eyre::Error;

    fn try_from(args: watch::Args) -> Result<Self> {
        ensure!(args.interval > 0, "interval must be at least 1 second");

        let mut config = Self {
            interval: Duration::from_secs(args.interval),
            ..Self::default()
        };

        if !args.urls.is_empty() {
            config.videos = args.urls;
        }

        Ok(config)
    }
}
