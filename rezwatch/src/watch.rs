//! Watch subcommand - poll videos until the 8K encoding is available.

use crate::config::{DEFAULT_INTERVAL_SECS, MonitorConfig};
use crate::monitor::Monitor;
use eyre::Result;
use rezwatch_dl::dl::YtDlp;

/// CLI arguments for the monitoring loop.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Video URLs to monitor (default: built-in list)
    pub urls: Vec<String>,

    /// Seconds to wait between passes
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,
}

pub fn execute(config: MonitorConfig) -> Result<()> {
    tracing::info!(
        videos = config.videos.len(),
        interval = ?config.interval,
        marker = config.marker,
        log = ?config.log_path.display(),
        "starting monitor"
    );

    let summary = Monitor::new(YtDlp::new(), config).run()?;

    tracing::info!(
        passes = summary.passes,
        completed = summary.entries.len(),
        "monitor finished"
    );

    Ok(())
}
