//! rezwatch: wait for high-resolution encodings to show up on video platforms.
//!
//! The [`monitor::Monitor`] polls a list of videos through a
//! [`rezwatch_dl::probe::VideoProbe`], appends a line to the
//! [`status_log::StatusLog`] the first time each video lists the target
//! resolution, and returns once every video has completed.
//!
//! ```no_run
//! use rezwatch::config::MonitorConfig;
//! use rezwatch::monitor::Monitor;
//! use rezwatch_dl::dl::YtDlp;
//!
//! # fn main() -> eyre::Result<()> {
//! let summary = Monitor::new(YtDlp::new(), MonitorConfig::default()).run()?;
//! println!("done after {} passes", summary.passes);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod monitor;
pub mod pause;
pub mod status_log;
pub mod watch;
