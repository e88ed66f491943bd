//! Append-only completion log.

use chrono::{Local, NaiveDateTime};
use eyre::{Result, WrapErr};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// `YYYY-MM-DD HH:MM:SS`, shared by console lines and log entries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed video, written exactly once when it leaves the monitoring set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub title: String,
    pub url: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            timestamp,
            title: title.into(),
            url: url.into(),
        }
    }

    /// Entry stamped with the current local time.
    pub fn now(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(Local::now().naive_local(), title, url)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] '{}' (URL: {}) has finished 8K processing.",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.title,
            self.url
        )
    }
}

/// Plain-text log file, one [`LogEntry`] per line.
#[derive(Clone, Debug)]
pub struct StatusLog {
    path: PathBuf,
}

impl StatusLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one line. The file is opened and closed on every call.
    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .wrap_err_with(|| format!("failed to open status log: {:?}", self.path.display()))?;

        writeln!(file, "{entry}")
            .wrap_err_with(|| format!("failed to write status log: {:?}", self.path.display()))?;

        tracing::debug!(path = ?self.path.display(), url = entry.url, "status log appended");

        Ok(())
    }
}
