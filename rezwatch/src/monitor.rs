//! Poll loop that waits for every video to reach the target resolution.
//!
//! Each video moves one way, pending → complete, the first time its format
//! listing contains the configured marker. A pass queries every pending video
//! in configured order, then retires the ones that completed. Lookup failures
//! count as "not yet available" and are retried on the next pass, forever.

use crate::config::{MonitorConfig, UNKNOWN_TITLE};
use crate::pause::{Pause, StopHandle, Ticker, Wake};
use crate::status_log::{LogEntry, StatusLog, TIMESTAMP_FORMAT};
use chrono::{Local, NaiveDateTime};
use eyre::Result;
use rezwatch_dl::probe::VideoProbe;
use std::collections::HashSet;
use std::io::{self, Write};
use std::time::Duration;

/// Per-video state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Pending,
    Complete,
}

/// A monitored video. The title is resolved once and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
    pub url: String,
    pub title: String,
    pub status: Status,
}

/// Outcome of a single pass.
#[derive(Clone, Debug)]
pub struct PassReport {
    /// Local time the pass started
    pub started: NaiveDateTime,
    /// Entries written during this pass, in polling order
    pub completed: Vec<LogEntry>,
    /// Videos still pending after the pass
    pub pending: usize,
}

/// Outcome of a whole run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub passes: usize,
    pub entries: Vec<LogEntry>,
    /// True when a stop request ended the run with videos still pending
    pub stopped: bool,
}

pub struct Monitor<P, Z = Ticker, W = io::Stdout> {
    probe: P,
    pause: Z,
    console: W,
    interval: Duration,
    marker: String,
    log: StatusLog,
    videos: Vec<Video>,
    passes: usize,
}

impl<P: VideoProbe> Monitor<P> {
    /// Resolve titles and build a monitor printing to stdout.
    ///
    /// Duplicate URLs are collapsed, keeping the first occurrence.
    pub fn new(probe: P, config: MonitorConfig) -> Self {
        let MonitorConfig {
            videos,
            interval,
            marker,
            log_path,
        } = config;

        let mut seen = HashSet::new();
        let videos = videos
            .into_iter()
            .filter(|url| seen.insert(url.clone()))
            .map(|url| Video {
                title: resolve_title(&probe, &url),
                url,
                status: Status::Pending,
            })
            .collect();

        Self {
            probe,
            pause: Ticker::new(),
            console: io::stdout(),
            interval,
            marker,
            log: StatusLog::new(log_path),
            videos,
            passes: 0,
        }
    }
}

impl<P, W> Monitor<P, Ticker, W> {
    /// Handle that interrupts the wait between passes and ends the run.
    pub fn stop_handle(&self) -> StopHandle {
        self.pause.stop_handle()
    }
}

impl<P, Z, W> Monitor<P, Z, W> {
    pub fn with_pause<Z2: Pause>(self, pause: Z2) -> Monitor<P, Z2, W> {
        Monitor {
            probe: self.probe,
            pause,
            console: self.console,
            interval: self.interval,
            marker: self.marker,
            log: self.log,
            videos: self.videos,
            passes: self.passes,
        }
    }

    pub fn with_console<W2: Write>(self, console: W2) -> Monitor<P, Z, W2> {
        Monitor {
            probe: self.probe,
            pause: self.pause,
            console,
            interval: self.interval,
            marker: self.marker,
            log: self.log,
            videos: self.videos,
            passes: self.passes,
        }
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Videos not yet seen at the target resolution.
    pub fn pending(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter().filter(|v| v.status == Status::Pending)
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

}

impl<P: VideoProbe, Z: Pause, W: Write> Monitor<P, Z, W> {
    /// Query every pending video once and retire the ones that completed.
    ///
    /// The set of videos queried is fixed when the pass starts. A video is
    /// retired right after its log entry is written, so an error later in
    /// the pass never leads to it being logged twice.
    pub fn poll_once(&mut self) -> Result<PassReport> {
        let started = Local::now().naive_local();
        let ts = started.format(TIMESTAMP_FORMAT).to_string();

        let pending: Vec<usize> = self
            .videos
            .iter()
            .enumerate()
            .filter(|(_, v)| v.status == Status::Pending)
            .map(|(i, _)| i)
            .collect();

        writeln!(
            self.console,
            "[{ts}] Checking 8K availability for {} videos...",
            pending.len()
        )?;

        let mut completed: Vec<LogEntry> = Vec::new();

        for &i in &pending {
            let video = &self.videos[i];
            writeln!(self.console, "[{ts}] Checking '{}'...", video.title)?;

            if !is_available(&self.probe, &self.marker, &video.url) {
                continue;
            }

            let entry = LogEntry::now(&video.title, &video.url);
            writeln!(self.console, "{entry}")?;
            self.log.append(&entry)?;

            tracing::info!(url = video.url, title = video.title, "target resolution available");
            completed.push(entry);

            // Retired as soon as it is logged; `pending` is a snapshot, so the
            // rest of the pass is unaffected.
            self.videos[i].status = Status::Complete;
        }

        self.passes += 1;

        Ok(PassReport {
            started,
            completed,
            pending: self.pending_count(),
        })
    }

    /// Poll until every video is complete or a stop is requested.
    pub fn run(mut self) -> Result<RunSummary> {
        let mut entries = Vec::new();
        let mut stopped = false;
        let mut last_ts = Local::now().naive_local();

        while self.pending_count() > 0 {
            let report = self.poll_once()?;
            last_ts = report.started;
            entries.extend(report.completed);

            if report.pending == 0 {
                break;
            }

            writeln!(
                self.console,
                "[{}] 8K still processing for {} videos. Checking again in {}...\n",
                report.started.format(TIMESTAMP_FORMAT),
                report.pending,
                describe_interval(self.interval)
            )?;

            if self.pause.pause(self.interval) == Wake::Stopped {
                stopped = true;
                break;
            }
        }

        if stopped {
            tracing::info!(pending = self.pending_count(), "monitoring stopped");
            writeln!(
                self.console,
                "[{}] Monitoring stopped with {} videos still processing.",
                Local::now().naive_local().format(TIMESTAMP_FORMAT),
                self.pending_count()
            )?;
        } else {
            writeln!(
                self.console,
                "[{}] All monitored videos have finished 8K processing.",
                last_ts.format(TIMESTAMP_FORMAT)
            )?;
        }

        self.console.flush()?;

        Ok(RunSummary {
            passes: self.passes,
            entries,
            stopped,
        })
    }
}

/// Title lookup with the placeholder fallback.
pub fn resolve_title(probe: &impl VideoProbe, url: &str) -> String {
    match probe.title(url) {
        Ok(title) => title,
        Err(e) => {
            tracing::warn!(url, error = %e, "failed to retrieve video title");
            UNKNOWN_TITLE.to_string()
        }
    }
}

/// Resolution query. Any lookup error means "not yet available".
pub fn is_available(probe: &impl VideoProbe, marker: &str, url: &str) -> bool {
    match probe.list_formats(url) {
        Ok(listing) => listing.has_marker(marker),
        Err(e) => {
            tracing::warn!(url, error = %e, "failed to check video, will retry");
            false
        }
    }
}

/// Human-readable interval for console output, e.g. `5 minutes`, `90 seconds`.
pub fn describe_interval(interval: Duration) -> String {
    let secs = interval.as_secs();

    match secs {
        60 => "1 minute".to_string(),
        s if s >= 60 && s % 60 == 0 => format!("{} minutes", s / 60),
        1 => "1 second".to_string(),
        s => format!("{s} seconds"),
    }
}
