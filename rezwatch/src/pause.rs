//! Waiting between poll passes.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Why a [`Pause::pause`] call returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    /// The full interval elapsed
    Elapsed,
    /// A stop was requested before the interval ended
    Stopped,
}

/// Suspends the poller between passes.
pub trait Pause {
    fn pause(&mut self, interval: Duration) -> Wake;
}

impl<Z: Pause + ?Sized> Pause for &mut Z {
    fn pause(&mut self, interval: Duration) -> Wake {
        (**self).pause(interval)
    }
}

/// Fixed-interval timer that can be interrupted through a [`StopHandle`].
///
/// A stop requested while no wait is in progress is remembered and ends the
/// next wait immediately.
#[derive(Debug)]
pub struct Ticker {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(self.tx.clone())
    }
}

impl Pause for Ticker {
    fn pause(&mut self, interval: Duration) -> Wake {
        match self.rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => Wake::Elapsed,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => Wake::Stopped,
        }
    }
}

/// Requests that a [`Ticker`] stop waiting.
#[derive(Clone, Debug)]
pub struct StopHandle(Sender<()>);

impl StopHandle {
    pub fn stop(&self) {
        // The ticker may already be gone once the run has finished.
        self.0.send(()).ok();
    }
}
