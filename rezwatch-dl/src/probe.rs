//! Metadata lookups the poller depends on.

use crate::dl::{FormatListing, YtDlp};
use crate::error::Result;

/// Source of per-video metadata.
///
/// [`YtDlp`] is the production implementation. Pollers stay generic over this
/// trait so tests can script answers without spawning processes.
pub trait VideoProbe {
    /// Resolve a human-readable title for `url`.
    fn title(&self, url: &str) -> Result<String>;

    /// List the encodings currently available for `url`.
    fn list_formats(&self, url: &str) -> Result<FormatListing>;
}

impl VideoProbe for YtDlp {
    fn title(&self, url: &str) -> Result<String> {
        YtDlp::title(self, url)
    }

    fn list_formats(&self, url: &str) -> Result<FormatListing> {
        YtDlp::list_formats(self, url)
    }
}

impl<P: VideoProbe + ?Sized> VideoProbe for &P {
    fn title(&self, url: &str) -> Result<String> {
        (**self).title(url)
    }

    fn list_formats(&self, url: &str) -> Result<FormatListing> {
        (**self).list_formats(url)
    }
}
