//! yt-dlp process wrapper.
//!
//! Runs the `yt-dlp` executable as a child process and captures its stdout.
//!
//! ```no_run
//! use rezwatch_dl::dl::YtDlp;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let listing = YtDlp::new().list_formats("https://youtube.com/watch?v=example")?;
//! assert!(listing.has_marker("1080p"));
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::process::Command;

/// Executable name looked up on `PATH` by [`YtDlp::new`].
pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// Raw stdout of `yt-dlp -F <url>`.
///
/// The listing is kept verbatim; callers only ever ask whether a token such as
/// `4320p` appears somewhere in it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatListing(String);

impl FormatListing {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Whether `marker` appears anywhere in the listing.
    ///
    /// An empty marker never matches.
    pub fn has_marker(&self, marker: &str) -> bool {
        !marker.is_empty() && self.0.contains(marker)
    }
}

/// Handle to a yt-dlp executable.
#[derive(Clone, Debug)]
pub struct YtDlp {
    program: OsString,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlp {
    /// Use `yt-dlp` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use a specific program name or path instead of `yt-dlp`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// List available formats with `yt-dlp -F <url>`.
    pub fn list_formats(&self, url: &str) -> Result<FormatListing> {
        self.run(&["-F", url]).map(FormatListing)
    }

    /// Fetch the display title with `yt-dlp --get-title <url>`.
    ///
    /// Surrounding whitespace is trimmed. A blank title is an error.
    pub fn title(&self, url: &str) -> Result<String> {
        let stdout = self.run(&["--get-title", url])?;
        let title = stdout.trim();

        if title.is_empty() {
            return Err(Error::EmptyOutput {
                program: self.name(),
            });
        }

        Ok(title.to_string())
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let path = which::which(&self.program).map_err(|source| Error::NotFound {
            program: self.name(),
            source,
        })?;

        tracing::debug!(program = ?path.display(), ?args, "spawning");

        let output = Command::new(&path).args(args).output()?;

        if !output.status.success() {
            return Err(Error::Failed {
                program: self.name(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| Error::Decode {
            program: self.name(),
            source,
        })
    }

    fn name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}
