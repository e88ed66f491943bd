//! Error types for yt-dlp invocations.

use std::process::ExitStatus;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failure modes of a single yt-dlp invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// Program could not be resolved on `PATH`
    #[error("{program} not found in PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// Program ran but exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// Stdout was not valid UTF-8
    #[error("{program} produced non-UTF-8 output")]
    Decode {
        program: String,
        #[source]
        source: FromUtf8Error,
    },

    /// Program succeeded but printed nothing where a value was expected
    #[error("{program} produced no output")]
    EmptyOutput { program: String },

    /// IO error while spawning or waiting on the process
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for rezwatch-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
