//! Typed wrapper around the [yt-dlp](https://github.com/yt-dlp/yt-dlp) executable.
//!
//! ## Modules
//!
//! - [`dl`] - Process wrapper for `yt-dlp -F` and `yt-dlp --get-title`
//! - [`probe`] - [`probe::VideoProbe`] trait used by pollers and test doubles
//! - [`error`] - Error types for failed lookups
//!
//! ## Quick Start
//!
//! ```no_run
//! use rezwatch_dl::dl::YtDlp;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ytdlp = YtDlp::new();
//! let title = ytdlp.title("https://youtube.com/watch?v=example")?;
//! let formats = ytdlp.list_formats("https://youtube.com/watch?v=example")?;
//! println!("{title}: 8K available = {}", formats.has_marker("4320p"));
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod probe;

pub use error::{Error, Result};
