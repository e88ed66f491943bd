//! Check subcommand - look up a single video once.

use crate::config::DEFAULT_MARKER;
use crate::monitor::resolve_title;
use color_eyre::Section;
use eyre::{Result, WrapErr, ensure};
use rezwatch_dl::Error as DlError;
use rezwatch_dl::dl::YtDlp;
use rezwatch_dl::probe::VideoProbe;
use std::io::{self, Write};

/// CLI arguments for a one-shot availability check.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Video URL or ID to check
    pub url: String,

    /// Token to look for in the format listing
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    pub marker: String,
}

/// Resolved configuration for a one-shot check.
#[derive(Debug)]
pub struct Config {
    pub url: String,
    pub marker: String,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        ensure!(!args.marker.trim().is_empty(), "marker must not be empty");

        Ok(Self {
            url: args.url,
            marker: args.marker,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    check(&YtDlp::new(), &config, &mut io::stdout())?;
    Ok(())
}

/// Print the title and availability of one video. Nothing is logged to the
/// status file.
///
/// Unlike the monitor, a failed format lookup is reported as an error.
pub fn check(probe: &impl VideoProbe, config: &Config, out: &mut impl Write) -> Result<bool> {
    let title = resolve_title(probe, &config.url);

    let listing = match probe.list_formats(&config.url) {
        Ok(listing) => listing,
        Err(e @ DlError::NotFound { .. }) => {
            return Err(e)
                .wrap_err("failed to list formats")
                .suggestion("install yt-dlp and make sure it is on PATH");
        }
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("failed to list formats: {}", config.url));
        }
    };

    let available = listing.has_marker(&config.marker);
    let state = if available {
        "available"
    } else {
        "not yet available"
    };

    writeln!(
        out,
        "'{title}' (URL: {}): {} {state}",
        config.url, config.marker
    )?;

    Ok(available)
}
