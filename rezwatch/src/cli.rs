//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "rezwatch")]
#[command(about = "Wait for 8K encodings to become available on video platforms")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Poll videos until every one has an 8K (4320p) encoding
    Watch(crate::watch::Args),

    /// Check a single video once
    Check(crate::check::Args),
}

/// Execute CLI command - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Watch(args) => crate::watch::execute(args.try_into()?),
        Commands::Check(args) => crate::check::execute(args.try_into()?),
    }
}
