//! Readyprobe CLI
//!
//! Probes HTML pages for their primary content region.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use readyprobe_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,readyprobe=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match readyprobe_cli::run(cli).await {
        Ok(status) => Ok(status.into()),
        Err(e) => {
            tracing::error!("readyprobe failed: {}", e);
            Err(e.into())
        }
    }
}
