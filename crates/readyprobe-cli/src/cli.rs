//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use readyprobe::{ProbeConfig, SizeMeasure};

/// Report on a page's primary content region once it is parsed
#[derive(Parser, Debug)]
#[command(name = "readyprobe", version)]
#[command(about = "Report on a page's primary content region once it is parsed", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to $READYPROBE_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Content region selector, overriding the config file
    #[arg(long, global = true)]
    pub selector: Option<String>,

    /// Size measure (chars, utf16, bytes), overriding the config file
    #[arg(long, global = true)]
    pub measure: Option<SizeMeasure>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Probe a single page
    Check {
        /// HTML file to load, or `-` for stdin
        path: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Probe every `.html` template in a directory
    Scan {
        /// Template directory
        dir: PathBuf,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,

        /// Exit non-zero if any page lacks a content region
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Resolve the probe configuration: file (or defaults), then flags.
    pub fn probe_config(&self) -> readyprobe::Result<ProbeConfig> {
        let mut config = ProbeConfig::load(self.config.as_deref())?;
        if let Some(selector) = &self.selector {
            config.selector = selector.clone();
        }
        if let Some(measure) = self.measure {
            config.size_measure = measure;
        }
        Ok(config)
    }
}
