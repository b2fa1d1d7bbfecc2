//! # readyprobe-cli
//!
//! Command-line front end for the page readiness probe:
//! - `check`: probe a single page (file or stdin)
//! - `scan`: probe every HTML template in a directory

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use commands::{PageResult, ScanSummary, Status, check_reader, run, run_with_output};
pub use error::{Error, Result};
