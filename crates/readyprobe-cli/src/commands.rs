//! Command handlers.
//!
//! Each page is one page load: its text is read, parsed, and handed to the
//! probe through a fresh lifecycle harness. Diagnostics go to `tracing`
//! (stderr); JSON reports and summaries go to stdout.

use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use readyprobe::{HtmlDocument, Probe, ProbeReport, TracingSink, page_load};
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::cli::{Cli, Command};
use crate::error::{Error, Result};

/// Label used for pages read from stdin.
pub const STDIN_LABEL: &str = "<stdin>";

/// How a command finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Nothing to flag.
    Clean,
    /// Strict scan found pages without a content region.
    ContentMissing,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Clean => ExitCode::SUCCESS,
            Status::ContentMissing => ExitCode::FAILURE,
        }
    }
}

/// The report for one page.
#[derive(Clone, Debug, Serialize)]
pub struct PageResult {
    /// Page label (file name or `<stdin>`).
    pub page: String,
    /// What the probe found.
    pub report: ProbeReport,
}

/// Reports for every page in a scanned directory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanSummary {
    /// Per-page results, ordered by file name.
    pub pages: Vec<PageResult>,
}

impl ScanSummary {
    /// Pages without a content region.
    pub fn missing(&self) -> impl Iterator<Item = &PageResult> {
        self.pages.iter().filter(|p| !p.report.is_found())
    }
}

/// Dispatch a parsed command line, writing reports to stdout.
pub async fn run(cli: Cli) -> Result<Status> {
    run_with_output(cli, &mut std::io::stdout()).await
}

/// Dispatch a parsed command line, writing reports to `out`.
pub async fn run_with_output<W: Write>(cli: Cli, out: &mut W) -> Result<Status> {
    let probe = Probe::new(&cli.probe_config()?)?;
    tracing::debug!(
        selector = %probe.selector(),
        measure = %probe.measure(),
        "Probe configured"
    );

    match cli.command {
        Command::Check { path, json } => {
            let result = check(&probe, &path).await?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            }
            Ok(Status::Clean)
        }
        Command::Scan { dir, json, strict } => {
            let summary = scan(&probe, &dir).await?;
            let missing = summary.missing().count();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                writeln!(
                    out,
                    "{} page(s) checked, {missing} missing a content region",
                    summary.pages.len()
                )?;
                for page in summary.missing() {
                    writeln!(out, "  missing: {}", page.page)?;
                }
            }
            if strict && missing > 0 {
                Ok(Status::ContentMissing)
            } else {
                Ok(Status::Clean)
            }
        }
    }
}

/// Run one page load over already-read HTML.
pub fn check_source(probe: &Probe, page: &str, source: &str) -> ProbeReport {
    let doc = HtmlDocument::parse(source);
    let mut sink = TracingSink::new(page);
    page_load(probe, &doc, &mut sink)
}

/// Probe the page at `path`, or stdin when `path` is `-`.
pub async fn check(probe: &Probe, path: &Path) -> Result<PageResult> {
    if path == Path::new("-") {
        return check_reader(probe, STDIN_LABEL, tokio::io::stdin()).await;
    }

    let page = page_label(path);
    let source = read_page(path).await?;
    let report = check_source(probe, &page, &source);
    Ok(PageResult { page, report })
}

/// Probe a page streamed from `reader`, labelled `page`.
pub async fn check_reader<R>(probe: &Probe, page: &str, mut reader: R) -> Result<PageResult>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(|e| readyprobe::Error::io_with_path(e, page))?;

    let source = decode_page(&bytes, page);
    let report = check_source(probe, page, &source);
    Ok(PageResult {
        page: page.to_string(),
        report,
    })
}

/// Probe every `.html` / `.htm` file directly inside `dir`.
pub async fn scan(probe: &Probe, dir: &Path) -> Result<ScanSummary> {
    let metadata = tokio::fs::metadata(dir)
        .await
        .map_err(|e| readyprobe::Error::io_with_path(e, dir))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = html_files(dir).await?;
    paths.sort();
    tracing::info!(dir = %dir.display(), pages = paths.len(), "Scanning templates");

    let mut summary = ScanSummary::default();
    for path in paths {
        let source = read_page(&path).await?;
        let page = page_label(&path);
        let report = check_source(probe, &page, &source);
        summary.pages.push(PageResult { page, report });
    }
    Ok(summary)
}

async fn html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| readyprobe::Error::io_with_path(e, dir))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| readyprobe::Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map_err(|e| readyprobe::Error::io_with_path(e, &path))?
            .is_file();
        if is_file && is_html(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

async fn read_page(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| readyprobe::Error::io_with_path(e, path))?;
    Ok(decode_page(&bytes, &path.display().to_string()))
}

/// Decode page bytes as UTF-8, replacing invalid sequences like an HTML
/// parser would.
fn decode_page(bytes: &[u8], page: &str) -> String {
    let source = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = source {
        tracing::warn!(page = %page, "Page is not valid UTF-8; invalid bytes replaced");
    }
    source.into_owned()
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

fn page_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Tests
// ============================================================================
