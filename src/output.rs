// src/output.rs
// =============================================================================
// Writes a finished crawl somewhere.
//
// Destinations:
// - stdout (default)
// - a file given with -o/--output
//
// Formats:
// - plain: one URL per line, internal resources first, then external links
// - json:  {"internal": [...], "external": [...]}
//
// The whole document is rendered in memory before anything is written, so an
// output file is either created with its full content or not at all.
// =============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::crawl::CrawlResult;
use crate::error::SinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

// Shape of the --json output
#[derive(Serialize)]
struct Report<'a> {
    internal: Vec<String>,
    external: &'a [String],
}

impl Sink {
    /// Picks a file sink when a path was given, stdout otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Sink::Stdout, Sink::File)
    }

    pub fn write(&self, result: &CrawlResult, format: OutputFormat) -> Result<(), SinkError> {
        let document = render(result, format)?;
        match self {
            Sink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(document.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(SinkError::Stdout)
            }
            Sink::File(path) => fs::write(path, document).map_err(|source| SinkError::File {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Renders a result into the text that gets written out.
pub fn render(result: &CrawlResult, format: OutputFormat) -> Result<String, SinkError> {
    match format {
        OutputFormat::Plain => Ok(result
            .entries()
            .into_iter()
            .map(|entry| entry + "\n")
            .collect()),
        OutputFormat::Json => {
            let report = Report {
                internal: result.internal_urls().collect(),
                external: &result.external,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}
