// src/error.rs
// =============================================================================
// Error types for the crawl library.
//
// Two kinds of failure exist:
// - Fatal: the seed page can't be fetched, or the output can't be written.
//   These bubble up to the caller.
// - Non-fatal: one internal page or one href is bad. The crawler logs these
//   and keeps going.
//
// The binary wraps these in anyhow::Error; the library keeps them typed so
// callers (and tests) can match on them.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// The root URL given to the crawler is unusable.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("invalid URL '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme '{0}', expected http or https")]
    Scheme(String),
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max depth must be at least 1, got {0}")]
    MaxDepth(usize),
}

/// Why a single page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FetchError {
    /// Sorts a reqwest error into timeout vs. anything else on the wire.
    pub(crate) fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(error)
        }
    }
}

/// An href found on a page that can't be parsed as a URI.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("malformed link '{href}': {source}")]
    Malformed {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to fetch seed page {url}: {source}")]
    SeedFetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The result destination could not be produced.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write output file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
