// src/target.rs
// =============================================================================
// The crawl target: the root URL a scan starts from.
//
// A CrawlTarget is validated once (http/https, has a host) and never changes
// afterwards. Everything that needs "the site we are scanning" asks it:
// - the seed path to start from
// - the origin (scheme://host[:port]) used to render and fetch internal paths
// - the host used to decide whether a link is internal
// =============================================================================

use std::fmt;

use url::Url;

use crate::error::TargetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    url: Url,
}

impl CrawlTarget {
    /// Parses and validates a root URL.
    ///
    /// Example:
    ///   "https://example.com/blog" -> host "example.com", seed path "/blog"
    pub fn parse(input: &str) -> Result<Self, TargetError> {
        let url = Url::parse(input.trim()).map_err(|source| TargetError::Parse {
            input: input.to_string(),
            source,
        })?;
        Self::from_url(url)
    }

    pub fn from_url(url: Url) -> Result<Self, TargetError> {
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(TargetError::Scheme(other.to_string())),
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(TargetError::MissingHost(url.to_string()));
        }
        Ok(Self { url })
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Lowercased host name, without port.
    pub fn host(&self) -> &str {
        // from_url rejects URLs without a host
        self.url.host_str().unwrap_or_default()
    }

    /// Explicit port, or None when the scheme default is used.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// `scheme://host[:port]`, the prefix every internal path is rendered with.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// The internal path the crawl is seeded with.
    pub fn seed_path(&self) -> String {
        crate::links::internal_path(&self.url)
    }

    /// Absolute URL for an internal path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.origin(), path)
    }

    /// The target as a parsed URL, used to resolve root- and scheme-relative links.
    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for CrawlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
