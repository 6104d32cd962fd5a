// src/links/classify.rs
// =============================================================================
// This module decides what a raw href points at.
//
// Every href ends up as one of:
// - Ignore:   a scheme we don't crawl (mailto:, javascript:, tel:, ftp:, ...)
// - Internal: a path on the target host (or its www. twin)
// - External: an absolute URL on any other host
//
// Resolution rules:
// - "/foo" and "//host/foo" resolve against the crawl target, never against
//   the page they were found on, so a redirected page can't drag the crawl
//   onto another domain
// - "foo" and "../foo" resolve against the page they were found on
// - Internal paths keep their ?query and drop their #fragment
//
// Rust concepts:
// - Enums with data: LinkKind carries the normalized string for each variant
// - Result: a malformed href is an error value, not a panic
// =============================================================================

use tracing::debug;
use url::{ParseError, Url};

use crate::error::LinkError;
use crate::target::CrawlTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Not an http(s) link; dropped silently.
    Ignore,
    /// Path (plus query) on the target host.
    Internal(String),
    /// Fully resolved URL on another host.
    External(String),
}

// Classifies one href found on `page`
//
// Parameters:
//   href: the raw attribute value
//   target: the site being crawled
//   page: absolute URL of the page the href came from
//
// Examples (target = http://example.com):
//   "/docs"                          -> Internal("/docs")
//   "https://www.example.com/foo"    -> Internal("/foo")
//   "https://other.com"              -> External("https://other.com/")
//   "mailto:me@example.com"          -> Ignore
//   "http://[::1"                    -> Err(Malformed)
pub fn classify(href: &str, target: &CrawlTarget, page: &Url) -> Result<LinkKind, LinkError> {
    let href = href.trim();

    let resolved = match Url::parse(href) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            // Root- and scheme-relative links belong to the target, not the page
            let base = if href.starts_with('/') {
                target.as_url()
            } else {
                page
            };
            base.join(href).map_err(|source| malformed(href, source))?
        }
        Err(source) => return Err(malformed(href, source)),
    };

    if !matches!(resolved.scheme(), "http" | "https") {
        debug!(href, scheme = resolved.scheme(), "ignoring link");
        return Ok(LinkKind::Ignore);
    }

    if is_same_site(&resolved, target) {
        Ok(LinkKind::Internal(internal_path(&resolved)))
    } else {
        Ok(LinkKind::External(resolved.into()))
    }
}

/// Path plus query of a URL; the fragment is dropped.
pub fn internal_path(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

// A URL is internal when its host is the target host or "www." + target host,
// and any explicit port agrees. Default ports compare equal across schemes.
fn is_same_site(url: &Url, target: &CrawlTarget) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host_matches = host == target.host() || host.strip_prefix("www.") == Some(target.host());
    host_matches && url.port() == target.port()
}

fn malformed(href: &str, source: ParseError) -> LinkError {
    LinkError::Malformed {
        href: href.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> CrawlTarget {
        CrawlTarget::parse("http://example.com/").unwrap()
    }

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    fn run(href: &str) -> LinkKind {
        classify(href, &target(), &page("http://example.com/blog/post")).unwrap()
    }

    #[test]
    fn test_root_relative_is_internal() {
        assert_eq!(run("/docs"), LinkKind::Internal("/docs".into()));
    }

    #[test]
    fn test_relative_resolves_against_page() {
        assert_eq!(run("other"), LinkKind::Internal("/blog/other".into()));
        assert_eq!(run("../about"), LinkKind::Internal("/about".into()));
    }

    #[test]
    fn test_www_host_is_internal() {
        assert_eq!(
            run("https://www.example.com/foo"),
            LinkKind::Internal("/foo".into())
        );
        assert_eq!(run("http://EXAMPLE.com/bar"), LinkKind::Internal("/bar".into()));
    }

    #[test]
    fn test_query_kept_fragment_dropped() {
        assert_eq!(
            run("/search?q=rust#results"),
            LinkKind::Internal("/search?q=rust".into())
        );
    }

    #[test]
    fn test_other_host_is_external() {
        assert_eq!(
            run("https://other.com"),
            LinkKind::External("https://other.com/".into())
        );
        // a subdomain other than www is its own site
        assert_eq!(
            run("http://blog.example.com/x"),
            LinkKind::External("http://blog.example.com/x".into())
        );
    }

    #[test]
    fn test_scheme_relative_uses_target_scheme() {
        let target = CrawlTarget::parse("https://example.com").unwrap();
        let page = page("http://mirror.example.net/page");
        assert_eq!(
            classify("//cdn.other.com/lib.js", &target, &page).unwrap(),
            LinkKind::External("https://cdn.other.com/lib.js".into())
        );
        assert_eq!(
            classify("//example.com/a", &target, &page).unwrap(),
            LinkKind::Internal("/a".into())
        );
    }

    #[test]
    fn test_root_relative_ignores_page_host() {
        // Page was reached through a redirect to another domain
        let page = page("http://elsewhere.org/landing");
        assert_eq!(
            classify("/news", &target(), &page).unwrap(),
            LinkKind::Internal("/news".into())
        );
    }

    #[test]
    fn test_explicit_port_must_match() {
        let target = CrawlTarget::parse("http://127.0.0.1:8080/").unwrap();
        let page = page("http://127.0.0.1:8080/");
        assert_eq!(
            classify("http://127.0.0.1:8080/a", &target, &page).unwrap(),
            LinkKind::Internal("/a".into())
        );
        assert_eq!(
            classify("http://127.0.0.1:9090/a", &target, &page).unwrap(),
            LinkKind::External("http://127.0.0.1:9090/a".into())
        );
    }

    #[test]
    fn test_skip_other_schemes() {
        assert_eq!(run("mailto:test@example.com"), LinkKind::Ignore);
        assert_eq!(run("javascript:void(0)"), LinkKind::Ignore);
        assert_eq!(run("tel:+4512345678"), LinkKind::Ignore);
        assert_eq!(run("ftp://example.com/file"), LinkKind::Ignore);
    }

    #[test]
    fn test_malformed_href() {
        let result = classify("http://[::1", &target(), &page("http://example.com/"));
        assert!(matches!(result, Err(LinkError::Malformed { href, .. }) if href == "http://[::1"));

        let result = classify("http://exa mple.com/", &target(), &page("http://example.com/"));
        assert!(result.is_err());
    }

    #[test]
    fn test_internal_path_of_root() {
        assert_eq!(internal_path(&page("http://example.com")), "/");
        assert_eq!(internal_path(&page("http://example.com/?a=1")), "/?a=1");
    }
}
