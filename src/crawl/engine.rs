// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself, one round at a time.
//
// How it works:
// 1. Register the seed path in the frontier
// 2. Start a round: snapshot every unvisited path in the frontier
// 3. For each of them: fetch the page, extract its hrefs, classify them
//    - internal paths are registered (the frontier ignores known ones)
//    - external URLs go into a de-duplicated list
// 4. Mark the page visited (or failed) and move on
// 5. Repeat from 2 until nothing is unvisited or the round limit is hit
//
// Depth counts rounds: round 1 is the seed, round 2 is everything the seed
// linked to, and so on. Without --recursive only round 1 runs. Paths found in
// the last allowed round stay registered but are never fetched.
//
// Failures:
// - The seed page failing ends the crawl with CrawlError::SeedFetch
// - Any other page failing is logged, recorded, and skipped
// - A malformed href is logged and skipped
//
// One request is in flight at a time; the frontier needs no locking.
// =============================================================================

use std::collections::HashSet;

use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::CrawlConfig;
use crate::crawl::frontier::{Frontier, VisitState};
use crate::crawl::http::HttpClient;
use crate::error::{CrawlError, FetchError};
use crate::links::{classify, hrefs, LinkKind};
use crate::target::CrawlTarget;

/// One internal page that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub path: String,
    pub url: String,
    pub error: String,
}

/// Everything a finished crawl found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlResult {
    /// `scheme://host[:port]` of the target, prefixed to every internal path.
    pub origin: String,
    /// Internal paths in discovery order.
    pub internal: Vec<String>,
    /// External URLs in discovery order, no duplicates.
    pub external: Vec<String>,
    pub failures: Vec<FetchFailure>,
    /// Number of fetch rounds that ran.
    pub rounds: usize,
}

impl CrawlResult {
    /// The result handed to the sink when the crawl couldn't start.
    pub fn empty(target: &CrawlTarget) -> Self {
        Self {
            origin: target.origin(),
            ..Self::default()
        }
    }

    pub fn internal_urls(&self) -> impl Iterator<Item = String> + '_ {
        self.internal
            .iter()
            .map(move |path| format!("{}{}", self.origin, path))
    }

    /// Every output line: internal resources first, then external links.
    pub fn entries(&self) -> Vec<String> {
        self.internal_urls()
            .chain(self.external.iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty()
    }
}

pub struct Crawler {
    target: CrawlTarget,
    config: CrawlConfig,
    client: HttpClient,
    frontier: Frontier,
    external: Vec<String>,
    external_seen: HashSet<String>,
    failures: Vec<FetchFailure>,
    rounds: usize,
}

impl Crawler {
    /// Builds a crawler with its own HTTP client.
    pub fn new(target: CrawlTarget, config: CrawlConfig) -> Result<Self, CrawlError> {
        config.validate()?;
        let client = HttpClient::new(&config)?;
        Ok(Self::with_client(target, config, client))
    }

    pub fn with_client(target: CrawlTarget, config: CrawlConfig, client: HttpClient) -> Self {
        Self {
            target,
            config,
            client,
            frontier: Frontier::new(),
            external: Vec::new(),
            external_seen: HashSet::new(),
            failures: Vec::new(),
            rounds: 0,
        }
    }

    /// Runs the crawl to completion.
    ///
    /// Consumes the crawler: the frontier belongs to exactly one invocation.
    pub async fn run(mut self) -> Result<CrawlResult, CrawlError> {
        self.frontier.register(&self.target.seed_path());
        let limit = self.config.round_limit();

        while self.rounds < limit && self.frontier.has_unvisited() {
            self.rounds += 1;
            let batch = self.frontier.unvisited();
            info!(round = self.rounds, pages = batch.len(), "starting round");

            for path in batch {
                if let Err(source) = self.visit(&path).await {
                    let url = self.target.url_for(&path);
                    if self.rounds == 1 {
                        return Err(CrawlError::SeedFetch { url, source });
                    }
                    warn!(%url, error = %source, "failed to fetch page");
                    self.frontier.mark_failed(&path);
                    self.failures.push(FetchFailure {
                        path,
                        url,
                        error: source.to_string(),
                    });
                }
            }
        }

        if self.frontier.has_unvisited() {
            debug!(
                remaining = self.frontier.unvisited().len(),
                "round limit reached, leaving pages unfetched"
            );
        }

        Ok(self.finish())
    }

    // Fetches one internal page and feeds its links into the frontier
    async fn visit(&mut self, path: &str) -> Result<(), FetchError> {
        // Origin + path, never join(): a path like "//other.host/x" would be
        // read as scheme-relative and send the fetch to another host
        let page = Url::parse(&self.target.url_for(path))?;
        info!(round = self.rounds, url = %page, "fetching");

        let html = self.client.fetch(page.as_str()).await?;
        self.scan(&page, &html);
        self.frontier.mark_visited(path);
        Ok(())
    }

    // Kept synchronous: scraper's Html must not live across an .await
    fn scan(&mut self, page: &Url, html: &str) {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();

        for href in hrefs(&document) {
            // Same href twice on one page only needs classifying once
            if !seen.insert(href) {
                continue;
            }
            match classify(href, &self.target, page) {
                Ok(LinkKind::Internal(path)) => {
                    if self.frontier.register(&path) {
                        debug!(%path, "new internal resource");
                    }
                }
                Ok(LinkKind::External(url)) => self.add_external(url),
                Ok(LinkKind::Ignore) => {}
                Err(e) => warn!(page = %page, error = %e, "skipping link"),
            }
        }
    }

    fn add_external(&mut self, url: String) {
        if self.external_seen.insert(url.clone()) {
            debug!(%url, "new external link");
            self.external.push(url);
        }
    }

    fn finish(self) -> CrawlResult {
        let include_unfetched = self.config.include_unfetched;
        let internal = self
            .frontier
            .iter()
            .filter(|r| include_unfetched || r.state == VisitState::Fetched)
            .map(|r| r.path.clone())
            .collect();

        info!(
            rounds = self.rounds,
            known = self.frontier.len(),
            external = self.external.len(),
            failed = self.failures.len(),
            "crawl finished"
        );

        CrawlResult {
            origin: self.target.origin(),
            internal,
            external: self.external,
            failures: self.failures,
            rounds: self.rounds,
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why snapshot the frontier at the start of each round?
//    - Pages discovered while a round runs must wait for the next round,
//      otherwise one round could chase links arbitrarily deep
//
// 2. Why can't the crawl loop forever on A -> B -> A?
//    - register() refuses paths it already knows, and a visited path is never
//      unvisited again, so every path is fetched at most once
//
// 3. Why does visit() take &mut self across an .await?
//    - Only one page is fetched at a time, so nothing else needs the crawler
//      while we wait on the network
// -----------------------------------------------------------------------------
