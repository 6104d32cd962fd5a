// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Round-based breadth-first crawling starting from the target URL
// - Each internal page is fetched at most once (frontier.rs)
// - Configurable round limit, or a single round without --recursive
// - One HTTP client per crawl with its own timeout and TLS policy (http.rs)
// =============================================================================

mod engine;
mod frontier;
mod http;

pub use engine::{CrawlResult, Crawler, FetchFailure};
pub use frontier::{Frontier, Resource, VisitState};
pub use http::HttpClient;
