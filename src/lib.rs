// src/lib.rs
// =============================================================================
// Library root for backlink.
//
// The crawl core lives here so it can be driven both by the CLI (src/main.rs)
// and by the integration tests in tests/.
//
// Modules:
// - target: the validated root URL of a crawl
// - config: crawl options (depth, recursion, TLS, timeout)
// - error: typed errors for every failure the crawl can hit
// - links: pulling hrefs out of HTML and deciding what they point at
// - crawl: the frontier, the HTTP client and the traversal engine
// - output: writing the final result to stdout or a file
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod links;
pub mod output;
pub mod target;

pub use config::CrawlConfig;
pub use crawl::{CrawlResult, Crawler, FetchFailure, Frontier, HttpClient};
pub use error::{ConfigError, CrawlError, FetchError, LinkError, SinkError, TargetError};
pub use links::{classify, extract_links, LinkKind};
pub use output::{OutputFormat, Sink};
pub use target::CrawlTarget;
