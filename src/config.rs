// src/config.rs
// =============================================================================
// Options that control one crawl.
//
// The CLI (src/cli.rs) fills this in from flags; library users can start from
// CrawlConfig::default() and override fields. A config never changes while a
// crawl is running.
// =============================================================================

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Upper bound on fetch rounds when `recursive` is set. Round 1 is the seed.
    pub max_depth: usize,
    /// Skip TLS certificate validation for this crawl's HTTP client.
    pub insecure: bool,
    /// Keep fetching newly discovered internal pages after the seed.
    pub recursive: bool,
    /// Per-request timeout; a timed-out page counts as a failed fetch.
    pub timeout: Duration,
    /// Also report internal paths that were registered but never fetched.
    pub include_unfetched: bool,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            insecure: false,
            recursive: false,
            timeout: DEFAULT_TIMEOUT,
            include_unfetched: false,
            user_agent: concat!("backlink/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CrawlConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth < 1 {
            return Err(ConfigError::MaxDepth(self.max_depth));
        }
        Ok(())
    }

    /// How many fetch rounds this config allows.
    ///
    /// Without recursion only the seed round runs, whatever max_depth says.
    pub fn round_limit(&self) -> usize {
        if self.recursive {
            self.max_depth
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_depth, 5);
        assert!(config.validate().is_ok());
        assert!(config.user_agent.starts_with("backlink/"));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = CrawlConfig {
            max_depth: 0,
            ..CrawlConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxDepth(0)));
    }

    #[test]
    fn test_round_limit() {
        let mut config = CrawlConfig {
            max_depth: 3,
            ..CrawlConfig::default()
        };
        assert_eq!(config.round_limit(), 1);

        config.recursive = true;
        assert_eq!(config.round_limit(), 3);
    }
}
