// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// backlink [OPTIONS] <DOMAIN>
//
// The domain is a positional argument, so it can appear before, after or
// between the flags.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct below
// - Custom value parsers: plain functions that turn a &str into a value
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use backlink::{CrawlConfig, OutputFormat};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "backlink",
    version,
    about = "Returns a list of backlinks on a given website - both external and internal resources",
    long_about = "backlink fetches a web page, collects every link on it and sorts them into \
                  internal resources (same domain) and external backlinks. With --recursive it \
                  keeps following internal pages, one round per depth level."
)]
pub struct Cli {
    /// Website to scan, starting with http:// or https://
    pub domain: String,

    /// Allow insecure server connections (skip TLS certificate checks)
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Find backlinks recursively on the targeted website
    #[arg(short, long)]
    pub recursive: bool,

    /// Max depth for recursive scanning
    ///
    /// Depth 1 = just the starting page
    /// Depth 2 = starting page + the internal pages it links to
    /// etc. Ignored without --recursive.
    #[arg(long, default_value_t = 5, value_parser = parse_depth)]
    pub max_depth: usize,

    /// Output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output results in JSON format instead of one URL per line
    #[arg(long)]
    pub json: bool,

    /// Also list internal pages that were found but never fetched
    #[arg(long)]
    pub include_unfetched: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// Log every discovered link
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_depth: self.max_depth,
            insecure: self.insecure,
            recursive: self.recursive,
            timeout: Duration::from_secs(self.timeout),
            include_unfetched: self.include_unfetched,
            ..CrawlConfig::default()
        }
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }

    /// Default log filter when RUST_LOG isn't set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "backlink=debug"
        } else if self.quiet {
            "backlink=error"
        } else {
            "backlink=info"
        }
    }
}

fn parse_depth(value: &str) -> Result<usize, String> {
    let depth: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if depth < 1 {
        return Err("max depth must be at least 1".to_string());
    }
    Ok(depth)
}
