// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout only carries results)
// 3. Validate the domain and crawl it
// 4. Hand the result to the sink (stdout or --output file)
// 5. Exit with proper code (0 = success, 1 = crawl failed, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use backlink::{CrawlResult, CrawlTarget, Crawler, Sink};
use clap::Parser;
use cli::Cli;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_telemetry(cli.log_filter());

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins over the -v/-q defaults when it is set
fn init_telemetry(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Returns:
//   Ok(0) = crawl and output succeeded
//   Ok(1) = the seed page could not be fetched (an empty result was written)
//   Err   = bad domain, crawler setup failure, or output failure
async fn run(cli: Cli) -> Result<i32> {
    let target = CrawlTarget::parse(&cli.domain)
        .context("domain must be a valid domain, starting with http:// or https://")?;

    let sink = Sink::from_path(cli.output.clone());
    let crawler = Crawler::new(target.clone(), cli.crawl_config())
        .context("failed to set up the crawler")?;

    info!(%target, recursive = cli.recursive, max_depth = cli.max_depth, "scanning");

    let (result, code) = match crawler.run().await {
        Ok(result) => {
            if !result.failures.is_empty() {
                warn!(count = result.failures.len(), "some pages could not be fetched");
            }
            (result, 0)
        }
        Err(e) => {
            error!(error = %e, "crawl failed");
            (CrawlResult::empty(&target), 1)
        }
    };

    sink.write(&result, cli.format())
        .context("failed to write results")?;

    Ok(code)
}
