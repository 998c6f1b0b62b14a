// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, filtered by RUST_LOG, written to stderr)
// 2. Parse command-line arguments using clap
// 3. Crawl the website, then search or summarize
// 4. Exit with proper code (0 = found something, 1 = nothing found, 2 = error)
//
// Logs go to stderr and results go to stdout, so `--json` output can be
// piped straight into another tool.
// =============================================================================

mod cli;
mod crawl;
mod index;
mod page;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, CrawlArgs};
use crawl::{CrawlConfig, Crawler};
use page::HttpFetcher;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG overrides the default "info" level, e.g. RUST_LOG=site_search=debug
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = search matched (or crawl indexed) at least one page
//   Ok(1) = nothing matched / nothing indexed
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            seed_url,
            keyword,
            crawl,
        } => handle_search(&seed_url, &keyword, crawl).await,
        Commands::Crawl { seed_url, crawl } => handle_crawl(&seed_url, crawl).await,
    }
}

async fn handle_search(seed_url: &str, keyword: &str, args: CrawlArgs) -> Result<i32> {
    let json = args.json;
    let mut crawler = build_crawler(args)?;

    crawler.crawl(seed_url).await;

    if crawler.index().is_empty() {
        tracing::warn!(url = %seed_url, "no pages were indexed");
    }

    let results = crawler.search(keyword);
    tracing::info!(
        keyword = %keyword,
        pages = crawler.index().len(),
        visited = crawler.registry().len(),
        matches = results.len(),
        "search finished"
    );
    report::print_results(&results, json)?;

    Ok(if results.is_empty() { 1 } else { 0 })
}

async fn handle_crawl(seed_url: &str, args: CrawlArgs) -> Result<i32> {
    let json = args.json;
    let mut crawler = build_crawler(args)?;

    let summary = crawler.crawl(seed_url).await;
    report::print_summary(&summary, json)?;

    Ok(if summary.indexed.is_empty() { 1 } else { 0 })
}

fn build_crawler(args: CrawlArgs) -> Result<Crawler<HttpFetcher>> {
    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;

    let mut config = CrawlConfig::new();
    if let Some(boundary) = args.boundary {
        config = config.boundary(boundary);
    }
    if let Some(max_pages) = args.max_pages {
        config = config.max_pages(max_pages);
    }
    if let Some(max_depth) = args.max_depth {
        config = config.max_depth(max_depth);
    }

    Ok(Crawler::new(fetcher, config))
}
