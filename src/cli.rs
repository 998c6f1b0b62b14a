// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// With no arguments at all, `site-search search` crawls https://example.com
// and searches it for "example".
// =============================================================================

use clap::{Args, Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "site-search",
    version,
    about = "Crawl one website and search its pages for a keyword",
    long_about = "site-search follows every link on a website that stays under the starting URL, \
                  indexes the text of each page, and lists the pages containing a keyword."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website, then search it for a keyword
    ///
    /// Example: site-search search https://example.com rust --max-pages 50
    Search {
        /// Website URL to start crawling from
        #[arg(default_value = "https://example.com")]
        seed_url: String,

        /// Keyword to look for (case-insensitive substring)
        #[arg(default_value = "example")]
        keyword: String,

        #[command(flatten)]
        crawl: CrawlArgs,
    },

    /// Crawl a website and report which pages were indexed
    ///
    /// Example: site-search crawl https://example.com --max-depth 2
    Crawl {
        /// Website URL to start crawling from
        #[arg(default_value = "https://example.com")]
        seed_url: String,

        #[command(flatten)]
        crawl: CrawlArgs,
    },
}

// Options shared by both subcommands
#[derive(Args, Debug, Clone)]
pub struct CrawlArgs {
    /// Only follow links starting with this prefix (default: the seed URL)
    #[arg(long)]
    pub boundary: Option<String>,

    /// Stop after this many pages (default: no limit)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Don't follow links more than this many hops from the seed (default: no limit)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}
