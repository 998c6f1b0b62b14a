// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a single website.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Every URL is fetched at most once (visited registry)
// - Only links starting with the crawl boundary are followed
// - A page that fails is logged and skipped without stopping the crawl
// - Optional page and depth limits
//
// Submodules:
// - queue: The crawl loop and its configuration
// - registry: Which URLs have already been claimed
// - resolve: Which links may be followed
// - error: Why a page failed
// =============================================================================

mod error;
mod queue;
mod registry;
mod resolve;

pub use error::CrawlError;
pub use queue::{CrawlConfig, CrawlSummary, Crawler, FailedPage};
pub use registry::VisitedRegistry;
pub use resolve::admit_link;
