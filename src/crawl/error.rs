// src/crawl/error.rs
// =============================================================================
// The error type for a single page that could not be crawled.
//
// Every way a page can fail (bad URL, network trouble, unparseable body)
// ends up as a CrawlError. The crawler treats all of them the same way:
// log it, remember the URL as visited, move on to the next link.
// =============================================================================

use thiserror::Error;

/// Why a single URL could not be fetched or parsed
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The string was not a well-formed absolute URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (connection refused, DNS, timeout, ...)
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The body could not be turned into text and anchors
    #[error("parse failed: {0}")]
    Parse(String),
}
