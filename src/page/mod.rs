// src/page/mod.rs
// =============================================================================
// This module holds the two things the crawler needs from the outside world.
//
// Submodules:
// - http: Downloads a page body for a URL
// - html: Extracts plain text and <a> tags from a page body
//
// Rust concepts:
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;
mod http;

pub use html::{parse_page, ParsedPage};
pub use http::{Fetcher, HttpFetcher};
