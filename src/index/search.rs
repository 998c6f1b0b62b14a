// src/index/search.rs
// =============================================================================
// Keyword search over the page index.
//
// A page matches when its text contains the keyword, ignoring case.
// This is plain substring matching: "key" matches "keyword", and an empty
// keyword matches every page. Results are not ranked; they come back in the
// order the pages were indexed.
// =============================================================================

use super::PageIndex;
use serde::Serialize;

/// The URLs matching one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub keyword: String,
    pub urls: Vec<String>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

pub fn search(index: &PageIndex, keyword: &str) -> SearchResult {
    let needle = keyword.to_lowercase();

    let urls = index
        .iter()
        .filter(|(_, text)| text.to_lowercase().contains(&needle))
        .map(|(url, _)| url.to_string())
        .collect();

    SearchResult {
        keyword: keyword.to_string(),
        urls,
    }
}
