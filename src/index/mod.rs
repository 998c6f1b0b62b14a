// src/index/mod.rs
// =============================================================================
// The page index: every successfully fetched URL mapped to its page text.
//
// This is the corpus the search runs over. It remembers the order in which
// pages were added, because search results are reported in that order.
//
// Submodules:
// - search: Case-insensitive keyword search over the index
// =============================================================================

mod search;

pub use search::{search, SearchResult};

use indexmap::IndexMap;

/// URL -> extracted text, in insertion order
#[derive(Debug, Default, Clone)]
pub struct PageIndex {
    pages: IndexMap<String, String>,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the text for `url`, replacing any earlier text but keeping the
    /// URL's original position.
    pub fn insert(&mut self, url: impl Into<String>, text: impl Into<String>) {
        self.pages.insert(url.into(), text.into());
    }

    #[cfg(test)]
    pub fn get(&self, url: &str) -> Option<&str> {
        self.pages.get(url).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// (url, text) pairs in the order they were indexed
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pages.iter().map(|(url, text)| (url.as_str(), text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut index = PageIndex::new();
        index.insert("page-b", "second letter");
        index.insert("page-a", "first letter");

        let urls: Vec<&str> = index.iter().map(|(url, _)| url).collect();
        assert_eq!(urls, vec!["page-b", "page-a"]);
    }

    #[test]
    fn test_url_appears_once() {
        let mut index = PageIndex::new();
        index.insert("page1", "old");
        index.insert("page2", "other");
        index.insert("page1", "new");

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("page1"), Some("new"));
        assert_eq!(index.iter().next(), Some(("page1", "new")));
    }

    #[test]
    fn test_empty_text_is_still_indexed() {
        let mut index = PageIndex::new();
        index.insert("blank", "");
        assert!(index.contains("blank"));
        assert_eq!(index.get("blank"), Some(""));
    }
}
