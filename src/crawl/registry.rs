// src/crawl/registry.rs
// =============================================================================
// Tracks which URLs have already been claimed for fetching.
//
// A URL is claimed right before it is fetched. Once claimed it stays claimed
// for the whole run, whether the fetch worked or not. That is what stops the
// crawler from looping forever on pages that link to each other.
// =============================================================================

use std::collections::HashSet;

/// Set of URLs claimed during one crawl run
#[derive(Debug, Default, Clone)]
pub struct VisitedRegistry {
    urls: HashSet<String>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url` as claimed.
    ///
    /// Returns true only for the first claim of a URL; every later call with
    /// the same URL returns false and changes nothing.
    pub fn claim(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    #[cfg(test)]
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_wins() {
        let mut registry = VisitedRegistry::new();
        assert!(registry.claim("https://example.com"));
        assert!(!registry.claim("https://example.com"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_urls_compared_as_strings() {
        // No normalization: a trailing slash makes a different URL
        let mut registry = VisitedRegistry::new();
        assert!(registry.claim("https://example.com"));
        assert!(registry.claim("https://example.com/"));
        assert!(registry.contains("https://example.com/"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = VisitedRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(!registry.contains("https://example.com"));
    }
}
