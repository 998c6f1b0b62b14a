// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl itself: fetch, extract, index, follow links.
//
// How it works:
// 1. Put the seed URL on a stack
// 2. Pop a URL and claim it in the visited registry (skip it if already claimed)
// 3. Fetch the page and parse out its text and <a> tags
// 4. Store the text in the page index
// 5. Push every admitted link, so the first link on the page is visited next
// 6. Repeat until the stack is empty
//
// The stack gives the same visiting order as a recursive depth-first walk
// (a link's whole subtree is finished before its next sibling starts), but a
// large site can't overflow the call stack.
//
// Failures:
// - A page that fails to fetch or parse is logged and skipped
// - It stays claimed, so it is never retried, and it never enters the index
// - Its siblings and the rest of the crawl carry on as normal
//
// Rust concepts:
// - Generics: Crawler<F> works with any Fetcher (real HTTP or a test fake)
// - Vec as a stack: push() and pop() both work on the end
// =============================================================================

use super::{admit_link, CrawlError, VisitedRegistry};
use crate::index::{search, PageIndex, SearchResult};
use crate::page::{parse_page, Fetcher, ParsedPage};
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Settings for one crawl run
///
/// Every limit is off by default: the crawl follows every admitted link.
#[derive(Debug, Clone, Default)]
pub struct CrawlConfig {
    /// Prefix every followed link must start with (defaults to the seed URL)
    pub boundary: Option<String>,
    /// Stop after this many URLs have been claimed
    pub max_pages: Option<usize>,
    /// Don't follow links found on pages this many hops from the seed
    pub max_depth: Option<usize>,
}

impl CrawlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boundary(mut self, boundary: impl Into<String>) -> Self {
        self.boundary = Some(boundary.into());
        self
    }

    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// A page that could not be crawled
#[derive(Debug, Clone, Serialize)]
pub struct FailedPage {
    pub url: String,
    pub error: String,
}

/// What happened during one call to Crawler::crawl
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlSummary {
    /// URLs added to the index, in crawl order
    pub indexed: Vec<String>,
    pub failed: Vec<FailedPage>,
    /// Anchors that were empty or fell outside the boundary
    pub skipped_links: usize,
}

// Represents a page waiting on the stack
#[derive(Debug, Clone)]
struct CrawlItem {
    url: String,
    depth: usize, // How many link hops from the seed
}

/// Crawls one site and keeps everything it found
///
/// The registry and index belong to this value, so two crawlers never share
/// state.
pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
    registry: VisitedRegistry,
    index: PageIndex,
    // Fixed by the first crawl() call, then reused for every later page
    boundary: Option<String>,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        let boundary = config.boundary.clone();
        Self {
            fetcher,
            config,
            registry: VisitedRegistry::new(),
            index: PageIndex::new(),
            boundary,
        }
    }

    // Crawls every admitted page reachable from `seed`
    //
    // Parameters:
    //   seed: the URL to start from (any string; invalid URLs just fail)
    //
    // Returns: a CrawlSummary. Page failures are recorded there and in the
    // log, never returned as an error.
    pub async fn crawl(&mut self, seed: &str) -> CrawlSummary {
        let boundary = self
            .boundary
            .get_or_insert_with(|| seed.to_string())
            .clone();

        let mut summary = CrawlSummary::default();
        let mut stack = vec![CrawlItem {
            url: seed.to_string(),
            depth: 0,
        }];

        while let Some(item) = stack.pop() {
            if self.page_limit_reached() {
                warn!(
                    pending = stack.len() + 1,
                    "page limit reached, stopping crawl"
                );
                break;
            }

            // Claim before fetching: this is what breaks link cycles
            if !self.registry.claim(&item.url) {
                debug!(url = %item.url, "already visited");
                continue;
            }

            info!(url = %item.url, depth = item.depth, "crawling page");

            let page = match self.fetch_page(&item.url).await {
                Ok(page) => page,
                Err(e) => {
                    error!(url = %item.url, error = %e, "error crawling page");
                    summary.failed.push(FailedPage {
                        url: item.url,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            self.index.insert(item.url.clone(), page.text);
            summary.indexed.push(item.url.clone());

            if self.config.max_depth.is_some_and(|max| item.depth >= max) {
                debug!(url = %item.url, "max depth reached, not following links");
                continue;
            }

            let mut links = Vec::new();
            for anchor in &page.anchors {
                match admit_link(anchor.href.as_deref(), &item.url, Some(&boundary)) {
                    Some(link) => links.push(link),
                    None => {
                        debug!(href = ?anchor.href, page = %item.url, "link skipped");
                        summary.skipped_links += 1;
                    }
                }
            }

            // Reversed so the first link on the page is popped first
            for link in links.into_iter().rev() {
                stack.push(CrawlItem {
                    url: link,
                    depth: item.depth + 1,
                });
            }
        }

        info!(
            indexed = summary.indexed.len(),
            failed = summary.failed.len(),
            "crawl finished"
        );

        summary
    }

    /// Searches everything indexed so far
    pub fn search(&self, keyword: &str) -> SearchResult {
        search(&self.index, keyword)
    }

    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    pub fn registry(&self) -> &VisitedRegistry {
        &self.registry
    }

    // Fetch and parse collapse into one error type
    async fn fetch_page(&self, url: &str) -> Result<ParsedPage, CrawlError> {
        let body = self.fetcher.fetch(url).await?;
        parse_page(&body)
    }

    fn page_limit_reached(&self) -> bool {
        self.config
            .max_pages
            .is_some_and(|max| self.registry.len() >= max)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a stack and not a queue?
//    - A queue (VecDeque + pop_front) gives breadth-first order
//    - A stack (Vec + pop) gives depth-first order
//    - We want depth-first: finish one link's pages before the next link
//
// 2. Why push the links in reverse?
//    - pop() takes from the end, so the last thing pushed comes out first
//    - Pushing [a, b, c] reversed means `a` is on top and is visited next
//
// 3. Why is the claim check at pop time, not push time?
//    - A link may be pushed twice (two pages link to it)
//    - Whichever copy is popped first wins the claim, the other is skipped
//    - That matches the order a recursive crawl would have used
//
// 4. What is is_some_and?
//    - Option::is_some_and(|x| ...) is true only for Some(x) where the
//      closure returns true
//    - None (no limit configured) is always false
// -----------------------------------------------------------------------------
