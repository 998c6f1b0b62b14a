// src/page/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - A Fetcher trait: "URL in, body text out", so the crawler can be tested
//   with an in-memory site instead of the real internet
// - HttpFetcher: the real implementation, built on reqwest
//
// Status codes are NOT inspected. A 404 page still has a body, and that body
// gets indexed like any other. Only transport problems (bad URL, connection
// refused, timeout) count as a failed fetch.
//
// Rust concepts:
// - Traits: shared behaviour that different types can implement
// - async fn in traits: each implementation returns its own future
// =============================================================================

use crate::crawl::CrawlError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// Anything that can turn a URL into page text
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError>;
}

/// Fetches pages with a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds a fetcher with a per-request timeout
    //
    // The timeout lives here and not in the crawler: the crawler just waits
    // for whatever the fetcher returns.
    pub fn new(timeout: Duration) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("site-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        // Parse first so a malformed URL is reported as such
        let url = Url::parse(url)?;

        let response = self.client.get(url).send().await?;
        let body = response.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>Hello</body></html>")
            .expect(1)
            .create_async()
            .await;

        let body = fetcher()
            .fetch(&format!("{}/page", server.url()))
            .await
            .unwrap();

        assert_eq!(body, "<html><body>Hello</body></html>");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_still_returns_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("<html><body>Not here</body></html>")
            .create_async()
            .await;

        let body = fetcher()
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap();

        assert!(body.contains("Not here"));
    }

    #[tokio::test]
    async fn test_malformed_url_is_invalid_url_error() {
        let result = fetcher().fetch("not a url").await;
        assert!(matches!(result, Err(CrawlError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        // Port 1 on localhost is never listening
        let result = fetcher().fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(CrawlError::Fetch(_))));
    }
}
