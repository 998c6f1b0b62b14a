// src/page/html.rs
// =============================================================================
// This module turns an HTML body into plain text and a list of anchors.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which accepts any input the way a browser does
//
// Anchors are returned exactly as found, in document order. An <a> tag
// without an href is still reported (with href = None); deciding what to do
// with it is the link resolver's job, not the parser's.
// =============================================================================

use crate::crawl::CrawlError;
use scraper::{Html, Selector};

/// One <a> tag found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw href attribute, untouched
    pub href: Option<String>,
}

/// What the crawler needs from a page body
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// All text nodes of the document, concatenated
    pub text: String,
    /// Every <a> tag in document order
    pub anchors: Vec<Anchor>,
}

// Parses an HTML body
//
// Parameters:
//   body: the raw HTML (borrowed as &str)
//
// Returns: ParsedPage with the document text and its anchors
//
// Example:
//   body = "<p>Hi <a href='/x'>there</a></p>"
//   text = "Hi there", anchors = [Anchor { href: Some("/x") }]
pub fn parse_page(body: &str) -> Result<ParsedPage, CrawlError> {
    let document = Html::parse_document(body);

    let selector = Selector::parse("a").map_err(|e| CrawlError::Parse(e.to_string()))?;

    let text = document.root_element().text().collect::<String>();

    let anchors = document
        .select(&selector)
        .map(|element| Anchor {
            href: element.value().attr("href").map(str::to_string),
        })
        .collect();

    Ok(ParsedPage { text, anchors })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_anchors_in_order() {
        let html = r#"
            <html><body>
                <h1>Welcome!</h1>
                <a href="/about">About Us</a>
                <a href="https://www.external.com">External Link</a>
            </body></html>
        "#;
        let page = parse_page(html).unwrap();

        assert!(page.text.contains("Welcome!"));
        assert!(page.text.contains("About Us"));
        assert_eq!(
            page.anchors,
            vec![
                Anchor { href: Some("/about".to_string()) },
                Anchor { href: Some("https://www.external.com".to_string()) },
            ]
        );
    }

    #[test]
    fn test_anchor_without_href_is_kept() {
        let html = r#"<a href="">Empty Link</a><a>No href</a>"#;
        let page = parse_page(html).unwrap();

        assert_eq!(
            page.anchors,
            vec![
                Anchor { href: Some(String::new()) },
                Anchor { href: None },
            ]
        );
    }

    #[test]
    fn test_plain_text_body() {
        // Not HTML at all, but html5ever still produces a document
        let page = parse_page("just some words").unwrap();
        assert_eq!(page.text, "just some words");
        assert!(page.anchors.is_empty());
    }

    #[test]
    fn test_empty_body() {
        let page = parse_page("").unwrap();
        assert!(page.text.is_empty());
        assert!(page.anchors.is_empty());
    }
}
