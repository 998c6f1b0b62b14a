// src/crawl/resolve.rs
// =============================================================================
// Decides which links found on a page the crawler is allowed to follow.
//
// Two steps for every <a> tag:
// 1. Resolve the href to an absolute URL
//    (relative to the crawl boundary, or to the current page if there is none)
// 2. Admit it only if the absolute URL starts with the boundary string
//
// Known weakness:
//    The boundary check is a plain string prefix test, not a host comparison.
//    A boundary of "https://example.com" also admits
//    "https://example.com.attacker.test/". Tightening it would change which
//    pages get crawled, so it is kept exactly as is.
//
// Rust concepts:
// - Option<T>: "zero or one" result without needing an error type
// - The ? operator on Option: returns None early
// =============================================================================

use url::{Position, Url};

// Turns a raw anchor target into an admitted absolute URL
//
// Parameters:
//   href: the raw href attribute (None when the <a> tag had no href)
//   page_url: URL of the page the anchor was found on
//   boundary: the crawl boundary, fixed for the whole run
//
// Returns: Some(absolute_url) if the link may be crawled, None otherwise
//
// Example:
//   href = "/about", boundary = "https://example.com"
//   -> Some("https://example.com/about")
pub fn admit_link(href: Option<&str>, page_url: &str, boundary: Option<&str>) -> Option<String> {
    // Missing and empty hrefs are skipped before any resolution happens
    let href = href.filter(|h| !h.is_empty())?;

    let base = boundary.unwrap_or(page_url);
    let absolute_url = resolve_link(base, href)?;

    if absolute_url.starts_with(base) {
        Some(absolute_url)
    } else {
        None
    }
}

// Resolves a link (possibly relative) to an absolute URL
//
// Absolute hrefs are returned exactly as written. Relative ones go through
// RFC 3986 resolution (Url::join), then get the base's scheme and host back
// as the base spelled them, since Url lowercases the host and adds a "/"
// to an empty path.
//
// Examples:
//   base = "https://Example.com", href = "/about" -> "https://Example.com/about"
//   base = "https://example.com", href = "https://example.com" -> "https://example.com"
fn resolve_link(base: &str, href: &str) -> Option<String> {
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    let base_url = Url::parse(base).ok()?;
    let joined = base_url.join(href).ok()?;

    // Only swap the prefix back when the link stayed on the base's host
    match written_origin(base) {
        Some(origin) if joined[..Position::BeforePath] == base_url[..Position::BeforePath] => {
            Some(format!("{}{}", origin, &joined[Position::BeforePath..]))
        }
        _ => Some(joined.to_string()),
    }
}

// The "scheme://host:port" part of a URL exactly as written
fn written_origin(url: &str) -> Option<&str> {
    let start = url.find("://")? + 3;
    let end = url[start..]
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .map_or(url.len(), |i| start + i);
    Some(&url[..end])
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why resolve against the boundary and not the current page?
//    - The boundary is the seed URL of the run
//    - Every page's links are joined onto it, so "about" on
//      https://example.com/docs/intro becomes https://example.com/about
//    - The current page is only used when no boundary exists
//
// 2. Why String::starts_with instead of comparing hosts?
//    - It is the admission rule the crawler has always used
//    - It also confines the crawl to a path: a boundary of
//      https://example.com/docs only admits pages below /docs
// -----------------------------------------------------------------------------
