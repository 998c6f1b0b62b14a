// src/report.rs
// =============================================================================
// Prints search results and crawl summaries.
//
// Two formats, same as the --json flag suggests:
// - Human-readable: a header and one "- url" line per result
// - JSON: the result struct serialized with serde_json
//
// Rendering and printing are separate so the text can be tested without
// capturing stdout.
// =============================================================================

use crate::crawl::{CrawlSummary, FailedPage};
use crate::index::SearchResult;
use anyhow::Result;

// Builds the human-readable report for a search
//
// Example:
//   Search results:
//   - https://example.com
//   - https://example.com/about
pub fn render_results(results: &SearchResult) -> String {
    if results.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut out = String::from("Search results:\n");
    for url in &results.urls {
        out.push_str(&format!("- {}\n", url));
    }
    out
}

pub fn print_results(results: &SearchResult, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        print!("{}", render_results(results));
    }
    Ok(())
}

pub fn render_summary(summary: &CrawlSummary) -> String {
    let mut out = String::new();
    for url in &summary.indexed {
        out.push_str(&format!("✅ {}\n", url));
    }
    for failed in &summary.failed {
        out.push_str(&render_failure(failed));
    }

    out.push_str("\n📊 Summary:\n");
    out.push_str(&format!("   📄 Indexed: {}\n", summary.indexed.len()));
    out.push_str(&format!("   ❌ Failed: {}\n", summary.failed.len()));
    out.push_str(&format!("   ⏭️  Skipped links: {}\n", summary.skipped_links));
    out
}

fn render_failure(failed: &FailedPage) -> String {
    format!("❌ {} ({})\n", failed.url, failed.error)
}

pub fn print_summary(summary: &CrawlSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_summary(summary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(urls: &[&str]) -> SearchResult {
        SearchResult {
            keyword: "example".to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_results() {
        let text = render_results(&result(&["https://test.com/result"]));
        assert_eq!(text, "Search results:\n- https://test.com/result\n");
    }

    #[test]
    fn test_render_no_results() {
        assert_eq!(render_results(&result(&[])), "No results found.\n");
    }

    #[test]
    fn test_results_json_shape() {
        let json = serde_json::to_value(result(&["https://a.test"])).unwrap();
        assert_eq!(json["keyword"], "example");
        assert_eq!(json["urls"][0], "https://a.test");
    }

    #[test]
    fn test_render_summary_counts() {
        let summary = CrawlSummary {
            indexed: vec!["https://example.com".to_string()],
            failed: vec![FailedPage {
                url: "https://example.com/x".to_string(),
                error: "fetch failed".to_string(),
            }],
            skipped_links: 3,
        };
        let text = render_summary(&summary);

        assert!(text.contains("✅ https://example.com\n"));
        assert!(text.contains("❌ https://example.com/x (fetch failed)"));
        assert!(text.contains("Indexed: 1"));
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("Skipped links: 3"));
    }
}
