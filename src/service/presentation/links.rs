//! Best-effort link scraping from free text

use regex::Regex;

/// Matches `http(s)` URLs terminated by whitespace, a comma, or a double
/// quote, and bare `www.` hosts additionally terminated by a closing paren.
const LINK_PATTERN: &str = r#"https?://[^\s,"]+|www\.[^\s,")]+"#;

/// Scan free text for purchase links, in order of appearance.
///
/// This is text scraping, not URL validation: duplicates and unreachable
/// addresses pass through unfiltered.
pub fn scan_links(text: &str) -> Vec<String> {
    let pattern = Regex::new(LINK_PATTERN).unwrap();
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
