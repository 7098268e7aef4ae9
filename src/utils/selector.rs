//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// All selectors used by the extractors are string literals, so a parse failure
/// is a programming error rather than something a page can trigger.
///
/// # Panics
///
/// Panics if the selector cannot be parsed.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
