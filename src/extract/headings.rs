//! Heading structure: element counts for H1 through H6 and the first H1's text.

use std::sync::LazyLock;

use scraper::Selector;

use crate::parse::{text_content, ParsedDocument};
use crate::utils::parse_selector_unsafe;

static HEADING_SELECTORS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    [
        parse_selector_unsafe("h1", "HEADING_SELECTORS"),
        parse_selector_unsafe("h2", "HEADING_SELECTORS"),
        parse_selector_unsafe("h3", "HEADING_SELECTORS"),
        parse_selector_unsafe("h4", "HEADING_SELECTORS"),
        parse_selector_unsafe("h5", "HEADING_SELECTORS"),
        parse_selector_unsafe("h6", "HEADING_SELECTORS"),
    ]
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingSummary {
    counts: [usize; 6],
    /// Text content of the first `<h1>`, `""` if the page has none
    pub first_h1: String,
}

impl HeadingSummary {
    /// Count for heading `level` (1-6); 0 for any other level.
    pub fn count(&self, level: usize) -> usize {
        level
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }
}

pub fn extract_headings(doc: &ParsedDocument) -> HeadingSummary {
    let mut counts = [0; 6];
    for (count, selector) in counts.iter_mut().zip(HEADING_SELECTORS.iter()) {
        *count = doc.count(selector);
    }

    let first_h1 = doc
        .first(&HEADING_SELECTORS[0])
        .map(|h1| text_content(&h1))
        .unwrap_or_default();

    log::debug!("Heading counts H1-H6: {counts:?}");
    HeadingSummary { counts, first_h1 }
}
