//! Word and anchor-text statistics over the body text.

use regex::Regex;
use std::sync::LazyLock;

use scraper::Selector;

use crate::error_handling::AuditError;
use crate::parse::{text_content, ParsedDocument};
use crate::utils::{parse_selector_unsafe, percentage_two_places, split_piece_count};

/// Word tokens: maximal runs of ASCII letters, digits and underscore.
const WORD_TOKEN_PATTERN: &str = r"[A-Za-z0-9_]+";

static WORD_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WORD_TOKEN_PATTERN)
        .unwrap_or_else(|e| panic!("Failed to compile WORD_TOKEN_RE: {e}. This is a programming error."))
});

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a", "ANCHOR_SELECTOR"));

/// How the total word count is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCountMethod {
    /// Pieces of the body text split on whitespace runs (edge pieces included)
    WhitespaceSplit,
    /// Word tokens matched over the lowercased body text
    Tokens,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordStatistics {
    pub total: usize,
    pub anchor_words: usize,
    /// `anchor_words / total * 100`, two decimals, 0 when `total` is 0
    pub anchor_percentage: f64,
}

/// Counts word tokens in `text` after lowercasing it.
pub fn count_word_tokens(text: &str) -> usize {
    WORD_TOKEN_RE.find_iter(&text.to_lowercase()).count()
}

/// Sum of whitespace-separated words in every anchor's trimmed text.
pub fn count_anchor_words(doc: &ParsedDocument) -> usize {
    doc.html()
        .select(&ANCHOR_SELECTOR)
        .map(|a| text_content(&a).split_whitespace().count())
        .sum()
}

/// Computes word statistics for the document body.
///
/// # Errors
///
/// Returns `AuditError::MissingBody` if the document has no body element.
pub fn extract_word_statistics(
    doc: &ParsedDocument,
    method: WordCountMethod,
) -> Result<WordStatistics, AuditError> {
    let body = doc.body_text()?;
    let total = match method {
        WordCountMethod::WhitespaceSplit => split_piece_count(&body),
        WordCountMethod::Tokens => count_word_tokens(&body),
    };
    let anchor_words = count_anchor_words(doc);

    log::debug!("Word count ({method:?}): {total}, anchor words: {anchor_words}");
    Ok(WordStatistics {
        total,
        anchor_words,
        anchor_percentage: percentage_two_places(anchor_words, total),
    })
}
