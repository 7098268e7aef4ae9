//! Text measurement helpers shared by the extractors.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| panic!("Failed to compile WHITESPACE_RUN_RE: {e}"))
});

/// Counts the pieces produced by splitting `text` on runs of whitespace.
///
/// Leading and trailing whitespace produce empty pieces that are counted too,
/// so `" a b "` yields 4 and `""` yields 1.
pub fn split_piece_count(text: &str) -> usize {
    WHITESPACE_RUN_RE.split(text).count()
}

/// Word count used for title and description statistics: the whitespace split
/// count, or 0 for an empty string.
pub fn phrase_word_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        split_piece_count(text)
    }
}

/// Length in characters (Unicode scalar values).
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}

/// `numerator / denominator` rounded to two decimal places, 0 when the
/// denominator is 0.
pub fn ratio_two_places(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (numerator as f64 / denominator as f64 * 100.0).round() / 100.0
}

/// `part / whole * 100` rounded to two decimal places, 0 when `whole` is 0.
pub fn percentage_two_places(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 10_000.0).round() / 100.0
}
