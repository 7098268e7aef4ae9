//! Utility functions shared by the extractors.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text measurement and rounding helpers

mod selector;
mod text;

pub use selector::parse_selector_unsafe;
pub use text::{
    char_length, percentage_two_places, phrase_word_count, ratio_two_places, split_piece_count,
};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
