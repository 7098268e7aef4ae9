//! Metric extractors.
//!
//! Each extractor reads a [`ParsedDocument`](crate::parse::ParsedDocument) and
//! produces one facet of the report. Extractors are independent of each other
//! and hold no state between calls:
//! - Metadata (title, description, head tags, hreflang)
//! - Headings (H1-H6 counts, first H1 text)
//! - Words (body word count, anchor-text share)
//! - Links (internal/external/nofollow counts, hyperlink list)
//! - Images (missing `src`/`alt` counts, attribute list)

mod headings;
mod images;
mod links;
mod metadata;
mod words;

// Re-export public API
pub use headings::{extract_headings, HeadingSummary};
pub use images::{extract_images, ImageRecord, ImageSummary};
pub use links::{extract_links, LinkClassification, LinkRecord, LinkSummary};
pub use metadata::{
    count_meta_descriptions, count_titles, extract_meta_description, extract_metadata_info,
    extract_title, HreflangEntry, MetadataInfo, TagStatistics,
};
pub use words::{
    count_anchor_words, count_word_tokens, extract_word_statistics, WordCountMethod,
    WordStatistics,
};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
