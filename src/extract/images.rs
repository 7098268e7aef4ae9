//! Image attribute coverage.

use serde::Serialize;
use std::sync::LazyLock;

use scraper::Selector;

use crate::parse::ParsedDocument;
use crate::utils::parse_selector_unsafe;

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMAGE_SELECTOR"));

/// Raw `src`/`alt` of one `<img>`; an absent attribute becomes `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSummary {
    pub total: usize,
    /// Images whose `src` is absent or empty
    pub missing_src: usize,
    /// Images whose `alt` is absent or empty
    pub missing_alt: usize,
    pub records: Vec<ImageRecord>,
}

pub fn extract_images(doc: &ParsedDocument) -> ImageSummary {
    let records: Vec<ImageRecord> = doc
        .html()
        .select(&IMAGE_SELECTOR)
        .map(|img| ImageRecord {
            src: img.value().attr("src").unwrap_or_default().to_string(),
            alt: img.value().attr("alt").unwrap_or_default().to_string(),
        })
        .collect();

    let summary = ImageSummary {
        total: records.len(),
        missing_src: records.iter().filter(|img| img.src.is_empty()).count(),
        missing_alt: records.iter().filter(|img| img.alt.is_empty()).count(),
        records,
    };
    log::debug!(
        "Images: {} total, {} without src, {} without alt",
        summary.total,
        summary.missing_src,
        summary.missing_alt
    );
    summary
}
