//! Metadata extraction: title, meta description, and the head tags summarized
//! in the full report's `metadata_info` section.

use serde::Serialize;
use std::sync::LazyLock;

use scraper::Selector;

use crate::config::{TAG_FOUND, TAG_NOT_FOUND};
use crate::parse::{text_content, ParsedDocument};
use crate::utils::{char_length, parse_selector_unsafe, phrase_word_count, ratio_two_places};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name=\"description\"]";
const META_CHARSET_SELECTOR_STR: &str = "meta[charset]";
const CANONICAL_SELECTOR_STR: &str = "link[rel=\"canonical\"]";
const ICON_SELECTOR_STR: &str = "link[rel=\"icon\"]";
const SHORTCUT_ICON_SELECTOR_STR: &str = "link[rel=\"shortcut icon\"]";
const VIEWPORT_SELECTOR_STR: &str = "meta[name=\"viewport\"]";
const KEYWORDS_SELECTOR_STR: &str = "meta[name=\"keywords\"]";
const OG_LOCALE_SELECTOR_STR: &str = "meta[property=\"og:locale\"]";
const OG_TYPE_SELECTOR_STR: &str = "meta[property=\"og:type\"]";
const OG_SITE_NAME_SELECTOR_STR: &str = "meta[property=\"og:site_name\"]";
const OG_IMAGE_SELECTOR_STR: &str = "meta[property=\"og:image\"]";
const ROBOTS_SELECTOR_STR: &str = "meta[name=\"robots\"]";
const HREFLANG_SELECTOR_STR: &str = "link[rel=\"alternate\"][hreflang]";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static META_CHARSET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_CHARSET_SELECTOR_STR, "META_CHARSET_SELECTOR"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static ICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ICON_SELECTOR_STR, "ICON_SELECTOR"));
static SHORTCUT_ICON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(SHORTCUT_ICON_SELECTOR_STR, "SHORTCUT_ICON_SELECTOR")
});
static VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(VIEWPORT_SELECTOR_STR, "VIEWPORT_SELECTOR"));
static KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(KEYWORDS_SELECTOR_STR, "KEYWORDS_SELECTOR"));
static OG_LOCALE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_LOCALE_SELECTOR_STR, "OG_LOCALE_SELECTOR"));
static OG_TYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_TYPE_SELECTOR_STR, "OG_TYPE_SELECTOR"));
static OG_SITE_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_SITE_NAME_SELECTOR_STR, "OG_SITE_NAME_SELECTOR"));
static OG_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_IMAGE_SELECTOR_STR, "OG_IMAGE_SELECTOR"));
static ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ROBOTS_SELECTOR_STR, "ROBOTS_SELECTOR"));
static HREFLANG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(HREFLANG_SELECTOR_STR, "HREFLANG_SELECTOR"));

/// Text of the first `<title>` element, untrimmed, or `None` if there is none.
pub fn extract_title(doc: &ParsedDocument) -> Option<String> {
    doc.first(&TITLE_SELECTOR).map(|title| text_content(&title))
}

/// Number of `<title>` elements in the document.
pub fn count_titles(doc: &ParsedDocument) -> usize {
    doc.count(&TITLE_SELECTOR)
}

/// Content of the first `<meta name="description">`.
///
/// `None` when the tag is absent; `Some("")` when the tag exists without a
/// `content` attribute.
pub fn extract_meta_description(doc: &ParsedDocument) -> Option<String> {
    meta_content(doc, &META_DESCRIPTION_SELECTOR)
}

/// Number of `<meta name="description">` elements in the document.
pub fn count_meta_descriptions(doc: &ParsedDocument) -> usize {
    doc.count(&META_DESCRIPTION_SELECTOR)
}

/// Derived statistics for a title or description value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagStatistics {
    /// `"Found"` if the tag exists (even with empty content), else `"Not found"`
    pub found: &'static str,
    /// The tag's text, `""` when absent
    pub data: String,
    pub length: usize,
    pub characters: usize,
    pub words: usize,
    #[serde(rename = "charPerWord")]
    pub char_per_word: f64,
}

impl TagStatistics {
    /// Computes statistics for an optional tag value.
    pub fn from_value(value: Option<&str>) -> Self {
        let data = value.unwrap_or_default();
        let length = char_length(data);
        let words = phrase_word_count(data);
        Self {
            found: if value.is_some() {
                TAG_FOUND
            } else {
                TAG_NOT_FOUND
            },
            data: data.to_string(),
            length,
            characters: length,
            words,
            char_per_word: ratio_two_places(length, words),
        }
    }
}

/// An alternate-language version of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangEntry {
    pub language: String,
    pub url: String,
}

/// Head metadata listed in the full report.
///
/// Each single-valued field is `None` when its tag is absent. Link-valued
/// fields hold the href resolved against the page's base URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataInfo {
    pub charset: Option<String>,
    pub canonical: Option<String>,
    pub favicon: Option<String>,
    pub viewport: Option<String>,
    pub keywords: Option<String>,
    pub locale: Option<String>,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    pub site_name: Option<String>,
    pub site_image: Option<String>,
    pub robots: Option<String>,
    /// Every `<link rel="alternate" hreflang>`, in source order, duplicates kept
    pub hreflangs: Vec<HreflangEntry>,
}

/// Collects the `metadata_info` section.
pub fn extract_metadata_info(doc: &ParsedDocument) -> MetadataInfo {
    let charset = doc
        .first(&META_CHARSET_SELECTOR)
        .and_then(|meta| meta.value().attr("charset").map(str::to_string));

    // rel="icon" wins over rel="shortcut icon" regardless of document order
    let favicon = link_href(doc, &ICON_SELECTOR).or_else(|| link_href(doc, &SHORTCUT_ICON_SELECTOR));

    let hreflangs = doc
        .html()
        .select(&HREFLANG_SELECTOR)
        .map(|link| HreflangEntry {
            language: link.value().attr("hreflang").unwrap_or_default().to_string(),
            url: doc.resolve_href(link.value().attr("href")),
        })
        .collect::<Vec<_>>();
    log::debug!("Found {} hreflang entries", hreflangs.len());

    MetadataInfo {
        charset,
        canonical: link_href(doc, &CANONICAL_SELECTOR),
        favicon,
        viewport: meta_content(doc, &VIEWPORT_SELECTOR),
        keywords: meta_content(doc, &KEYWORDS_SELECTOR),
        locale: meta_content(doc, &OG_LOCALE_SELECTOR),
        content_type: meta_content(doc, &OG_TYPE_SELECTOR),
        site_name: meta_content(doc, &OG_SITE_NAME_SELECTOR),
        site_image: meta_content(doc, &OG_IMAGE_SELECTOR),
        robots: meta_content(doc, &ROBOTS_SELECTOR),
        hreflangs,
    }
}

fn meta_content(doc: &ParsedDocument, selector: &Selector) -> Option<String> {
    doc.first(selector)
        .map(|meta| meta.value().attr("content").unwrap_or_default().to_string())
}

fn link_href(doc: &ParsedDocument, selector: &Selector) -> Option<String> {
    doc.first(selector)
        .map(|link| doc.resolve_href(link.value().attr("href")))
}
