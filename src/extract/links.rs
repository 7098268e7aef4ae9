//! Link enumeration and internal/external/nofollow classification.

use serde::Serialize;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::error_handling::AuditError;
use crate::parse::{text_content, ParsedDocument};
use crate::utils::parse_selector_unsafe;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a", "ANCHOR_SELECTOR"));
// Hyperlinks the way a browser's `document.links` lists them
static HYPERLINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href], area[href]", "HYPERLINK_SELECTOR"));

/// Rule deciding whether an anchor points inside or outside the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClassification {
    /// Resolve the raw href against the base URL and compare hostnames.
    /// Same hostname is internal.
    Hostname,
    /// Resolve the href, then anything starting with `http` is external.
    ///
    /// Because relative hrefs resolve to absolute `http(s)` URLs, this counts
    /// same-site links as external. Kept as-is; see DESIGN.md.
    SchemePrefix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    /// Every `<a>` element, with or without `href`
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    /// Anchors whose `rel` token list contains `nofollow`
    pub nofollow: usize,
    /// `a[href]` and `area[href]` in document order
    pub records: Vec<LinkRecord>,
}

/// Classifies every anchor under `rule` and lists the page's hyperlinks.
///
/// # Errors
///
/// Under [`LinkClassification::Hostname`], returns `AuditError::InvalidLink`
/// for the first href that cannot be resolved against the base URL.
pub fn extract_links(
    doc: &ParsedDocument,
    rule: LinkClassification,
) -> Result<LinkSummary, AuditError> {
    let mut summary = LinkSummary::default();

    for anchor in doc.html().select(&ANCHOR_SELECTOR) {
        summary.total += 1;
        if is_internal(doc, &anchor, rule)? {
            summary.internal += 1;
        } else {
            summary.external += 1;
        }
        if is_nofollow(&anchor) {
            summary.nofollow += 1;
        }
    }

    summary.records = doc
        .html()
        .select(&HYPERLINK_SELECTOR)
        .map(|link| LinkRecord {
            href: doc.resolve_href(link.value().attr("href")),
            text: text_content(&link).trim().to_string(),
        })
        .collect();

    log::debug!(
        "Links ({rule:?}): {} total, {} internal, {} external, {} nofollow",
        summary.total,
        summary.internal,
        summary.external,
        summary.nofollow
    );
    Ok(summary)
}

fn is_internal(
    doc: &ParsedDocument,
    anchor: &ElementRef<'_>,
    rule: LinkClassification,
) -> Result<bool, AuditError> {
    match rule {
        LinkClassification::Hostname => {
            let raw = anchor.value().attr("href").unwrap_or_default();
            let resolved = doc
                .base_url()
                .join(raw)
                .map_err(|source| AuditError::InvalidLink {
                    href: raw.to_string(),
                    source,
                })?;
            Ok(resolved.host_str() == doc.base_url().host_str())
        }
        LinkClassification::SchemePrefix => {
            let href = doc.resolve_href(anchor.value().attr("href"));
            Ok(!href.starts_with("http"))
        }
    }
}

fn is_nofollow(anchor: &ElementRef<'_>) -> bool {
    anchor
        .value()
        .attr("rel")
        .is_some_and(|rel| rel.split_ascii_whitespace().any(|token| token == "nofollow"))
}
