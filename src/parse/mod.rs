//! Document model adapter.
//!
//! Wraps `scraper`'s permissive HTML5 parser and binds the resulting tree to a
//! base URL so that extractors can resolve relative references the way a
//! browser's reflected `href` properties do. Malformed or partial markup never
//! fails to parse; html5ever always produces a best-effort tree.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::error_handling::AuditError;

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe("body, frameset", "BODY_SELECTOR")
});

/// A parsed page bound to the URL its relative references resolve against.
///
/// Created fresh for every audit call and dropped when the call returns.
pub struct ParsedDocument {
    html: Html,
    base_url: Url,
}

impl ParsedDocument {
    /// Parses `text` as an HTML document whose base URL is `base_url`.
    pub fn parse(text: &str, base_url: Url) -> Self {
        Self {
            html: Html::parse_document(text),
            base_url,
        }
    }

    /// The underlying tree, for selector queries.
    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// First element matching `selector`, in document order.
    pub fn first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.html.select(selector).next()
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }

    /// Concatenated text of every text node under `<body>` (or `<frameset>`).
    ///
    /// # Errors
    ///
    /// Returns `AuditError::MissingBody` if the tree has neither element.
    pub fn body_text(&self) -> Result<String, AuditError> {
        self.first(&BODY_SELECTOR)
            .map(|body| text_content(&body))
            .ok_or(AuditError::MissingBody)
    }

    /// Resolves an `href`-style attribute value against the base URL.
    ///
    /// An absent attribute yields `""`; a value that cannot be resolved is
    /// returned unchanged.
    pub fn resolve_href(&self, href: Option<&str>) -> String {
        match href {
            None => String::new(),
            Some(raw) => self
                .base_url
                .join(raw)
                .map(String::from)
                .unwrap_or_else(|_| raw.to_string()),
        }
    }
}

/// Text content of an element: all descendant text nodes, untrimmed.
pub fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
