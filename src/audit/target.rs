//! The URL an audit was asked to examine.

use reqwest::Url;

use crate::config::{INPUT_TYPE_DOMAIN, INPUT_TYPE_URL_WITH_PATH};

/// A syntactically valid absolute `http`/`https` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTarget {
    input: String,
    url: Url,
}

impl AuditTarget {
    /// Validates `input`; returns `None` for anything that cannot be fetched
    /// (relative references, other schemes, malformed URLs).
    pub fn parse(input: &str) -> Option<Self> {
        match Url::parse(input) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Some(Self {
                    input: input.to_string(),
                    url,
                }),
                scheme => {
                    log::warn!("Unsupported URL scheme '{scheme}' for {input}");
                    None
                }
            },
            Err(e) => {
                log::warn!("Invalid URL '{input}': {e}");
                None
            }
        }
    }

    /// The URL string exactly as the caller supplied it.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn using_https(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// `"Domain"` when the path is empty once one leading and one trailing
    /// slash are removed, `"URL with path"` otherwise.
    pub fn input_type(&self) -> &'static str {
        let path = self.url.path();
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        if path.is_empty() {
            INPUT_TYPE_DOMAIN
        } else {
            INPUT_TYPE_URL_WITH_PATH
        }
    }
}
