//! Error type definitions.
//!
//! This module defines the errors raised while setting up the application and
//! while running an audit.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::FETCH_FAILURE_MESSAGE;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that terminate a single audit call.
///
/// The `Display` text of each variant is what ends up in the report's `error`
/// field, so `FetchFailed` must keep its exact wording.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The page could not be retrieved (network error, timeout, non-2xx status,
    /// empty body, or a target that is not a fetchable URL).
    #[error("{}", FETCH_FAILURE_MESSAGE)]
    FetchFailed,

    /// An anchor's href could not be resolved against the page URL.
    #[error("Invalid URL '{href}': {source}")]
    InvalidLink {
        /// The raw href attribute value
        href: String,
        /// Why resolution failed
        #[source]
        source: url::ParseError,
    },

    /// The parsed document has neither a `<body>` nor a `<frameset>` element.
    #[error("Document has no body element")]
    MissingBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_message_is_stable() {
        assert_eq!(
            AuditError::FetchFailed.to_string(),
            "Failed to fetch URL content"
        );
    }

    #[test]
    fn test_invalid_link_message_names_href() {
        let source = url::Url::parse("http://[::1").unwrap_err();
        let err = AuditError::InvalidLink {
            href: "http://[::1".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid URL 'http://[::1'"), "{msg}");
    }
}
