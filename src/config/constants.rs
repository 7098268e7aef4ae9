//! Configuration constants.
//!
//! This module defines the fixed values used by the audit pipeline: the fetch
//! timeout, the browser identity sent with every request, and the labels that
//! appear verbatim in reports.

/// Fetch timeout in seconds.
///
/// A single request is issued per audit; if the whole exchange (connect, headers,
/// body) takes longer than this the fetch counts as failed.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a desktop Chrome on Windows so that pages serve the same markup a
/// visitor's browser would receive. Can be overridden via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Message carried by the `error` field when the page could not be fetched.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch URL content";

/// Value reported for `http.response_time`.
///
/// Timing is not measured; the field exists so consumers get a stable shape.
pub const SIMULATED_RESPONSE_TIME: &str = "Simulated";

// Presence flags for title / meta description
pub const TAG_FOUND: &str = "Found";
pub const TAG_NOT_FOUND: &str = "Not found";

// Input classification labels
pub const INPUT_TYPE_DOMAIN: &str = "Domain";
pub const INPUT_TYPE_URL_WITH_PATH: &str = "URL with path";
