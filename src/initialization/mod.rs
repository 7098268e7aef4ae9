//! Application initialization and resource setup.
//!
//! This module provides functions to initialize:
//! - The HTTP client used by the content fetcher
//! - The process-wide logger (binary only; the library never installs one)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
