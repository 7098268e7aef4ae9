//! Content fetcher.
//!
//! Retrieves the raw HTML of one page with a single GET. The fetcher never
//! returns an error: every failure is logged and collapsed into `None`, and the
//! audit layer turns that into the fetch-failure report.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::Url;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::initialization::init_client;

/// A successfully fetched document.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Response body decoded as text
    pub body: String,
    /// URL after the transport followed any redirects
    pub final_url: Url,
    /// HTTP status code (always a success code)
    pub status: u16,
}

/// Issues the one outbound request an audit performs.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    client: Arc<reqwest::Client>,
}

impl ContentFetcher {
    /// Builds a fetcher with its own HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
        })
    }

    /// Wraps an existing client (sharing its connection pool).
    pub fn with_client(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns its body, or `None` on any failure.
    ///
    /// Failures are: transport errors (including the client timeout), a non-2xx
    /// status, an unreadable body, and an empty body. No retries are attempted.
    pub async fn fetch(&self, url: &Url) -> Option<FetchedPage> {
        debug!("Fetching {url}");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    warn!("Error fetching URL content for {url}: request timed out");
                } else {
                    warn!("Error fetching URL content for {url}: {e}");
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Error fetching URL content for {url}: HTTP error! status: {status}");
            return None;
        }

        let final_url = response.url().clone();
        if final_url != *url {
            debug!("Final url after redirects: {final_url}");
        }

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read response body for {url}: {e}");
                return None;
            }
        };

        if body.is_empty() {
            warn!("Empty response body for {url}");
            return None;
        }

        debug!("Body length for {final_url}: {} bytes", body.len());

        Some(FetchedPage {
            body,
            final_url,
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
