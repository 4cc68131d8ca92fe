//! HTTP page fetching
//!
//! One GET per seed URL with a bounded timeout and the transport defaults:
//! no custom headers, no cookie jar, stock redirect policy. Gzip responses
//! are decompressed transparently.

use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Fetches raw page bodies over HTTP
///
/// The client is built once and reused across URLs; the configured timeout
/// covers the whole request, including body download.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with the given request timeout
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;

        Ok(Self { client })
    }

    /// Fetch one URL and return the response body as text
    ///
    /// Any status outside the 2xx range is a failure; the caller decides
    /// what to do with it (the pipeline reports and moves on).
    ///
    /// # Errors
    ///
    /// `FetchError::Timeout` when the deadline elapses, `FetchError::Status`
    /// for non-2xx responses, `FetchError::Http` for transport failures
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::classify)
    }
}
