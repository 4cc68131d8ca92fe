//! Index submission client
//!
//! Submits one document per call to the indexing service's add endpoint.
//! The endpoint accepts a batch, so the body is a single-element
//! `documents` list.

use crate::error::IndexError;
use crate::models::Document;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Path of the add endpoint, relative to the service base URL
pub const INDEX_ENDPOINT: &str = "/api/index/add";

/// Client for the indexing service
///
/// The HTTP client is built once with the configured timeout and reused
/// across submissions.
pub struct IndexClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct AddDocumentsRequest<'a> {
    documents: &'a [Document],
}

impl IndexClient {
    /// Create a client for the service at `base_url`
    ///
    /// A trailing slash on the base URL is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Http` if the HTTP client cannot be created
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, IndexError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit one document to the add endpoint
    ///
    /// # Errors
    ///
    /// `IndexError::Timeout` when the deadline elapses, `IndexError::Status`
    /// for non-2xx responses, `IndexError::Http` for transport failures
    pub async fn add_document(&self, document: &Document) -> Result<(), IndexError> {
        let request = AddDocumentsRequest {
            documents: std::slice::from_ref(document),
        };

        let response = self
            .client
            .post(format!("{}{INDEX_ENDPOINT}", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(IndexError::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::Status(status.as_u16()));
        }

        Ok(())
    }
}
