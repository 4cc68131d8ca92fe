//! Error types for the seedex indexer
//!
//! The two network operations each get their own domain error so the
//! pipeline can report failures precisely; a unified [`Error`] covers the
//! fallible setup paths that run before any network activity.

use std::io;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport error (DNS, connection, protocol)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur while submitting a document to the index endpoint
#[derive(Error, Debug)]
pub enum IndexError {
    /// HTTP transport error (connection, protocol)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response status
    #[error("Index server returned status {0}")]
    Status(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,
}

impl FetchError {
    /// Split a transport failure into `Timeout` or `Http`
    ///
    /// The `#[from]` conversion maps every reqwest error to `Http`; request
    /// paths use this instead so elapsed deadlines keep their own variant.
    pub(crate) fn classify(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(e)
        }
    }
}

impl IndexError {
    /// Split a transport failure into `Timeout` or `Http`
    pub(crate) fn classify(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(e)
        }
    }
}

/// Unified error type for the seedex crate
///
/// Per-URL fetch and index failures never escape the pipeline; this type
/// shows up where setup itself fails: reading the seed list or building
/// the HTTP clients.
#[derive(Error, Debug)]
pub enum Error {
    /// Fetch-specific errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Index-specific errors
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
