//! seedex - One-shot batch web indexer
//!
//! Reads a list of seed URLs, fetches each page, extracts its title and
//! visible text, and submits the result to a search index over HTTP.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`seeds`] - Seed list loading
//! - [`fetcher`] - Page retrieval over HTTP
//! - [`extractor`] - HTML title and text extraction
//! - [`indexer`] - Index server client
//! - [`pipeline`] - Sequential fetch, extract, submit orchestration
//! - [`models`] - Core data structures and types
//!
//! # Example
//!
//! ```no_run
//! use seedex::config::Config;
//! use seedex::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let pipeline = Pipeline::new(&config.indexer.server_url, config.request_timeout())?;
//!     let seeds = vec!["https://example.com/".to_string()];
//!     let summary = pipeline.run(&seeds).await;
//!     println!("indexed {} of {}", summary.indexed_count(), summary.total());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod indexer;
pub mod models;
pub mod pipeline;
pub mod seeds;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, FetchError, IndexError, Result};
    pub use crate::extractor::TextExtractor;
    pub use crate::fetcher::PageFetcher;
    pub use crate::indexer::IndexClient;
    pub use crate::models::{Document, PageText};
    pub use crate::pipeline::{Pipeline, RunSummary, UrlOutcome};
}

// Direct re-exports for convenience
pub use models::{Document, PageText};
