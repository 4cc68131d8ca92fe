//! Sequential fetch → extract → submit pipeline
//!
//! One URL is fully processed before the next begins. Outcomes are
//! independent: a URL that fails at either network stage is reported and
//! the run moves on.

use crate::error::Result;
use crate::extractor::TextExtractor;
use crate::fetcher::PageFetcher;
use crate::indexer::IndexClient;
use crate::models::Document;
use std::fmt;
use std::time::Duration;

/// Result of processing a single seed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// Fetched, extracted, and accepted by the index server
    Indexed { url: String },

    /// The GET failed; nothing was submitted for this URL
    FetchFailed { url: String, reason: String },

    /// The page was fetched but the index submission failed
    IndexFailed { url: String, reason: String },
}

impl UrlOutcome {
    /// Whether this URL ended up in the index
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed { .. })
    }

    /// The seed URL this outcome belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::Indexed { url }
            | Self::FetchFailed { url, .. }
            | Self::IndexFailed { url, .. } => url,
        }
    }
}

impl fmt::Display for UrlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed { url } => write!(f, "Indexed {url}"),
            Self::FetchFailed { url, reason } => write!(f, "Failed to fetch {url}: {reason}"),
            Self::IndexFailed { url, reason } => write!(f, "Indexing failed for {url}: {reason}"),
        }
    }
}

/// Aggregated outcomes for one run over the seed list
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Per-URL outcomes in seed order
    pub outcomes: Vec<UrlOutcome>,
}

impl RunSummary {
    /// Record the outcome for the next URL
    pub fn record(&mut self, outcome: UrlOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of seeds processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of URLs accepted by the index server
    pub fn indexed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_indexed()).count()
    }

    /// Number of URLs that failed at either stage
    pub fn failed_count(&self) -> usize {
        self.total() - self.indexed_count()
    }

    /// Success rate (0.0 - 1.0); an empty run counts as fully successful
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 1.0;
        }
        self.indexed_count() as f64 / self.total() as f64
    }
}

/// The fetch → extract → submit pipeline
///
/// All components are built once; no state is carried from one URL to the
/// next beyond the accumulating summary.
pub struct Pipeline {
    fetcher: PageFetcher,
    extractor: TextExtractor,
    indexer: IndexClient,
}

impl Pipeline {
    /// Build a pipeline targeting the index service at `server_url`
    ///
    /// The timeout applies to both the page fetch and the index submission.
    ///
    /// # Errors
    ///
    /// Fails only when an HTTP client cannot be created.
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(timeout)?,
            extractor: TextExtractor::new(),
            indexer: IndexClient::new(server_url, timeout)?,
        })
    }

    /// Process one seed URL to completion
    ///
    /// Every failure is captured in the returned outcome; this function
    /// never errors, so the caller's loop cannot be derailed.
    pub async fn process(&self, url: &str) -> UrlOutcome {
        let html = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Fetch failed");
                return UrlOutcome::FetchFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                };
            }
        };

        let page = self.extractor.extract(&html);
        let document = Document::from_page(url, page);

        match self.indexer.add_document(&document).await {
            Ok(()) => {
                tracing::debug!(url = %url, title = %document.title, "Document indexed");
                UrlOutcome::Indexed {
                    url: url.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Index submission failed");
                UrlOutcome::IndexFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Run the whole seed list in order, one URL at a time
    ///
    /// Prints one line per URL on standard output as outcomes arrive.
    pub async fn run(&self, seeds: &[String]) -> RunSummary {
        tracing::info!(seeds = seeds.len(), "Starting indexing run");

        let mut summary = RunSummary::default();

        for url in seeds {
            let outcome = self.process(url).await;
            println!("{outcome}");
            summary.record(outcome);
        }

        tracing::info!(
            total = summary.total(),
            indexed = summary.indexed_count(),
            failed = summary.failed_count(),
            "Indexing run complete"
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(url: &str) -> UrlOutcome {
        UrlOutcome::Indexed {
            url: url.to_string(),
        }
    }

    #[test]
    fn test_outcome_display_wordings() {
        assert_eq!(indexed("http://a.test").to_string(), "Indexed http://a.test");

        let fetch_failed = UrlOutcome::FetchFailed {
            url: "http://a.test".to_string(),
            reason: "Request timeout".to_string(),
        };
        assert_eq!(
            fetch_failed.to_string(),
            "Failed to fetch http://a.test: Request timeout"
        );

        let index_failed = UrlOutcome::IndexFailed {
            url: "http://a.test".to_string(),
            reason: "Index server returned status 500".to_string(),
        };
        assert_eq!(
            index_failed.to_string(),
            "Indexing failed for http://a.test: Index server returned status 500"
        );
    }

    #[test]
    fn test_outcome_url_accessor() {
        let outcome = UrlOutcome::FetchFailed {
            url: "http://a.test".to_string(),
            reason: "x".to_string(),
        };
        assert_eq!(outcome.url(), "http://a.test");
        assert!(!outcome.is_indexed());
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(indexed("http://a.test"));
        summary.record(UrlOutcome::FetchFailed {
            url: "http://b.test".to_string(),
            reason: "x".to_string(),
        });
        summary.record(indexed("http://c.test"));

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.indexed_count(), 2);
        assert_eq!(summary.failed_count(), 1);
    }

    #[test]
    fn test_success_rate() {
        let mut summary = RunSummary::default();
        summary.record(indexed("http://a.test"));
        summary.record(UrlOutcome::IndexFailed {
            url: "http://b.test".to_string(),
            reason: "x".to_string(),
        });
        assert!((summary.success_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_success_rate_empty_run() {
        let empty = RunSummary::default();
        assert_eq!(empty.success_rate(), 1.0);
    }
}
