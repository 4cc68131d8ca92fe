//! Seed list loading
//!
//! The seed file is plain text with one URL per line. Lines are trimmed,
//! blank lines are skipped, and there is no comment syntax. Order and
//! duplicates are preserved: the pipeline processes the list exactly as
//! written.

use crate::error::Result;
use std::path::Path;
use url::Url;

/// Load the ordered seed list from a file
///
/// Seeds that do not parse as absolute URLs are kept (the fetch fails and
/// is reported per URL like any other) but logged so typos are visible.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be read.
pub fn load_seeds(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;

    let seeds: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    for seed in &seeds {
        if Url::parse(seed).is_err() {
            tracing::warn!(url = %seed, "Seed is not an absolute URL");
        }
    }

    tracing::debug!(path = %path.display(), count = seeds.len(), "Loaded seed list");

    Ok(seeds)
}
