//! Batch-mode helpers for tube-dl
//!
//! Pure pieces of the batch driver: count parsing, URL-list ingestion from
//! a file, and separating downloadable URLs from lines to skip.

use std::path::Path;

use crate::core::error::{Error, Result};
use crate::core::url::normalize_url;

/// Parses the interactive "how many videos?" answer.
///
/// Anything that is not a positive integer aborts the batch, it is not
/// re-prompted (intentionally asymmetric with the single-video path).
pub fn parse_batch_count(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(Error::InvalidInput(format!(
            "expected an integer greater than 0, got '{trimmed}'"
        ))),
    }
}

/// Reads a newline-delimited URL list file.
///
/// Lines are kept raw; trimming and validation happen later, when the
/// batch loop visits each entry.
pub fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents.lines().map(|line| line.to_string()).collect())
}

/// Splits raw batch entries into normalized, accepted URLs and rejected
/// originals. Rejected entries are warned about and skipped by the caller;
/// they never abort the batch.
pub fn partition_urls(raw: &[String]) -> (Vec<String>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for entry in raw {
        match normalize_url(entry) {
            Ok(url) => accepted.push(url),
            Err(_) => rejected.push(entry.trim().to_string()),
        }
    }

    (accepted, rejected)
}
