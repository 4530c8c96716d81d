// src/error.rs
// =============================================================================
// Error types for a fetch run.
//
// Network errors, HTTP error statuses and malformed JSON all arrive as
// reqwest::Error; we only record *which step* failed and for which URL/path.
//
// How each kind is treated:
// - Listing: recovered by the fetcher, the run ends with exit code 1
// - Everything else: propagated up to main, which prints it and exits 1
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to get list of example files: {source}")]
    Listing {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to download {name}: listing entry has no download_url")]
    MissingDownloadUrl { name: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// The remote URL involved, when the failure was about one
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Listing { url, .. } | FetchError::Download { url, .. } => Some(url),
            _ => None,
        }
    }
}
