// src/github/fetch.rs
// =============================================================================
// This module lists a directory through the GitHub contents API.
//
// Strategy:
// - GET https://api.github.com/repos/{owner}/{repo}/contents/{path}
// - The response is a JSON array, one object per directory entry
// - Each entry tells us its type ("file", "dir", "symlink", ...), its name,
//   and a download_url pointing at raw.githubusercontent.com
//
// Only the first page is read; the examples directory is small enough that
// the API returns it in one response.
//
// Rust concepts:
// - async functions: For network I/O
// - serde: Decoding JSON straight into our own structs
// - Option<T>: download_url is null for directories
// =============================================================================

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;

// One entry of a GitHub contents API directory listing
//
// The API returns many more fields (sha, size, html_url, _links, ...);
// serde ignores the ones we don't declare.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContentEntry {
    /// "file", "dir", "symlink" or "submodule"
    #[serde(rename = "type")]
    pub kind: String,
    /// File name without any directory part
    pub name: String,
    /// Raw download URL, null for directories
    pub download_url: Option<String>,
}

impl ContentEntry {
    /// Only plain files are downloaded
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

// Fetches and decodes a directory listing
//
// Parameters:
//   client: shared reqwest HTTP client (carries the User-Agent header)
//   api_url: contents API URL of the directory
//
// Returns: every entry in the listing, in the order GitHub returned them
//
// Connection failures, non-2xx statuses and a body that isn't a JSON array
// of entries are all reported as FetchError::Listing.
pub async fn fetch_listing(client: &Client, api_url: &str) -> Result<Vec<ContentEntry>, FetchError> {
    debug!(url = api_url, "requesting directory listing");

    let listing_error = |source| FetchError::Listing {
        url: api_url.to_string(),
        source,
    };

    let response = client
        .get(api_url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(listing_error)?;

    let entries: Vec<ContentEntry> = response.json().await.map_err(listing_error)?;

    debug!(count = entries.len(), "directory listing received");
    Ok(entries)
}

// Picks out the file entries from a listing
//
// Returns (name, download_url) pairs, keeping the listing order.
// Every "file" entry is returned, even one whose download_url is null;
// the caller decides what a missing URL means.
pub fn file_entries(entries: &[ContentEntry]) -> Vec<(&str, Option<&str>)> {
    entries
        .iter()
        .filter(|entry| entry.is_file())
        .map(|entry| (entry.name.as_str(), entry.download_url.as_deref()))
        .collect()
}
