// src/fetcher/download.rs
// =============================================================================
// The two filesystem-touching helpers: directory creation and downloading a
// single URL to a file.
//
// Both respect dry-run mode by doing nothing at all. The caller still prints
// its progress lines, so a dry run looks the same as a real one on stdout.
// =============================================================================

use reqwest::Client;
use std::path::Path;
use tracing::{debug, info};

use crate::error::FetchError;

// Creates a directory (and its parents) unless running dry
//
// An already existing directory is not an error.
pub async fn ensure_dir(path: &Path, dry_run: bool) -> Result<(), FetchError> {
    if dry_run {
        debug!(path = %path.display(), "dry run, not creating directory");
        return Ok(());
    }

    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| FetchError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

// Downloads `url` and writes the raw body to `dest`
//
// Parameters:
//   client: shared reqwest HTTP client
//   url: the file to fetch
//   dest: destination path; an existing file is overwritten
//   dry_run: when true, returns immediately without any request
//
// A non-2xx status counts as a failure, same as a connection error.
// Nothing is cleaned up if the write fails halfway.
pub async fn download_file(
    client: &Client,
    url: &str,
    dest: &Path,
    dry_run: bool,
) -> Result<(), FetchError> {
    if dry_run {
        debug!(url, dest = %dest.display(), "dry run, skipping download");
        return Ok(());
    }

    let download_error = |source| FetchError::Download {
        url: url.to_string(),
        source,
    };

    debug!(url, "downloading");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(download_error)?;

    let body = response.bytes().await.map_err(download_error)?;

    tokio::fs::write(dest, &body)
        .await
        .map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })?;

    info!(url, dest = %dest.display(), bytes = body.len(), "downloaded");
    Ok(())
}
