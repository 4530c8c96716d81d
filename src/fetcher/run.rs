// src/fetcher/run.rs
// =============================================================================
// The whole fetch, start to finish.
//
// How it works:
// 1. Print where we're writing and whether this is a dry run
// 2. Create azure_spec/ and azure_spec/examples/ (skipped in dry runs)
// 3. Download managedClusters.json
// 4. Ask the GitHub contents API what's in examples/
// 5. Download every "file" entry into examples/, one after another
// 6. Print a summary
//
// Failure handling:
// - Listing fails  -> error printed, Ok(FetchOutcome::ListingFailed), exit 1
// - A download fails -> Err(FetchError) bubbles up to main, which exits 1.
//   Later entries are never requested and earlier files stay on disk.
//   A "file" entry with no download_url fails the same way (dry runs just
//   count it).
// =============================================================================

use reqwest::{Client, ClientBuilder};
use std::path::Path;
use tracing::{debug, warn};

use super::download::{download_file, ensure_dir};
use crate::config::{FetchConfig, SPEC_FILE_NAME};
use crate::error::FetchError;
use crate::github;

// What a completed run did (or, in dry-run mode, would have done)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// Names of the example files, in download order
    pub example_files: Vec<String>,
    pub dry_run: bool,
}

impl FetchSummary {
    /// Example files plus the main spec file
    pub fn total_files(&self) -> usize {
        self.example_files.len() + 1
    }
}

// How a run ended, short of a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Everything was downloaded (or skipped, in dry-run mode)
    Completed(FetchSummary),
    /// The examples listing could not be fetched; no examples were downloaded
    ListingFailed,
}

impl FetchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchOutcome::Completed(_) => 0,
            FetchOutcome::ListingFailed => 1,
        }
    }
}

// Client settings shared by every request. No timeout is set; reqwest's
// defaults apply.
pub fn client_builder(config: &FetchConfig) -> ClientBuilder {
    Client::builder().user_agent(config.user_agent.as_str())
}

// Runs a complete fetch with a freshly built HTTP client
pub async fn fetch_specs(config: &FetchConfig) -> Result<FetchOutcome, FetchError> {
    let client = client_builder(config).build().map_err(FetchError::Client)?;
    fetch_specs_with(&client, config).await
}

// Runs a complete fetch using the given client
//
// Every step is awaited before the next one starts; there is no concurrency.
pub async fn fetch_specs_with(
    client: &Client,
    config: &FetchConfig,
) -> Result<FetchOutcome, FetchError> {
    println!("📁 Target directory: {}", config.target_dir.display());
    if config.dry_run {
        println!("🧪 Dry run mode: files will not be downloaded");
    }

    let examples_dir = config.examples_dir();
    ensure_dir(&config.target_dir, config.dry_run).await?;
    ensure_dir(&examples_dir, config.dry_run).await?;

    println!("🌐 Downloading AKS API specs from GitHub...");

    println!("📄 Downloading {}...", SPEC_FILE_NAME);
    download_file(client, &config.spec_url, &config.spec_file_path(), config.dry_run).await?;

    println!("🔍 Getting list of example files...");
    let entries = match github::fetch_listing(client, &config.examples_api_url).await {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            debug!(url = e.url(), "listing request failed");
            return Ok(FetchOutcome::ListingFailed);
        }
    };

    println!("📥 Downloading example files...");
    let files = github::file_entries(&entries);

    let mut example_files = Vec::with_capacity(files.len());
    for (name, url) in files {
        example_files.push(name.to_string());
        println!("  - {}", name);

        let dest = examples_dir.join(name);
        match url {
            Some(url) => download_file(client, url, &dest, config.dry_run).await?,
            // Counted either way; only a real run needs the URL
            None if config.dry_run => warn!(name, "file entry has no download_url"),
            None => {
                return Err(FetchError::MissingDownloadUrl {
                    name: name.to_string(),
                })
            }
        }
    }

    let summary = FetchSummary {
        example_files,
        dry_run: config.dry_run,
    };
    print_summary(&summary, &config.target_dir);

    Ok(FetchOutcome::Completed(summary))
}

// Prints the closing line, e.g.
//   ✅ Download completed. 42 files would be downloaded to /repo/azure_spec/
fn print_summary(summary: &FetchSummary, target_dir: &Path) {
    let dry_run_message = if summary.dry_run {
        " (dry run - no files were actually downloaded)"
    } else {
        ""
    };

    println!(
        "✅ Download completed{}. {} files would be downloaded to {}/",
        dry_run_message,
        summary.total_files(),
        target_dir.display()
    );
}
