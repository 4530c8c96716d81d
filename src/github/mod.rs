// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub contents API.
//
// Currently implements:
// - Listing a directory of a public repository
// - Decoding each entry's type, name and raw download URL
//
// Raw file contents themselves are fetched by the fetcher module straight
// from raw.githubusercontent.com.
// =============================================================================

mod fetch;

// Re-export the listing types and functions from fetch.rs
pub use fetch::{fetch_listing, file_entries, ContentEntry};
