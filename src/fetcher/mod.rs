// src/fetcher/mod.rs
// =============================================================================
// This module downloads the spec file and its examples.
//
// Submodules:
// - download: directory creation and single-file downloads (dry-run aware)
// - run: the full sequence, from directory setup to the summary line
// =============================================================================

mod download;
mod run;

#[cfg(test)]
mod test_server;

pub use run::fetch_specs;
