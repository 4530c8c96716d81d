// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The fetcher has exactly one option: --dry-run. Everything else (which
// repository, which API version, where to write) is baked into config.rs.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code.
// There are no subcommands, so the flags live directly on Cli.
#[derive(Parser, Debug)]
#[command(
    name = "spec-fetcher",
    version,
    about = "Download the AKS API spec and its example files from GitHub",
    long_about = "spec-fetcher downloads managedClusters.json and every file in its examples/ \
                  directory from the Azure REST API specs repository into azure_spec/."
)]
pub struct Cli {
    /// Print what would be downloaded without actually downloading files
    ///
    /// Directories are not created and nothing is written to disk.
    /// The example listing is still requested so the file names can be shown.
    #[arg(long)]
    pub dry_run: bool,
}
