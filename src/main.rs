// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up diagnostic logging (silent unless RUST_LOG says otherwise)
// 2. Parse command-line arguments using clap
// 3. Build the fetch configuration from the baked-in constants
// 4. Download the spec and its examples
// 5. Exit with proper code (0 = success, 1 = listing or download failed)
//
// Rust concepts used:
// - async/await: reqwest and tokio::fs are async, driven one step at a time
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - source URLs and target directory
mod error;    // src/error.rs - FetchError
mod fetcher;  // src/fetcher/ - directory setup and downloads
mod github;   // src/github/ - GitHub contents API listing
mod logging;  // src/logging.rs - tracing subscriber

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::FetchConfig;

use anyhow::Result;

// A current-thread runtime: every request finishes before the next starts,
// so there's no need for worker threads.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let code = exit_code(run().await);
    std::process::exit(code);
}

// Maps the result of run() to the process exit status
//
// A failed download (or write) ends the whole run with status 1,
// after printing the error to stderr.
fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

// This is the main application logic
// Returns:
//   Ok(0) = everything downloaded (or would have been, in a dry run)
//   Ok(1) = the examples listing could not be fetched
//   Err   = a file failed to download or could not be written
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = FetchConfig::new(cli.dry_run);

    let args: Vec<String> = std::env::args().collect();
    for line in startup_lines(&args, &config) {
        println!("{}", line);
    }
    tracing::debug!(?config, "starting fetch");

    let outcome = fetcher::fetch_specs(&config).await?;
    Ok(outcome.exit_code())
}

// The lines printed before any work starts
//
// The target directory shows up here and again when the fetch begins.
fn startup_lines(args: &[String], config: &FetchConfig) -> Vec<String> {
    vec![
        format!("Script arguments: {:?}", args),
        format!("Project root: {}", config::project_root().display()),
        format!("Target directory: {}", config.target_dir.display()),
    ]
}
