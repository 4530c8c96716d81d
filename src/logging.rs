// src/logging.rs
// =============================================================================
// Diagnostic logging with `tracing`.
//
// The progress lines users see are plain println!/eprintln! output.
// This subscriber only adds extra detail (request URLs, byte counts,
// skipped dry-run work) when RUST_LOG asks for it, e.g.
//
//   RUST_LOG=spec_fetcher=debug spec-fetcher --dry-run
//
// Logs go to stderr so stdout stays the same with or without them.
// =============================================================================

use tracing_subscriber::EnvFilter;

// Default filter when RUST_LOG is unset or invalid
const DEFAULT_FILTER: &str = "warn";

// Installs the global tracing subscriber
//
// Called once, at the very start of main.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
