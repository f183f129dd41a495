//! Depscope CLI binary.

use anyhow::Result;
use depscope::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the depscope CLI.
///
/// The analyzer is single-threaded and synchronous throughout, so the
/// binary is a plain `fn main` with no runtime.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=depscope=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depscope=info")),
        )
        .with_target(false)
        .init();

    tracing::debug!("Starting depscope CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Depscope CLI completed successfully");
    Ok(())
}
