//! Entry point: parse CLI, set up logging and run the summary.

use clap::Parser;
use espn_fba_summary::{cli::ESPN, commands::summary::handle_summary, ProcessEnv, Result};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app = ESPN::parse();

    // Logs go to stderr so stdout only carries the table.
    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    handle_summary(&app.league_config(), &ProcessEnv).await
}
