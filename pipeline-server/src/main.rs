//! Pipeline server binary.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipeline_server::{serve, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "pipeline server failed");
            ExitCode::FAILURE
        }
    }
}
