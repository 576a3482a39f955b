//! ballondor - Ballon d'Or shortlist scoring service
//!
//! Loads the past-winners and shortlist data files, scores every eligible
//! shortlisted player, and serves the prediction scoreboard over HTTP.

use anyhow::Result;
use ballondor::{build_router, config, data::Dataset, AppState};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting ballondor v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = config::Cli::parse();
    let config = config::resolve(&cli)?;
    info!("Data folder: {}", config.data_folder.display());

    let dataset = match Dataset::load(&config) {
        Ok(dataset) => {
            info!(
                "✓ Loaded dataset ({} winners, {} shortlisted)",
                dataset.winners.len(),
                dataset.shortlist.len()
            );
            dataset
        }
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };

    // Create application state and router
    let state = AppState::new(dataset);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("ballondor listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
