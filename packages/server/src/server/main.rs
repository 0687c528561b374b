// Main entry point for the selector API server

use anyhow::{Context, Result};
use extraction::DocumentFetcher;
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,extraction=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Selector API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(env = %config.env, debug = config.debug, "Configuration loaded");

    // Shared outbound HTTP client
    let fetcher = DocumentFetcher::new().context("Failed to create document fetcher")?;

    // Build application
    let addr = format!("0.0.0.0:{}", config.port);
    let site_url = config.site_url.clone();
    let app = build_app(config, fetcher);

    // Start server
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Example document: {}/examples/html", site_url);
    tracing::info!("Liveness probe: {}/wake", site_url);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
