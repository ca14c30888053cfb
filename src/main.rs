use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use dme_core::{
    CatalogConfig, LookupService, DEFAULT_REST_ADDR, GRAPHDB_TIMEOUT_ENV, GRAPHDB_URL_ENV,
    REST_ADDR_ENV,
};

/// Main entry point for the DME catalog service
///
/// Resolves configuration once, then serves the REST API until the process is stopped.
///
/// # Environment Variables
/// - `GRAPHDB_URL`: SPARQL endpoint of the catalog repository (required)
/// - `GRAPHDB_TIMEOUT_SECS`: per-query store timeout in seconds (default: 30)
/// - `DME_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - `GRAPHDB_URL` is missing or invalid, or the timeout is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dme=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CatalogConfig::from_env_values(
        std::env::var(GRAPHDB_URL_ENV).ok(),
        std::env::var(GRAPHDB_TIMEOUT_ENV).ok(),
    )
    .inspect_err(|e| tracing::error!("Refusing to start: {}", e))?;

    let rest_addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    tracing::info!("++ Using SPARQL endpoint {}", cfg.graphdb_url());
    tracing::info!("++ Starting DME catalog REST on {}", rest_addr);

    let app = router(AppState::new(LookupService::from_config(&cfg)));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
