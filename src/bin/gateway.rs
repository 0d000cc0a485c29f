//! Estante Presentation Gateway
//!
//! Serves the HTML list/form page and the JSON proxy API, both backed by
//! calls to the catalog service.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use estante_server::{
    config::AppConfig,
    gateway::{self, client::HttpCatalogClient, GatewayState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("estante_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Estante Presentation Gateway v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Catalog service expected at {}", config.gateway.catalog_url);

    // Create gateway state
    let state = GatewayState {
        catalog: Arc::new(HttpCatalogClient::new(config.gateway.catalog_url.clone())),
    };

    // Build router
    let app = gateway::create_router(state);

    // Start server
    let addr = SocketAddr::new(
        config.gateway.host.parse().expect("Invalid host address"),
        config.gateway.port,
    );

    tracing::info!("Gateway listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
