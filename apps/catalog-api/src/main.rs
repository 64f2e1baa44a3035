//! Catalog API - read-only product catalog REST server

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to database");

    let db = sea_orm::Database::connect(&config.database.url).await?;

    info!("Database connection established");

    // Initialize the application state
    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(state.config.app));

    info!("Starting Catalog API on port {}", state.config.server.port);

    // Run server with graceful shutdown and connection cleanup
    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connection");
        if let Err(e) = state.db.close().await {
            tracing::warn!("Failed to close database connection cleanly: {}", e);
        }
    })
    .await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
