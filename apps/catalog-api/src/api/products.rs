//! Catalog routes

use axum::Router;
use domain_catalog::{handlers, CatalogService, PgCatalogRepository};

use crate::state::AppState;

/// Create the products router backed by the Postgres repository
pub fn router(state: &AppState) -> Router {
    let repository = PgCatalogRepository::new(state.db.clone());
    let service = CatalogService::new(repository);
    handlers::router(service)
}
