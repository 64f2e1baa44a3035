//! Catalog Domain
//!
//! Read-only product catalog: list products, fetch one product with its
//! image gallery.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Use cases: input validation, orchestration, mapping
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory implementations)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, transfer objects
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, CatalogService, PgCatalogRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = sea_orm::Database::connect("postgres://localhost/catalog").await?;
//!
//! let repository = PgCatalogRepository::new(db);
//! let service = CatalogService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::{ApiDoc, ProductListResponse, ProductResponse};
pub use models::{
    Condition, NewProduct, NewProductImage, Product, ProductDetail, ProductImage, ProductImageDto,
    ProductSummary,
};
pub use postgres::PgCatalogRepository;
pub use repository::{CatalogRepository, InMemoryCatalogRepository};
pub use service::CatalogService;
