//! HTTP handlers for the Catalog API
//!
//! Handlers never write error responses themselves: they return
//! `CatalogResult` and the error's `IntoResponse` impl produces the one
//! consistent envelope for every failure.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::CatalogResult;
use crate::models::{Condition, ProductDetail, ProductImageDto, ProductSummary};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product),
    components(
        schemas(
            ProductSummary,
            ProductDetail,
            ProductImageDto,
            Condition,
            ProductListResponse,
            ProductResponse
        ),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Catalog", description = "Read-only product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Success envelope for the product list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<ProductSummary>,
}

/// Success envelope for a single product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: ProductDetail,
}

/// Create the catalog router with all HTTP endpoints
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    responses(
        (status = 200, description = "List of product summaries", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<ProductListResponse>> {
    let data = service.list_products().await?;
    Ok(Json(ProductListResponse { data }))
}

/// Get a product by ID, including its image gallery
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with ordered images", body = ProductResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductResponse>> {
    let data = service.get_product(&id).await?;
    Ok(Json(ProductResponse { data }))
}
