//! Catalog service - use case layer
//!
//! One method per API operation: validate input, call the repository, map
//! entities to transfer objects. Storage errors are wrapped with context but
//! never swallowed, so classification still resolves through the chain.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{ProductDetail, ProductSummary};
use crate::repository::CatalogRepository;

/// Catalog service providing the read use cases.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products as lightweight summaries.
    ///
    /// Returns a possibly-empty vec; an empty catalog is not an error.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> CatalogResult<Vec<ProductSummary>> {
        let products = self
            .repository
            .list_products()
            .await
            .map_err(|err| err.wrap("failed to list products"))?;

        tracing::debug!(products_count = products.len(), "listed products");

        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Get one product with its ordered image gallery.
    ///
    /// A blank or whitespace-only id fails with
    /// [`CatalogError::InvalidProductId`] before the repository is touched.
    /// `ProductNotFound` propagates unchanged; any other storage failure is
    /// wrapped with context. A failing image lookup fails the whole request;
    /// a product legitimately without images comes back with an empty list.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> CatalogResult<ProductDetail> {
        if id.trim().is_empty() {
            return Err(CatalogError::InvalidProductId);
        }

        let product = match self.repository.get_product(id).await {
            Ok(product) => product,
            Err(CatalogError::ProductNotFound) => return Err(CatalogError::ProductNotFound),
            Err(err) => return Err(err.wrap("failed to get product")),
        };

        let images = self
            .repository
            .find_images_by_product_id(id)
            .await
            .map_err(|err| err.wrap("failed to load product images"))?;

        Ok(ProductDetail::from_parts(product, images))
    }
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
