use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductImage};

/// Repository trait for catalog reads
///
/// This trait defines the storage access interface for the catalog.
/// Implementations can use different backends (Postgres, in-memory, etc.).
/// All operations are plain reads; there is no caching and no retrying, so a
/// storage fault surfaces immediately as [`CatalogError::Database`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List all products, newest first (reverse chronological by creation
    /// time). Returns an empty vec when storage has none.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// Get a product by ID.
    ///
    /// Fails with [`CatalogError::ProductNotFound`] when no row matches and
    /// with [`CatalogError::Database`] on any other storage fault.
    async fn get_product(&self, id: &str) -> CatalogResult<Product>;

    /// Find a product's images, ascending by display order.
    ///
    /// A product without images yields an empty vec, not an error.
    async fn find_images_by_product_id(&self, product_id: &str)
        -> CatalogResult<Vec<ProductImage>>;
}

/// In-memory implementation of CatalogRepository (for tests/development)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogRepository {
    products: Arc<RwLock<Vec<Product>>>,
    images: Arc<RwLock<Vec<ProductImage>>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product into the store.
    pub async fn insert_product(&self, product: Product) {
        self.products.write().await.push(product);
    }

    /// Seed an image into the store.
    pub async fn insert_image(&self, image: ProductImage) {
        self.images.write().await.push(image);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.clone();
        // Newest first, matching the Postgres implementation
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound)
    }

    async fn find_images_by_product_id(
        &self,
        product_id: &str,
    ) -> CatalogResult<Vec<ProductImage>> {
        let images = self.images.read().await;

        let mut result: Vec<ProductImage> = images
            .iter()
            .filter(|i| i.product_id == product_id)
            .cloned()
            .collect();
        result.sort_by_key(|i| i.display_order);

        Ok(result)
    }
}
