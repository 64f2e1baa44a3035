use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::{CatalogError, CatalogResult},
    models::{Product, ProductImage},
    repository::CatalogRepository,
};

/// Postgres-backed catalog repository.
///
/// Each call is a self-contained read against the connection pool, safe for
/// concurrent use by many request workers.
pub struct PgCatalogRepository {
    db: DatabaseConnection,
}

impl PgCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let models = entity::product::Entity::find()
            .order_by_desc(entity::product::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        entity::product::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(CatalogError::ProductNotFound)
    }

    async fn find_images_by_product_id(
        &self,
        product_id: &str,
    ) -> CatalogResult<Vec<ProductImage>> {
        let models = entity::product_image::Entity::find()
            .filter(entity::product_image::Column::ProductId.eq(product_id))
            .order_by_asc(entity::product_image::Column::DisplayOrder)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
