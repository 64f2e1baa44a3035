//! Sea-ORM entities for the catalog tables

use crate::models::{Product, ProductImage};

pub mod product {
    use sea_orm::entity::prelude::*;

    /// Sea-ORM entity for the products table
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub title: String,
        #[sea_orm(column_type = "Text")]
        pub description: String,
        pub price: f64,
        pub currency: String,
        pub condition: String,
        pub stock: i32,
        pub seller_id: String,
        pub seller_name: String,
        pub category: String,
        #[sea_orm(column_type = "Text")]
        pub thumbnail: String,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod product_image {
    use sea_orm::entity::prelude::*;

    /// Sea-ORM entity for the product_images table
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "product_images")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub product_id: String,
        #[sea_orm(column_type = "Text")]
        pub image_url: String,
        pub display_order: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

// Conversion from Sea-ORM Model to domain Product
impl From<product::Model> for Product {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            price: model.price,
            currency: model.currency,
            // Unknown values in storage fall back to the default condition
            condition: model.condition.parse().unwrap_or_default(),
            stock: model.stock,
            seller_id: model.seller_id,
            seller_name: model.seller_name,
            category: model.category,
            thumbnail: model.thumbnail,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from Sea-ORM Model to domain ProductImage
impl From<product_image::Model> for ProductImage {
    fn from(model: product_image::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            image_url: model.image_url,
            display_order: model.display_order,
        }
    }
}
