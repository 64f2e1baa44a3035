use chrono::{DateTime, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};

/// Product condition
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Condition {
    /// Brand new, unused item
    #[default]
    New,
    /// Previously owned item
    Used,
    /// Restored to working order by the seller or manufacturer
    Refurbished,
}

/// Product entity
///
/// A `Product` is only obtainable through [`Product::new`] or a repository,
/// so a value in hand always satisfies the field constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Price in the listed currency
    pub price: f64,
    /// ISO currency code (e.g. "USD")
    pub currency: String,
    /// Condition of the item
    pub condition: Condition,
    /// Units available
    pub stock: i32,
    /// Identifier of the seller
    pub seller_id: String,
    /// Display name of the seller
    pub seller_name: String,
    /// Category path (e.g. "Electronics > Smartphones")
    pub category: String,
    /// Thumbnail URL shown in listings
    pub thumbnail: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for constructing a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub currency: String,
    #[serde(default)]
    pub condition: Condition,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[validate(length(min = 1))]
    pub seller_id: String,
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl Product {
    /// Construct a validated product from its input.
    ///
    /// Fails fast with [`CatalogError::InvalidInput`] when any field violates
    /// its constraint; no partial value is produced.
    pub fn new(input: NewProduct) -> CatalogResult<Self> {
        input
            .validate()
            .map_err(|e| CatalogError::InvalidInput(e.to_string()))?;

        let now = Utc::now();
        Ok(Self {
            id: generate_product_id(),
            title: input.title,
            description: input.description,
            price: input.price,
            currency: input.currency,
            condition: input.condition,
            stock: input.stock,
            seller_id: input.seller_id,
            seller_name: input.seller_name,
            category: input.category,
            thumbnail: input.thumbnail,
            created_at: now,
            updated_at: now,
        })
    }
}

fn generate_product_id() -> String {
    let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let random = rand::rng().random_range(0..1_000_000);
    format!("PROD-{}-{:06}", timestamp, random)
}

/// Product image entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductImage {
    /// Image identifier
    pub id: i32,
    /// Identifier of the owning product
    pub product_id: String,
    /// Image URL
    pub image_url: String,
    /// Ascending sort order for gallery rendering
    pub display_order: i32,
}

/// Input for constructing a new product image
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewProductImage {
    #[validate(length(min = 1))]
    pub product_id: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub display_order: i32,
}

impl ProductImage {
    /// Construct a validated product image.
    ///
    /// The image carries no identifier yet; storage assigns one on insert.
    pub fn new(input: NewProductImage) -> CatalogResult<Self> {
        input
            .validate()
            .map_err(|e| CatalogError::InvalidInput(e.to_string()))?;

        Ok(Self {
            id: 0,
            product_id: input.product_id,
            image_url: input.image_url,
            display_order: input.display_order,
        })
    }
}

/// List projection of a product.
///
/// Carries only list-appropriate fields; description and the image gallery
/// are omitted to keep list payloads light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub condition: Condition,
    pub stock: i32,
    pub category: String,
    pub thumbnail: String,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            currency: product.currency,
            condition: product.condition,
            stock: product.stock,
            category: product.category,
            thumbnail: product.thumbnail,
        }
    }
}

/// Wire projection of a product image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductImageDto {
    pub id: i32,
    pub product_id: String,
    pub image_url: String,
    pub display_order: i32,
}

impl From<ProductImage> for ProductImageDto {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.id,
            product_id: image.product_id,
            image_url: image.image_url,
            display_order: image.display_order,
        }
    }
}

/// Full projection of a product, including its ordered image gallery.
///
/// Constructed fresh per request; never persisted, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub condition: Condition,
    pub stock: i32,
    pub seller_id: String,
    pub seller_name: String,
    pub category: String,
    pub thumbnail: String,
    /// Gallery images, ascending by display order (empty when none)
    pub images: Vec<ProductImageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductDetail {
    /// Assemble the full projection from a product and its images.
    ///
    /// The image order is taken as given; repositories return images already
    /// sorted ascending by display order.
    pub fn from_parts(product: Product, images: Vec<ProductImage>) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            currency: product.currency,
            condition: product.condition,
            stock: product.stock,
            seller_id: product.seller_id,
            seller_name: product.seller_name,
            category: product.category,
            thumbnail: product.thumbnail,
            images: images.into_iter().map(Into::into).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewProduct {
        NewProduct {
            title: "iPhone 15 Pro Max 256GB".to_string(),
            description: "Latest Apple flagship smartphone".to_string(),
            price: 1299.99,
            currency: "USD".to_string(),
            condition: Condition::New,
            stock: 45,
            seller_id: "SELLER001".to_string(),
            seller_name: "TechWorld Store".to_string(),
            category: "Electronics > Smartphones".to_string(),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
        }
    }

    #[test]
    fn test_new_product_satisfies_all_constraints() {
        let product = Product::new(valid_input()).unwrap();

        assert!(product.id.starts_with("PROD-"));
        assert!(!product.title.is_empty());
        assert!(product.price >= 0.0);
        assert!(!product.currency.is_empty());
        assert!(product.stock >= 0);
        assert!(!product.seller_id.is_empty());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_new_product_rejects_empty_title() {
        let input = NewProduct {
            title: String::new(),
            ..valid_input()
        };
        let err = Product::new(input).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[test]
    fn test_new_product_rejects_negative_price() {
        let input = NewProduct {
            price: -0.01,
            ..valid_input()
        };
        assert!(Product::new(input).is_err());
    }

    #[test]
    fn test_new_product_rejects_empty_currency() {
        let input = NewProduct {
            currency: String::new(),
            ..valid_input()
        };
        assert!(Product::new(input).is_err());
    }

    #[test]
    fn test_new_product_rejects_negative_stock() {
        let input = NewProduct {
            stock: -1,
            ..valid_input()
        };
        assert!(Product::new(input).is_err());
    }

    #[test]
    fn test_new_product_rejects_empty_seller_id() {
        let input = NewProduct {
            seller_id: String::new(),
            ..valid_input()
        };
        assert!(Product::new(input).is_err());
    }

    #[test]
    fn test_condition_only_accepts_known_values() {
        assert_eq!("new".parse::<Condition>().unwrap(), Condition::New);
        assert_eq!("used".parse::<Condition>().unwrap(), Condition::Used);
        assert_eq!(
            "refurbished".parse::<Condition>().unwrap(),
            Condition::Refurbished
        );
        assert!("broken".parse::<Condition>().is_err());
    }

    #[test]
    fn test_product_ids_are_unique() {
        let a = Product::new(valid_input()).unwrap();
        let b = Product::new(valid_input()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_product_image_validates() {
        let image = ProductImage::new(NewProductImage {
            product_id: "PROD-1".to_string(),
            image_url: "https://example.com/1.jpg".to_string(),
            display_order: 0,
        })
        .unwrap();
        assert_eq!(image.display_order, 0);

        let missing_product = NewProductImage {
            product_id: String::new(),
            image_url: "https://example.com/1.jpg".to_string(),
            display_order: 0,
        };
        assert!(ProductImage::new(missing_product).is_err());

        let missing_url = NewProductImage {
            product_id: "PROD-1".to_string(),
            image_url: String::new(),
            display_order: 0,
        };
        assert!(ProductImage::new(missing_url).is_err());

        let negative_order = NewProductImage {
            product_id: "PROD-1".to_string(),
            image_url: "https://example.com/1.jpg".to_string(),
            display_order: -1,
        };
        assert!(ProductImage::new(negative_order).is_err());
    }

    #[test]
    fn test_summary_projection_preserves_fields() {
        let product = Product::new(valid_input()).unwrap();
        let summary = ProductSummary::from(product.clone());

        assert_eq!(summary.id, product.id);
        assert_eq!(summary.title, product.title);
        assert_eq!(summary.price, product.price);
        assert_eq!(summary.currency, product.currency);
        assert_eq!(summary.condition, product.condition);
        assert_eq!(summary.stock, product.stock);
        assert_eq!(summary.category, product.category);
        assert_eq!(summary.thumbnail, product.thumbnail);
    }

    #[test]
    fn test_detail_projection_preserves_every_field_and_image_order() {
        let product = Product::new(valid_input()).unwrap();
        let images = vec![
            ProductImage {
                id: 1,
                product_id: product.id.clone(),
                image_url: "https://example.com/1.jpg".to_string(),
                display_order: 0,
            },
            ProductImage {
                id: 2,
                product_id: product.id.clone(),
                image_url: "https://example.com/2.jpg".to_string(),
                display_order: 1,
            },
        ];

        let detail = ProductDetail::from_parts(product.clone(), images.clone());

        assert_eq!(detail.id, product.id);
        assert_eq!(detail.title, product.title);
        assert_eq!(detail.description, product.description);
        assert_eq!(detail.price, product.price);
        assert_eq!(detail.currency, product.currency);
        assert_eq!(detail.condition, product.condition);
        assert_eq!(detail.stock, product.stock);
        assert_eq!(detail.seller_id, product.seller_id);
        assert_eq!(detail.seller_name, product.seller_name);
        assert_eq!(detail.category, product.category);
        assert_eq!(detail.thumbnail, product.thumbnail);
        assert_eq!(detail.created_at, product.created_at);
        assert_eq!(detail.updated_at, product.updated_at);

        assert_eq!(detail.images.len(), 2);
        for (dto, image) in detail.images.iter().zip(&images) {
            assert_eq!(dto.id, image.id);
            assert_eq!(dto.product_id, image.product_id);
            assert_eq!(dto.image_url, image.image_url);
            assert_eq!(dto.display_order, image.display_order);
        }
        assert!(detail.images[0].display_order <= detail.images[1].display_order);
    }

    #[test]
    fn test_detail_projection_with_no_images() {
        let product = Product::new(valid_input()).unwrap();
        let detail = ProductDetail::from_parts(product, vec![]);
        assert!(detail.images.is_empty());
    }
}
