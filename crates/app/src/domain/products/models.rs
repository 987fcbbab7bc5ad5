//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use storefront::products::CatalogProduct;

pub use storefront::products::ProductUuid;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub images: Vec<String>,
    pub price: Decimal,
    pub is_active: bool,
    pub in_stock: bool,
    pub is_featured: bool,
    pub on_sale: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// The snapshot a cart line copies when the product is first added.
    #[must_use]
    pub fn to_catalog(&self) -> CatalogProduct {
        CatalogProduct {
            uuid: self.uuid,
            name: self.name.clone(),
            image: self.images.first().cloned(),
            price: self.price,
        }
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub images: Vec<String>,
    pub price: Decimal,
    pub is_active: bool,
    pub in_stock: bool,
    pub is_featured: bool,
    pub on_sale: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_snapshot_uses_first_image() {
        let product = Product {
            uuid: ProductUuid::new(),
            name: "Desk Lamp".to_string(),
            slug: "desk-lamp".to_string(),
            images: vec!["lamp-front.png".to_string(), "lamp-side.png".to_string()],
            price: Decimal::from(150_000),
            is_active: true,
            in_stock: true,
            is_featured: false,
            on_sale: false,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        let catalog = product.to_catalog();

        assert_eq!(catalog.uuid, product.uuid);
        assert_eq!(catalog.image.as_deref(), Some("lamp-front.png"));
        assert_eq!(catalog.price, Decimal::from(150_000));
    }
}
