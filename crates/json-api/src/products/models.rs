//! Product Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use storefront::currency::StoreCurrency;
use uuid::Uuid;

use storefront_app::domain::products::models::Product;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// URL slug
    pub slug: String,

    /// Image paths, the first is the primary image
    pub images: Vec<String>,

    /// Unit price as a decimal string
    pub price: String,

    /// Unit price formatted in the store currency
    pub formatted_price: String,

    pub in_stock: bool,
    pub is_featured: bool,
    pub on_sale: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl ProductResponse {
    pub(crate) fn new(product: Product, currency: StoreCurrency) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            formatted_price: currency.format(product.price),
            price: product.price.to_string(),
            name: product.name,
            slug: product.slug,
            images: product.images,
            in_stock: product.in_stock,
            is_featured: product.is_featured,
            on_sale: product.on_sale,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
