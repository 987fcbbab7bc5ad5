//! Products

use std::{collections::HashMap, hash::BuildHasher};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<CatalogProduct>;

/// Current unit prices keyed by product.
pub type PriceTable = FxHashMap<ProductUuid, Decimal>;

/// The subset of a product a cart needs when a line is first created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProduct {
    /// Product identifier
    pub uuid: ProductUuid,

    /// Display name
    pub name: String,

    /// First product image, if the product has any
    pub image: Option<String>,

    /// Current unit price
    pub price: Decimal,
}

/// Resolves the current unit price of a product.
pub trait PriceLookup {
    /// Returns the current price, or `None` when the product is unknown.
    fn unit_price(&self, product: ProductUuid) -> Option<Decimal>;
}

impl<S: BuildHasher> PriceLookup for HashMap<ProductUuid, Decimal, S> {
    fn unit_price(&self, product: ProductUuid) -> Option<Decimal> {
        self.get(&product).copied()
    }
}

impl PriceLookup for [CatalogProduct] {
    fn unit_price(&self, product: ProductUuid) -> Option<Decimal> {
        self.iter()
            .find(|candidate| candidate.uuid == product)
            .map(|candidate| candidate.price)
    }
}

impl CatalogProduct {
    /// Build a price table from a list of products.
    pub fn price_table<'a>(products: impl IntoIterator<Item = &'a CatalogProduct>) -> PriceTable {
        products
            .into_iter()
            .map(|product| (product.uuid, product.price))
            .collect()
    }
}
