//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use storefront::orders::Customer;

const CUSTOMER_DEPOT_KEY: &str = "customer";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_customer(&mut self, customer: Customer);

    fn customer_or_401(&self) -> Result<&Customer, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_customer(&mut self, customer: Customer) {
        self.insert(CUSTOMER_DEPOT_KEY, customer);
    }

    fn customer_or_401(&self) -> Result<&Customer, StatusError> {
        self.get::<Customer>(CUSTOMER_DEPOT_KEY)
            .map_err(|_ignored| StatusError::unauthorized().brief("Customer not identified"))
    }
}
