//! Customer identity middleware.
//!
//! The fronting authentication layer identifies the signed-in customer with
//! trusted request headers.

use salvo::prelude::*;
use storefront::orders::{Customer, CustomerUuid};

use crate::extensions::*;

pub(crate) const CUSTOMER_UUID_HEADER: &str = "x-customer-uuid";
pub(crate) const CUSTOMER_NAME_HEADER: &str = "x-customer-name";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(customer) = extract_customer(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid customer headers"));
        ctrl.skip_rest();

        return;
    };

    depot.insert_customer(customer);

    ctrl.call_next(req, depot, res).await;
}

fn extract_customer(req: &Request) -> Option<Customer> {
    let uuid = req
        .headers()
        .get(CUSTOMER_UUID_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<CustomerUuid>()
        .ok()?;

    let name = req
        .headers()
        .get(CUSTOMER_NAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Customer")
        .to_string();

    Some(Customer { uuid, name })
}
