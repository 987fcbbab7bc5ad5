//! App Router

use salvo::Router;

use crate::{admin, cart, checkout, customers, orders, products};

/// Storefront routes. Shared state must be injected by the caller.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .delete(cart::clear::handler)
                .push(
                    Router::with_path("items")
                        .post(cart::items::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .delete(cart::items::delete::handler)
                                .push(
                                    Router::with_path("increment")
                                        .post(cart::items::increment::handler),
                                )
                                .push(
                                    Router::with_path("decrement")
                                        .post(cart::items::decrement::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::new()
                .hoop(customers::handler)
                .push(
                    Router::with_path("checkout")
                        .get(checkout::get::handler)
                        .post(checkout::create::handler),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .push(Router::with_path("{order}").get(orders::get::handler)),
                ),
        )
        .push(
            Router::with_path("admin/orders")
                .push(
                    Router::with_path("items/recompute")
                        .post(admin::orders::recompute::handler),
                )
                .push(
                    Router::with_path("{order}")
                        .push(Router::with_path("items").put(admin::orders::update_items::handler))
                        .push(Router::with_path("status").put(admin::orders::status::handler)),
                ),
        )
}
