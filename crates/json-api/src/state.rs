//! State

use std::sync::Arc;

use storefront::currency::StoreCurrency;
use storefront_app::context::AppContext;

use crate::cart::CartCookie;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) cart_cookie: CartCookie,
    pub(crate) currency: StoreCurrency,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, cart_cookie: CartCookie, currency: StoreCurrency) -> Self {
        Self {
            app,
            cart_cookie,
            currency,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(
        app: AppContext,
        cart_cookie: CartCookie,
        currency: StoreCurrency,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, cart_cookie, currency))
    }
}
