//! Cart cookie codec.
//!
//! The cart is stored client-side as base64url-encoded JSON of its lines.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use salvo::{
    http::cookie::{Cookie, SameSite, time::Duration},
    prelude::{Request, Response},
};
use storefront::cart::{Cart, CartLine};
use thiserror::Error;
use tracing::warn;

use crate::config::cart::CartCookieConfig;

/// Errors raised while decoding a stored cart.
#[derive(Debug, Error)]
pub(crate) enum CartCookieError {
    #[error("cart cookie is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("cart cookie does not hold cart lines: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a cart as a cookie-safe string.
pub(crate) fn encode_cart(cart: &Cart) -> Result<String, serde_json::Error> {
    Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(cart)?))
}

/// Decode a cookie value back into a cart.
pub(crate) fn decode_cart(value: &str) -> Result<Cart, CartCookieError> {
    let bytes = URL_SAFE_NO_PAD.decode(value.trim())?;
    let lines: Vec<CartLine> = serde_json::from_slice(&bytes)?;

    Ok(Cart::from_lines(lines))
}

/// Reads and writes the cart cookie.
#[derive(Debug, Clone)]
pub(crate) struct CartCookie {
    name: String,
    max_age: Duration,
    secure: bool,
}

impl Default for CartCookie {
    fn default() -> Self {
        Self::new(&CartCookieConfig::default())
    }
}

impl CartCookie {
    pub(crate) fn new(config: &CartCookieConfig) -> Self {
        Self {
            name: config.name.clone(),
            max_age: Duration::days(i64::from(config.max_age_days)),
            secure: config.secure,
        }
    }

    /// The cart held by the request, empty when the cookie is missing or unreadable.
    pub(crate) fn load(&self, req: &Request) -> Cart {
        let Some(cookie) = req.cookie(&self.name) else {
            return Cart::new();
        };

        decode_cart(cookie.value()).unwrap_or_else(|error| {
            warn!(cookie = %self.name, "discarding unreadable cart cookie: {error}");

            Cart::new()
        })
    }

    /// Write `cart` to the response cookie, refreshing its expiry.
    pub(crate) fn store(&self, res: &mut Response, cart: &Cart) -> Result<(), serde_json::Error> {
        let value = encode_cart(cart)?;

        res.add_cookie(self.build(value, self.max_age));

        Ok(())
    }

    /// Expire the cart cookie.
    pub(crate) fn clear(&self, res: &mut Response) {
        res.add_cookie(self.build(String::new(), Duration::ZERO));
    }

    fn build(&self, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront::products::{CatalogProduct, ProductUuid};
    use testresult::TestResult;

    use super::*;

    fn cart() -> Result<Cart, storefront::cart::CartError> {
        let product = CatalogProduct {
            uuid: ProductUuid::new(),
            name: "Tote Bag".to_string(),
            image: Some("tote.png".to_string()),
            price: Decimal::from(45_000),
        };

        let mut cart = Cart::new();

        cart.add_item_with_quantity(product.uuid, 2, || Some(product))?;

        Ok(cart)
    }

    #[test]
    fn encoded_cart_decodes_to_same_lines() -> TestResult {
        let cart = cart()?;
        let encoded = encode_cart(&cart)?;

        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "encoded cart should be cookie-safe, got {encoded}"
        );
        assert_eq!(decode_cart(&encoded)?, cart);

        Ok(())
    }

    #[test]
    fn corrupt_values_are_rejected() {
        assert!(
            matches!(decode_cart("%%%"), Err(CartCookieError::Base64(_))),
            "expected base64 error"
        );

        let not_lines = URL_SAFE_NO_PAD.encode(b"{\"hello\":1}");

        assert!(
            matches!(decode_cart(&not_lines), Err(CartCookieError::Json(_))),
            "expected json error"
        );
    }

    #[test]
    fn stored_cookie_is_http_only_and_lax() -> TestResult {
        let cart_cookie = CartCookie::default();
        let mut res = Response::new();

        cart_cookie.store(&mut res, &cart()?)?;

        let cookie = res.cookie("cart_items");

        assert!(cookie.is_some(), "expected cart cookie to be set");

        if let Some(cookie) = cookie {
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.same_site(), Some(SameSite::Lax));
            assert_eq!(cookie.path(), Some("/"));
            assert_eq!(cookie.max_age(), Some(Duration::days(30)));
        }

        Ok(())
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cart_cookie = CartCookie::default();
        let mut res = Response::new();

        cart_cookie.clear(&mut res);

        let max_age = res.cookie("cart_items").and_then(Cookie::max_age);

        assert_eq!(max_age, Some(Duration::ZERO));
    }
}
