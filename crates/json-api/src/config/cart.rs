//! Cart Cookie Config

use clap::Args;

/// Cart cookie settings.
#[derive(Debug, Clone, Args)]
pub struct CartCookieConfig {
    /// Name of the cookie holding the cart
    #[arg(
        long = "cart-cookie-name",
        env = "CART_COOKIE_NAME",
        default_value = "cart_items"
    )]
    pub name: String,

    /// Cookie lifetime in days, refreshed on every cart change
    #[arg(
        long = "cart-cookie-max-age-days",
        env = "CART_COOKIE_MAX_AGE_DAYS",
        default_value_t = 30_u32
    )]
    pub max_age_days: u32,

    /// Only send the cookie over HTTPS
    #[arg(
        long = "cart-cookie-secure",
        env = "CART_COOKIE_SECURE",
        default_value_t = false
    )]
    pub secure: bool,
}

impl Default for CartCookieConfig {
    fn default() -> Self {
        Self {
            name: "cart_items".to_string(),
            max_age_days: 30,
            secure: false,
        }
    }
}
