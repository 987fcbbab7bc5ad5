//! Server configuration module

use clap::Parser;

use crate::config::{
    cart::CartCookieConfig,
    db::DatabaseConfig,
    observability::ObservabilityConfig,
    server::ServerRuntimeConfig,
    store::StoreConfig,
};

pub(crate) mod cart;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod store;

pub(crate) use observability::{LogFormat, LoggingConfig};

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Cart cookie settings.
    #[command(flatten)]
    pub cart: CartCookieConfig,

    /// Store-wide settings.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use storefront::currency::StoreCurrency;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.cart.name, "cart_items");
        assert_eq!(config.cart.max_age_days, 30);
        assert!(!config.cart.secure, "cookie should not be secure by default");
        assert_eq!(config.store.store_currency, StoreCurrency::Idr);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert_eq!(config.database.database_max_connections, 10);
        assert_eq!(config.server.shutdown_grace().as_secs(), 10);
        assert_eq!(config.logging.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn unsupported_currency_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--store-currency",
            "gbp",
        ]);

        assert!(result.is_err(), "expected gbp to be rejected");
    }
}
