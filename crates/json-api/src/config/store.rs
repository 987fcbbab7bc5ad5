//! Store Config

use clap::Args;
use storefront::currency::StoreCurrency;

/// Store-wide settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Currency orders are placed in (idr, inr, usd)
    #[arg(long, env = "STORE_CURRENCY", default_value = "idr")]
    pub store_currency: StoreCurrency,
}
