//! Store Currencies

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a currency code is not one the store trades in.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported currency: {0}")]
pub struct UnsupportedCurrency(pub String);

/// Currencies an order can be placed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreCurrency {
    /// Indonesian Rupiah
    #[default]
    Idr,

    /// Indian Rupee
    Inr,

    /// US Dollar
    Usd,
}

impl StoreCurrency {
    /// Lowercase code used for storage and the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idr => "idr",
            Self::Inr => "inr",
            Self::Usd => "usd",
        }
    }

    /// The ISO 4217 definition used for formatting.
    #[must_use]
    pub fn iso(self) -> &'static iso::Currency {
        match self {
            Self::Idr => iso::IDR,
            Self::Inr => iso::INR,
            Self::Usd => iso::USD,
        }
    }

    /// Format an amount with this currency's symbol and separators.
    #[must_use]
    pub fn format(self, amount: Decimal) -> String {
        format!("{}", Money::from_decimal(amount, self.iso()))
    }
}

impl Display for StoreCurrency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreCurrency {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idr" => Ok(Self::Idr),
            "inr" => Ok(Self::Inr),
            "usd" => Ok(Self::Usd),
            _ => Err(UnsupportedCurrency(s.to_string())),
        }
    }
}
