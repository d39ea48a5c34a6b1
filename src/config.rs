use crate::error::{CartError, Result};
use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Flat tax rate applied to the cart subtotal.
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.10);

/// Which count the cart badge shows.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCount {
    /// Number of distinct products.
    #[default]
    Distinct,
    /// Number of units across all products.
    Units,
}

/// Settings for the derived cart values.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CartConfig {
    pub tax_rate: Decimal,
    pub badge: BadgeCount,
}

impl CartConfig {
    pub fn new(tax_rate: Decimal, badge: BadgeCount) -> Result<Self> {
        if tax_rate < Decimal::ZERO {
            return Err(CartError::ValidationError(
                "Tax rate must not be negative".to_string(),
            ));
        }
        Ok(Self { tax_rate, badge })
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            badge: BadgeCount::default(),
        }
    }
}
