use super::money::Money;
use super::state::CartState;
use crate::config::{BadgeCount, CartConfig};
use rust_decimal::Decimal;
use serde::Serialize;

/// Totals shown by the order summary and the cart badge.
///
/// Derived from a `CartState` on demand and never stored alongside it.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CartSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
    pub distinct_item_count: usize,
    pub total_unit_count: u64,
    /// The figure shown on the cart icon, picked by `BadgeCount`.
    pub badge_count: u64,
}

impl CartSummary {
    pub fn new(state: &CartState, config: &CartConfig) -> Self {
        let subtotal = state.total();
        let tax = subtotal.saturating_mul(config.tax_rate);
        let distinct_item_count = state.distinct_item_count();
        let total_unit_count = state.total_unit_count();
        let badge_count = match config.badge {
            BadgeCount::Distinct => distinct_item_count as u64,
            BadgeCount::Units => total_unit_count,
        };

        Self {
            subtotal,
            tax,
            grand_total: subtotal.saturating_mul(Decimal::ONE.saturating_add(config.tax_rate)),
            distinct_item_count,
            total_unit_count,
            badge_count,
        }
    }
}

impl From<&CartState> for CartSummary {
    fn from(state: &CartState) -> Self {
        Self::new(state, &CartConfig::default())
    }
}
