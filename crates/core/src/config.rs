//! Pricing configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed pricing knobs for the storefront.
///
/// The defaults are the demo storefront's published rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Percentage taken off bulk-mode line totals.
    pub bulk_discount_percent: Decimal,
    /// Flat service fee added to every order.
    pub service_fee: Decimal,
    /// Tax rate applied to the subtotal after coupon.
    pub tax_rate: Decimal,
    /// Largest credit amount redeemable per order.
    pub credits_cap: Decimal,
    /// Delivery fee used when the backend offers no options.
    pub default_delivery_fee: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            bulk_discount_percent: Decimal::from(10),
            service_fee: Decimal::new(150, 2),
            tax_rate: Decimal::new(7, 2),
            credits_cap: Decimal::from(8),
            default_delivery_fee: Decimal::new(790, 2),
        }
    }
}
