//! Coupons.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::percent_of;

/// Which pricing dimension a coupon discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponTarget {
    /// Discounts the cart subtotal.
    Subtotal,
    /// Discounts the delivery fee.
    Shipping,
}

/// The single active coupon on a cart.
///
/// Re-application replaces the active coupon wholesale; an invalid code
/// clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCoupon {
    pub code: String,
    pub description: String,
    /// Percentage in `0..100`.
    pub discount_percent: Decimal,
    pub target: CouponTarget,
}

impl ActiveCoupon {
    /// The discount amount on `base`, rounded to cents.
    ///
    /// The caller is responsible for only applying this to the dimension
    /// the coupon targets.
    pub fn discount_on(&self, base: Decimal) -> Decimal {
        percent_of(base, self.discount_percent)
    }
}
