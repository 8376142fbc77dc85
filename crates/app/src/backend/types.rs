//! Wire types for the mock storefront backend.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use roastery::{
    checkout::DeliveryMode,
    coupons::{ActiveCoupon, CouponTarget},
};

/// Stock treated as available when a product carries no stock field.
pub const UNLIMITED_STOCK: i64 = 999_999;

/// Coupon document as served by `GET /coupons/{code}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPayload {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub target: Option<String>,
}

impl CouponPayload {
    /// Maps the wire document to the cart's coupon model.
    ///
    /// Anything other than an explicit `"shipping"` target counts as a
    /// subtotal coupon.
    pub fn into_coupon(self) -> ActiveCoupon {
        let target = match self.target.as_deref() {
            Some("shipping") => CouponTarget::Shipping,
            _ => CouponTarget::Subtotal,
        };

        ActiveCoupon {
            code: self.code,
            description: self.description,
            discount_percent: self.discount_percent,
            target,
        }
    }
}

/// One entry of `GET /deliveryOptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOption {
    pub id: String,
    pub label: String,
    pub fee: Decimal,
}

/// Product document used for stock checks.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductStock {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stock: Option<i64>,
}

/// One ordered line as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub qty: u32,
}

/// Pricing breakdown submitted with an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPricing {
    pub sub_total: Decimal,
    pub sub_total_after_coupon: Decimal,
    pub delivery_mode: DeliveryMode,
    /// Fee actually charged, after any shipping coupon.
    pub delivery_fee: Decimal,
    pub tip: Decimal,
    pub service_fee: Decimal,
    pub tax: Decimal,
    pub credits: Decimal,
    pub coupon: Option<ActiveCoupon>,
    pub total: Decimal,
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub pricing: OrderPricing,
    pub created_at: Timestamp,
}

/// Backend-assigned order identifier; the JSON server hands out numbers
/// by default but string ids round-trip too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{n}"),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

/// Order record echoed back by `POST /orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    #[serde(default)]
    pub id: Option<OrderId>,
    pub items: Vec<OrderItem>,
    pub pricing: OrderPricing,
    pub created_at: Timestamp,
}
