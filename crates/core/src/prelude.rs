//! Convenient re-exports for storefront callers.

pub use crate::{
    cart::{Cart, CartTotals},
    checkout::{CheckoutQuote, DeliveryMode, QuoteInputs, quote},
    config::PricingConfig,
    coupons::{ActiveCoupon, CouponTarget},
    lines::{CartLine, MAX_QTY, MIN_QTY, PurchaseMode, clamp_qty},
    money::round_cents,
};
