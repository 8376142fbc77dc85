//! Checkout quote derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::Cart,
    config::PricingConfig,
    coupons::CouponTarget,
    money::{percent_of, round_cents},
};

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Courier delivery; the delivery fee applies.
    Delivery,
    /// Store pickup; no delivery fee, shipping coupons are inert.
    Pickup,
}

/// Caller-selected checkout inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteInputs {
    pub delivery_mode: DeliveryMode,
    /// Fee of the chosen delivery option, before any coupon.
    pub delivery_fee: Decimal,
    /// Preset tip percentage of the subtotal after coupon; zero for none.
    pub tip_preset_percent: Decimal,
    /// Explicit tip amount; overrides the preset when present.
    pub tip_custom: Option<Decimal>,
    /// Redeem stored credits against this order.
    pub use_credits: bool,
}

/// The full price breakdown for an order, each step rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub subtotal: Decimal,
    pub coupon_amount_on_subtotal: Decimal,
    pub subtotal_after_coupon: Decimal,
    pub tip: Decimal,
    pub tax: Decimal,
    pub shipping_coupon_amount: Decimal,
    pub delivery_fee_after_coupon: Decimal,
    pub credits: Decimal,
    pub service_fee: Decimal,
    pub total_payable: Decimal,
}

/// Derives the checkout quote for a cart under the given inputs.
///
/// The chain follows the storefront's published order of operations:
/// tip and tax come off the subtotal after coupon, shipping coupons only
/// bite under delivery, credits are capped, and the total never goes
/// negative.
pub fn quote(cart: &Cart, pricing: &PricingConfig, inputs: &QuoteInputs) -> CheckoutQuote {
    let totals = cart.totals(pricing);

    let tip_from_preset = if inputs.tip_preset_percent > Decimal::ZERO {
        percent_of(totals.subtotal_after_coupon, inputs.tip_preset_percent)
    } else {
        Decimal::ZERO
    };

    let tip = match inputs.tip_custom {
        Some(custom) => round_cents(custom.max(Decimal::ZERO)),
        None => tip_from_preset,
    };

    let tax = round_cents(totals.subtotal_after_coupon * pricing.tax_rate);

    let shipping_coupon_amount = match &cart.coupon {
        Some(c)
            if c.target == CouponTarget::Shipping
                && c.discount_percent > Decimal::ZERO
                && inputs.delivery_mode == DeliveryMode::Delivery =>
        {
            c.discount_on(inputs.delivery_fee)
        }
        _ => Decimal::ZERO,
    };

    let delivery_fee_after_coupon = match inputs.delivery_mode {
        DeliveryMode::Delivery => {
            round_cents(inputs.delivery_fee - shipping_coupon_amount).max(Decimal::ZERO)
        }
        DeliveryMode::Pickup => Decimal::ZERO,
    };

    let credits = if inputs.use_credits {
        pricing.credits_cap.min(totals.subtotal_after_coupon)
    } else {
        Decimal::ZERO
    };

    let total_payable = round_cents(
        totals.subtotal_after_coupon + delivery_fee_after_coupon + tip + pricing.service_fee + tax
            - credits,
    )
    .max(Decimal::ZERO);

    CheckoutQuote {
        subtotal: totals.subtotal,
        coupon_amount_on_subtotal: totals.coupon_amount_on_subtotal,
        subtotal_after_coupon: totals.subtotal_after_coupon,
        tip,
        tax,
        shipping_coupon_amount,
        delivery_fee_after_coupon,
        credits,
        service_fee: pricing.service_fee,
        total_payable,
    }
}
