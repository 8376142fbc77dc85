//! Cart state, mutation operations, and derived totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    config::PricingConfig,
    coupons::{ActiveCoupon, CouponTarget},
    lines::{CartLine, PurchaseMode, clamp_qty},
    money::round_cents,
};

/// The storefront cart: the current lines plus at most one active coupon.
///
/// All mutation goes through the operations below; totals are recomputed
/// from the current state on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub coupon: Option<ActiveCoupon>,
}

/// Totals derived from the cart lines and the active coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals, before any coupon.
    pub subtotal: Decimal,
    /// Coupon amount when the coupon targets the subtotal, zero otherwise.
    pub coupon_amount_on_subtotal: Decimal,
    /// Subtotal after a subtotal-target coupon, floored at zero.
    pub subtotal_after_coupon: Decimal,
}

impl Cart {
    /// An empty cart with no coupon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds a line, merging into an existing `(id, mode)` line when one
    /// exists. Quantities are clamped in either case.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.id == line.id && l.mode == line.mode)
        {
            existing.qty = clamp_qty(existing.qty.saturating_add(line.qty));
            return;
        }

        let mut line = line;
        line.qty = clamp_qty(line.qty);
        self.lines.push(line);
    }

    /// Sets the quantity of every line for `id`, clamped to the valid range.
    pub fn update_qty(&mut self, id: &str, qty: u32) {
        for line in self.lines.iter_mut().filter(|l| l.id == id) {
            line.qty = clamp_qty(qty);
        }
    }

    /// Switches the mode of every line for `id` in place.
    ///
    /// Quantities are never re-derived from pricing; if the toggle lands
    /// on an `(id, mode)` pair that already exists, the duplicates
    /// coalesce by summing clamped quantities.
    pub fn toggle_mode(&mut self, id: &str, mode: PurchaseMode) {
        for line in self.lines.iter_mut().filter(|l| l.id == id) {
            line.mode = mode;
        }

        self.coalesce();
    }

    /// Removes every line for `id`.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Empties all lines, leaving the coupon untouched.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Replaces the active coupon wholesale.
    pub fn apply_coupon(&mut self, coupon: ActiveCoupon) {
        self.coupon = Some(coupon);
    }

    /// Clears the active coupon.
    pub fn clear_coupon(&mut self) {
        self.coupon = None;
    }

    /// Recomputes the derived totals from the current lines and coupon.
    pub fn totals(&self, pricing: &PricingConfig) -> CartTotals {
        let subtotal = round_cents(
            self.lines
                .iter()
                .map(|l| l.total(pricing.bulk_discount_percent))
                .sum(),
        );

        let coupon_amount_on_subtotal = match &self.coupon {
            Some(c) if c.target == CouponTarget::Subtotal && c.discount_percent > Decimal::ZERO => {
                c.discount_on(subtotal)
            }
            _ => Decimal::ZERO,
        };

        let subtotal_after_coupon =
            round_cents(subtotal - coupon_amount_on_subtotal).max(Decimal::ZERO);

        CartTotals {
            subtotal,
            coupon_amount_on_subtotal,
            subtotal_after_coupon,
        }
    }

    /// Merges duplicate `(id, mode)` lines, summing clamped quantities.
    fn coalesce(&mut self) {
        let mut merged: Vec<CartLine> = Vec::with_capacity(self.lines.len());

        for line in self.lines.drain(..) {
            if let Some(existing) = merged
                .iter_mut()
                .find(|l| l.id == line.id && l.mode == line.mode)
            {
                existing.qty = clamp_qty(existing.qty.saturating_add(line.qty));
            } else {
                merged.push(line);
            }
        }

        self.lines = merged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("decimal literal")
    }

    fn line(id: &str, mode: PurchaseMode, qty: u32) -> CartLine {
        CartLine {
            id: id.into(),
            name: format!("{id} roast"),
            image: format!("{id}.png"),
            unit_price_individual: dec("12.50"),
            unit_price_bulk: dec("10.99"),
            qty,
            mode,
        }
    }

    fn coupon(percent: &str, target: CouponTarget) -> ActiveCoupon {
        ActiveCoupon {
            code: "brew".into(),
            description: "test coupon".into(),
            discount_percent: dec(percent),
            target,
        }
    }

    #[test]
    fn add_same_id_and_mode_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Individual, 2));
        cart.add(line("ethiopia", PurchaseMode::Individual, 3));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines.first().map(|l| l.qty), Some(5));
    }

    #[test]
    fn add_same_id_different_mode_keeps_two_lines() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Individual, 2));
        cart.add(line("ethiopia", PurchaseMode::Bulk, 2));

        assert_eq!(cart.lines.len(), 2);
    }

    #[test]
    fn add_merge_clamps_at_max() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Individual, 9000));
        cart.add(line("ethiopia", PurchaseMode::Individual, 9000));

        assert_eq!(cart.lines.first().map(|l| l.qty), Some(9999));
    }

    #[test]
    fn update_qty_clamps_to_range() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Individual, 2));

        cart.update_qty("ethiopia", 0);
        assert_eq!(cart.lines.first().map(|l| l.qty), Some(1));

        cart.update_qty("ethiopia", 123_456);
        assert_eq!(cart.lines.first().map(|l| l.qty), Some(9999));

        cart.update_qty("ethiopia", 7);
        assert_eq!(cart.lines.first().map(|l| l.qty), Some(7));
    }

    #[test]
    fn toggle_mode_keeps_quantity() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Individual, 4));

        cart.toggle_mode("ethiopia", PurchaseMode::Bulk);

        let toggled = cart.lines.first().expect("line present");
        assert_eq!(toggled.mode, PurchaseMode::Bulk);
        assert_eq!(toggled.qty, 4);
    }

    #[test]
    fn toggle_mode_coalesces_colliding_lines() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Individual, 2));
        cart.add(line("ethiopia", PurchaseMode::Bulk, 3));

        cart.toggle_mode("ethiopia", PurchaseMode::Bulk);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines.first().map(|l| l.qty), Some(5));
    }

    #[test]
    fn remove_drops_both_modes_of_a_product() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Individual, 1));
        cart.add(line("ethiopia", PurchaseMode::Bulk, 1));
        cart.add(line("kenya", PurchaseMode::Individual, 1));

        cart.remove("ethiopia");

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines.first().map(|l| l.id.as_str()), Some("kenya"));
    }

    #[test]
    fn totals_sum_rounded_line_totals() {
        let pricing = PricingConfig::default();
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Bulk, 2));
        cart.add(line("kenya", PurchaseMode::Individual, 1));

        // bulk: 2 x 10.99 minus 10% = 19.78; individual: 12.50
        let totals = cart.totals(&pricing);
        assert_eq!(totals.subtotal, dec("32.28"));
        assert_eq!(totals.coupon_amount_on_subtotal, Decimal::ZERO);
        assert_eq!(totals.subtotal_after_coupon, dec("32.28"));
    }

    #[test]
    fn subtotal_coupon_reduces_subtotal_only() {
        let pricing = PricingConfig::default();
        let mut cart = Cart::new();
        cart.add(line("kenya", PurchaseMode::Individual, 4)); // 50.00
        cart.apply_coupon(coupon("15", CouponTarget::Subtotal));

        let totals = cart.totals(&pricing);
        assert_eq!(totals.subtotal, dec("50.00"));
        assert_eq!(totals.coupon_amount_on_subtotal, dec("7.50"));
        assert_eq!(totals.subtotal_after_coupon, dec("42.50"));
    }

    #[test]
    fn shipping_coupon_leaves_subtotal_untouched() {
        let pricing = PricingConfig::default();
        let mut cart = Cart::new();
        cart.add(line("kenya", PurchaseMode::Individual, 4));
        cart.apply_coupon(coupon("50", CouponTarget::Shipping));

        let totals = cart.totals(&pricing);
        assert_eq!(totals.coupon_amount_on_subtotal, Decimal::ZERO);
        assert_eq!(totals.subtotal_after_coupon, totals.subtotal);
    }

    #[test]
    fn reapplying_a_coupon_replaces_it_wholesale() {
        let mut cart = Cart::new();
        cart.apply_coupon(coupon("15", CouponTarget::Subtotal));
        cart.apply_coupon(coupon("50", CouponTarget::Shipping));

        assert_eq!(
            cart.coupon.as_ref().map(|c| c.target),
            Some(CouponTarget::Shipping)
        );
    }

    #[test]
    fn oversized_coupon_floors_subtotal_at_zero() {
        let pricing = PricingConfig::default();
        let mut cart = Cart::new();
        cart.add(line("kenya", PurchaseMode::Individual, 1));
        cart.apply_coupon(coupon("100", CouponTarget::Subtotal));

        let totals = cart.totals(&pricing);
        assert_eq!(totals.subtotal_after_coupon, Decimal::ZERO);
    }

    #[test]
    fn cart_state_round_trips_through_json() {
        let mut cart = Cart::new();
        cart.add(line("ethiopia", PurchaseMode::Bulk, 2));
        cart.apply_coupon(coupon("15", CouponTarget::Subtotal));

        let value = serde_json::to_value(&cart).expect("serialise cart");
        let back: Cart = serde_json::from_value(value).expect("deserialise cart");

        assert_eq!(back, cart);
    }
}
