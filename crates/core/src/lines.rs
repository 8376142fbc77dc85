//! Cart lines and purchase modes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::round_cents;

/// Smallest quantity a line may carry.
pub const MIN_QTY: u32 = 1;

/// Largest quantity a line may carry.
pub const MAX_QTY: u32 = 9999;

/// Clamps a requested quantity into `[MIN_QTY, MAX_QTY]`.
pub fn clamp_qty(qty: u32) -> u32 {
    qty.clamp(MIN_QTY, MAX_QTY)
}

/// Individual vs bulk pricing tier for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseMode {
    /// Single-bag pricing.
    Individual,
    /// Bulk pricing, eligible for the bulk discount.
    Bulk,
}

/// One product+mode entry in the cart with its quantity.
///
/// Lines are unique by `(id, mode)`: the same product in the same mode
/// merges quantities, while a different mode creates a second line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub image: String,
    pub unit_price_individual: Decimal,
    pub unit_price_bulk: Decimal,
    pub qty: u32,
    pub mode: PurchaseMode,
}

impl CartLine {
    /// The unit price selected by the line's mode.
    pub fn unit_price(&self) -> Decimal {
        match self.mode {
            PurchaseMode::Individual => self.unit_price_individual,
            PurchaseMode::Bulk => self.unit_price_bulk,
        }
    }

    /// Line total: unit price times quantity, minus the bulk discount
    /// percentage when the line is in bulk mode, rounded to cents.
    pub fn total(&self, bulk_discount_percent: Decimal) -> Decimal {
        let raw = self.unit_price() * Decimal::from(self.qty);

        let discount = match self.mode {
            PurchaseMode::Bulk => raw * bulk_discount_percent / Decimal::ONE_HUNDRED,
            PurchaseMode::Individual => Decimal::ZERO,
        };

        round_cents(raw - discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("decimal literal")
    }

    fn bulk_line(qty: u32) -> CartLine {
        CartLine {
            id: "ethiopia".into(),
            name: "Ethiopia Roast".into(),
            image: "product1.png".into(),
            unit_price_individual: dec("12.50"),
            unit_price_bulk: dec("10.99"),
            qty,
            mode: PurchaseMode::Bulk,
        }
    }

    #[test]
    fn clamp_qty_bounds() {
        assert_eq!(clamp_qty(0), 1);
        assert_eq!(clamp_qty(1), 1);
        assert_eq!(clamp_qty(5000), 5000);
        assert_eq!(clamp_qty(10_000), 9999);
    }

    #[test]
    fn unit_price_follows_mode() {
        let mut line = bulk_line(1);
        assert_eq!(line.unit_price(), dec("10.99"));

        line.mode = PurchaseMode::Individual;
        assert_eq!(line.unit_price(), dec("12.50"));
    }

    #[test]
    fn bulk_line_total_applies_discount_then_rounds() {
        // 2 x 10.99 = 21.98, minus 10% (2.198) = 19.782 -> 19.78
        let line = bulk_line(2);
        assert_eq!(line.total(dec("10")), dec("19.78"));
    }

    #[test]
    fn individual_line_total_ignores_bulk_discount() {
        let mut line = bulk_line(2);
        line.mode = PurchaseMode::Individual;
        assert_eq!(line.total(dec("10")), dec("25.00"));
    }

    #[test]
    fn line_serialises_with_camel_case_keys() {
        let value = serde_json::to_value(bulk_line(3)).expect("serialise line");

        assert_eq!(value["unitPriceBulk"], serde_json::json!(10.99));
        assert_eq!(value["mode"], serde_json::json!("bulk"));
        assert_eq!(value["qty"], serde_json::json!(3));
    }
}
