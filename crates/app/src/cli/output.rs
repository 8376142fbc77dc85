//! Rendering helpers shared by the CLI surfaces.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

use roastery::lines::PurchaseMode;

/// Formats an amount as US dollars, e.g. `$12.50`.
pub(crate) fn usd(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

pub(crate) fn mode_label(mode: PurchaseMode) -> &'static str {
    match mode {
        PurchaseMode::Individual => "individual",
        PurchaseMode::Bulk => "bulk",
    }
}
