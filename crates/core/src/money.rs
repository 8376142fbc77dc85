//! Money rounding helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to cents, midpoints away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A percentage (0..100) of `base`, rounded to cents.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    round_cents(base * percent / Decimal::ONE_HUNDRED)
}
