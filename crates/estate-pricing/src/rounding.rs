//! Explicit decimal rounding shared by every calculator.
//!
//! Ties are resolved to the even neighbour and are decided on the exact binary
//! value held by the `f64`, so `2.675` (stored as `2.67499…`) rounds down while
//! `0.125` (stored exactly) rounds to `0.12`.

use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_PLACES: u32 = 2;
pub const RATIO_PLACES: u32 = 4;
pub const COEFFICIENT_PLACES: u32 = 6;

pub fn round_half_even(value: f64, places: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    let rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    // Both operands are exact in f64 for the precisions used here, so the
    // division yields the nearest double to the rounded decimal.
    rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32)
}

/// Two decimals: every monetary amount and area.
pub fn round_currency(value: f64) -> f64 {
    round_half_even(value, CURRENCY_PLACES)
}

/// Four decimals: yields and growth fractions.
pub fn round_ratio(value: f64) -> f64 {
    round_half_even(value, RATIO_PLACES)
}

pub fn round_coefficient(value: f64) -> f64 {
    round_half_even(value, COEFFICIENT_PLACES)
}

/// Whole currency units, used by the storage and parking discounts.
pub fn round_whole(value: f64) -> f64 {
    round_half_even(value, 0)
}
