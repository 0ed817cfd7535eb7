//! Common utility functions for performance calculations.
//!
//! This module provides shared functionality used across the calculator
//! modules, including measurement rounding and free-text input parsing.

use rust_decimal::Decimal;

/// Rounds a value to exactly one decimal place using half-up rounding.
///
/// Derived measurements (masses in kg, percentages, wellness means) are stored
/// at one decimal place so that floating noise cannot accumulate through
/// repeated recomputation.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to one decimal place.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wiko_core::calculations::common::round_to_tenth;
///
/// assert_eq!(round_to_tenth(dec!(16.04)), dec!(16.0));
/// assert_eq!(round_to_tenth(dec!(16.05)), dec!(16.1));
/// assert_eq!(round_to_tenth(dec!(16.06)), dec!(16.1));
/// ```
pub fn round_to_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a ratio to exactly two decimal places using half-up rounding.
///
/// Used for workload ratios, which are conventionally reported at two decimal
/// places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wiko_core::calculations::common::round_to_hundredth;
///
/// assert_eq!(round_to_hundredth(dec!(1.2349)), dec!(1.23));
/// assert_eq!(round_to_hundredth(dec!(1.235)), dec!(1.24));
/// ```
pub fn round_to_hundredth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a measurement to the non-negative range.
///
/// Physical quantities (heights, masses, percentages) cannot be negative;
/// anything below zero is floored to zero rather than rejected.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wiko_core::calculations::common::clamp_non_negative;
///
/// assert_eq!(clamp_non_negative(dec!(-5)), dec!(0));
/// assert_eq!(clamp_non_negative(dec!(72.5)), dec!(72.5));
/// ```
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO { Decimal::ZERO } else { value }
}

/// Parses free-text form input into an optional measurement.
///
/// Trims whitespace and accepts a comma as decimal separator (`"70,5"` parses
/// the same as `"70.5"`). Returns `None` for empty or whitespace-only input,
/// or when the text does not parse as a whole number or decimal (logs a
/// warning on parse failure).
pub fn parse_measurement(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e| {
            tracing::warn!(input = %raw, "invalid measurement: {}", e);
            None
        },
        Some,
    )
}
