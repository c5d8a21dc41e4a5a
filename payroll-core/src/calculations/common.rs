//! Shared arithmetic helpers for payroll calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half up (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(109.3806)), dec!(109.38));
/// assert_eq!(round_half_up(dec!(128.715)), dec!(128.72));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage rate (7.5 means 7.5%) to a monetary base.
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Clamps a value at zero. Withholding amounts and taxable slices can never
/// be negative.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    if value < Decimal::ZERO { Decimal::ZERO } else { value }
}
