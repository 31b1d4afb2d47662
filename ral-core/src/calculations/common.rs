//! Helpers shared by the salary calculations and by code presenting results.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents, with midpoints rounded away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ral_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1946.7101)), dec!(1946.71));
/// assert_eq!(round_half_up(dec!(167.545)), dec!(167.55));
/// assert_eq!(round_half_up(dec!(-167.545)), dec!(-167.55));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to whole euros, with midpoints rounded away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ral_core::calculations::common::round_to_euro;
///
/// assert_eq!(round_to_euro(dec!(23360.52)), dec!(23361));
/// assert_eq!(round_to_euro(dec!(721.5)), dec!(722));
/// ```
pub fn round_to_euro(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Expresses `part` as a percentage of `whole`; zero when `whole` is zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ral_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(2757), dec!(30000)), dec!(9.19));
/// assert_eq!(percent_of(dec!(100), dec!(0)), dec!(0));
/// ```
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}
