//! Italian-style number formatting: `.` groups thousands, `,` marks decimals.

use ral_core::calculations::common::round_to_euro;
use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts a `.` every three digits from the right of a digit string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Fixed-point rendering with `dp` decimals and a comma separator.
fn fixed(
    value: Decimal,
    dp: u32,
) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Whole euros with grouped thousands (`23360.52` becomes `23.361`).
pub fn format_eur(value: Decimal) -> String {
    fixed(round_to_euro(value), 0)
}

/// Percentage with one decimal (`22.1316` becomes `22,1%`).
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 1))
}

/// Rate given as a fraction, shown as a percentage with `dp` decimals
/// (`0.0158` with 2 decimals becomes `1,58%`).
pub fn format_rate(
    rate: Decimal,
    dp: u32,
) -> String {
    format!("{}%", fixed(rate * Decimal::ONE_HUNDRED, dp))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn group_thousands_inserts_dots() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }

    #[test]
    fn format_eur_rounds_to_whole_euros() {
        assert_eq!(format_eur(dec!(23360.5212)), "23.361");
        assert_eq!(format_eur(dec!(999.4999)), "999");
        assert_eq!(format_eur(dec!(1946.71)), "1.947");
    }

    #[test]
    fn format_eur_handles_zero_and_negatives() {
        assert_eq!(format_eur(dec!(0)), "0");
        assert_eq!(format_eur(dec!(-0.2)), "0");
        assert_eq!(format_eur(dec!(-2757)), "-2.757");
    }

    #[test]
    fn format_percent_uses_comma_and_one_decimal() {
        assert_eq!(format_percent(dec!(22.131595)), "22,1%");
        assert_eq!(format_percent(dec!(13.35)), "13,4%");
        assert_eq!(format_percent(dec!(0)), "0,0%");
        assert_eq!(format_percent(dec!(100)), "100,0%");
    }

    #[test]
    fn format_rate_converts_fraction() {
        assert_eq!(format_rate(dec!(0.23), 0), "23%");
        assert_eq!(format_rate(dec!(0.0158), 2), "1,58%");
        assert_eq!(format_rate(dec!(0.008), 2), "0,80%");
        assert_eq!(format_rate(dec!(0.0919), 2), "9,19%");
    }
}
