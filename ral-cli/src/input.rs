use rust_decimal::Decimal;
use thiserror::Error;

use crate::format::group_thousands;

/// Error returned when typed salary text cannot be used for a calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("salary '{input}' is too large")]
    TooLarge { input: String },

    #[error("gross annual salary must be a positive amount, got '{input}'")]
    NotPositive { input: String },
}

/// Keeps only the ASCII digits of `s`.
fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Reads a whole-euro amount from free-form text.
///
/// Every non-digit is discarded, so thousands separators of any style
/// (`35.000`, `35,000`, `€ 35 000`) are accepted. Cents are not supported:
/// `35.000,50` reads as 3 500 050. Text without digits reads as 0.
pub fn parse_input_value(s: &str) -> Result<u64, InputError> {
    let digits = digits_only(s);
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse().map_err(|_| {
        tracing::warn!(input = %s, "salary input does not fit in 64 bits");
        InputError::TooLarge {
            input: s.to_string(),
        }
    })
}

/// Re-renders typed text as a grouped amount (`35000` becomes `35.000`).
///
/// Returns an empty string when the text holds no digits.
pub fn format_input_value(s: &str) -> String {
    let digits = digits_only(s);
    let trimmed = digits.trim_start_matches('0');
    match (digits.is_empty(), trimmed.is_empty()) {
        (true, _) => String::new(),
        (false, true) => "0".to_string(),
        (false, false) => group_thousands(trimmed),
    }
}

/// Parses the gross annual salary, rejecting zero.
pub fn parse_gross_salary(s: &str) -> Result<Decimal, InputError> {
    let value = parse_input_value(s)?;
    if value == 0 {
        return Err(InputError::NotPositive {
            input: s.to_string(),
        });
    }
    Ok(Decimal::from(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_input_value_ignores_separators_and_symbols() {
        assert_eq!(parse_input_value("35.000"), Ok(35000));
        assert_eq!(parse_input_value("35,000"), Ok(35000));
        assert_eq!(parse_input_value("€ 35 000"), Ok(35000));
    }

    #[test]
    fn parse_input_value_empty_is_zero() {
        assert_eq!(parse_input_value(""), Ok(0));
        assert_eq!(parse_input_value("abc"), Ok(0));
    }

    #[test]
    fn parse_input_value_rejects_overflow() {
        let input = "99999999999999999999999";

        assert_eq!(
            parse_input_value(input),
            Err(InputError::TooLarge {
                input: input.to_string()
            })
        );
    }

    #[test]
    fn format_input_value_groups_with_dots() {
        assert_eq!(format_input_value("35000"), "35.000");
        assert_eq!(format_input_value("1234567"), "1.234.567");
        assert_eq!(format_input_value("999"), "999");
    }

    #[test]
    fn format_input_value_drops_leading_zeros() {
        assert_eq!(format_input_value("0035000"), "35.000");
        assert_eq!(format_input_value("000"), "0");
    }

    #[test]
    fn format_input_value_empty_without_digits() {
        assert_eq!(format_input_value("€"), "");
    }

    #[test]
    fn parse_gross_salary_accepts_formatted_amount() {
        assert_eq!(parse_gross_salary("30.000"), Ok(dec!(30000)));
    }

    #[test]
    fn parse_gross_salary_rejects_zero_and_empty() {
        assert_eq!(
            parse_gross_salary("0"),
            Err(InputError::NotPositive {
                input: "0".to_string()
            })
        );
        assert!(matches!(parse_gross_salary(""), Err(InputError::NotPositive { .. })));
    }

    #[test]
    fn parse_gross_salary_ignores_minus_sign() {
        assert_eq!(parse_gross_salary("-30000"), Ok(dec!(30000)));
    }
}
