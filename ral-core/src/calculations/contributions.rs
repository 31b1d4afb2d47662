//! Employee social-security contributions (INPS).

use rust_decimal::Decimal;

/// Contributions withheld from gross salary at a flat `rate`.
///
/// Caller guarantees a non-negative salary.
pub fn compute_contributions(
    gross_salary: Decimal,
    rate: Decimal,
) -> Decimal {
    gross_salary * rate
}
