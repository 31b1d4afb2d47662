//! Marginal (bracket-by-bracket) tax over a [`BracketTable`].
//!
//! The same routine serves the national income tax and the regional surtax;
//! only the table differs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BracketTable, TaxBracketDetail};

/// Outcome of [`apply_brackets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    pub total: Decimal,

    /// One entry per band that received part of the amount, lowest first.
    pub details: Vec<TaxBracketDetail>,
}

/// Taxes `taxable_amount` band by band.
///
/// Each band taxes the smaller of what is left and its own width; iteration
/// stops as soon as the amount is exhausted, so bands above the last taxed
/// unit produce no detail entry. A zero amount yields a zero total and no
/// details.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ral_core::TaxRegime;
/// use ral_core::calculations::apply_brackets;
///
/// let regime = TaxRegime::milan_2026();
/// let tax = apply_brackets(dec!(90810), &regime.income_tax_brackets);
///
/// // 28000 * 23% + 22000 * 33% + 40810 * 43%
/// assert_eq!(tax.total, dec!(31248.3));
/// assert_eq!(tax.details.len(), 3);
/// assert_eq!(tax.details[2].upper_bound, None);
/// ```
pub fn apply_brackets(
    taxable_amount: Decimal,
    table: &BracketTable,
) -> BracketTax {
    let mut remaining = taxable_amount;
    let mut previous_bound = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut details = Vec::new();

    for bracket in table.brackets() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxed = match bracket.upper_bound {
            Some(bound) => remaining.min(bound - previous_bound),
            None => remaining,
        };
        let tax = taxed * bracket.rate;
        total += tax;

        details.push(TaxBracketDetail {
            lower_bound: previous_bound,
            upper_bound: bracket.upper_bound,
            rate: bracket.rate,
            taxable_amount: taxed,
            tax,
        });

        remaining -= taxed;
        if let Some(bound) = bracket.upper_bound {
            previous_bound = bound;
        }
    }

    BracketTax { total, details }
}
