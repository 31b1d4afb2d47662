use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RegimeError;

/// One band of a progressive table.
///
/// Income above the previous bracket's bound and up to `upper_bound`
/// (inclusive) is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of the band; `None` for the unbounded top band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<Decimal>,

    /// Marginal rate as a fraction (0.23 for 23%).
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn bounded(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Ordered set of brackets partitioning `[0, +inf)` into contiguous bands.
///
/// A table is always valid once constructed: it holds at least one bracket,
/// bounds are positive and strictly increasing, rates lie in `[0, 1]`, and
/// only the last bracket is unbounded. Deserialization goes through the same
/// checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table, rejecting bracket lists that do not partition the
    /// non-negative line.
    ///
    /// # Errors
    ///
    /// Returns [`RegimeError`] if the list is empty, a rate is outside
    /// `[0, 1]`, bounds are not strictly increasing, or the unbounded bracket
    /// is missing or not last.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, RegimeError> {
        check_brackets(&brackets)?;
        Ok(Self { brackets })
    }

    /// Builds one of the built-in tables without re-running the checks.
    /// Callers own the invariant; `TaxRegime::validate` still covers it.
    pub(crate) fn from_trusted(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Re-checks the table invariants.
    pub fn validate(&self) -> Result<(), RegimeError> {
        check_brackets(&self.brackets)
    }

    /// Rate of the band that `amount` falls into (upper bounds inclusive).
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ral_core::TaxRegime;
    ///
    /// let regional = &TaxRegime::milan_2026().regional_surtax_brackets;
    ///
    /// assert_eq!(regional.marginal_rate(dec!(15000)), dec!(0.0123));
    /// assert_eq!(regional.marginal_rate(dec!(15000.01)), dec!(0.0158));
    /// assert_eq!(regional.marginal_rate(dec!(90000)), dec!(0.0173));
    /// ```
    pub fn marginal_rate(
        &self,
        amount: Decimal,
    ) -> Decimal {
        self.brackets
            .iter()
            .find(|b| b.upper_bound.is_none_or(|bound| amount <= bound))
            .or(self.brackets.last())
            .map_or(Decimal::ZERO, |b| b.rate)
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketTable {
    type Error = RegimeError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<TaxBracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}

fn check_brackets(brackets: &[TaxBracket]) -> Result<(), RegimeError> {
    let Some(last) = brackets.len().checked_sub(1) else {
        return Err(RegimeError::EmptyBracketTable);
    };

    let mut previous = Decimal::ZERO;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(RegimeError::InvalidBracketRate {
                index,
                rate: bracket.rate,
            });
        }
        match bracket.upper_bound {
            Some(bound) if bound <= previous => {
                return Err(RegimeError::NonIncreasingBound { index, bound });
            }
            Some(bound) => previous = bound,
            None if index != last => return Err(RegimeError::UnboundedBeforeLast { index }),
            None => {}
        }
    }

    if brackets[last].upper_bound.is_some() {
        return Err(RegimeError::BoundedTopBracket);
    }
    Ok(())
}

/// A bracket actually touched by a progressive computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketDetail {
    pub lower_bound: Decimal,

    /// `None` for the unbounded top band.
    pub upper_bound: Option<Decimal>,

    pub rate: Decimal,

    /// Portion of the taxed amount that fell inside this band.
    pub taxable_amount: Decimal,

    /// `taxable_amount * rate`.
    pub tax: Decimal,
}
