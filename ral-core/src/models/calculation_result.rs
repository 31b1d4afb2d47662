use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MonthlyPayments, TaxBracketDetail};

/// Full salary breakdown produced by one calculation.
///
/// Every amount is kept at full decimal precision; rounding is left to
/// whoever displays the figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Gross annual salary (RAL).
    pub gross_salary: Decimal,

    pub monthly_payments: MonthlyPayments,

    /// Employee social-security contributions (INPS).
    pub social_contributions: Decimal,

    /// Gross salary minus social contributions; base for every tax below.
    pub taxable_income: Decimal,

    /// National income tax (IRPEF) before credits.
    pub gross_income_tax: Decimal,

    /// Bands of the national table touched by `taxable_income`, lowest first.
    pub income_tax_brackets: Vec<TaxBracketDetail>,

    pub employment_tax_credit: Decimal,

    /// Non-taxable bonus paid on top of net salary.
    pub low_income_bonus: Decimal,

    pub secondary_tax_credit: Decimal,

    /// Income tax after credits, never negative.
    pub net_income_tax: Decimal,

    pub regional_surtax: Decimal,
    pub municipal_surtax: Decimal,

    pub net_annual_salary: Decimal,
    pub net_monthly_salary: Decimal,

    /// `(gross - net) / gross * 100`, or zero for a zero salary.
    pub effective_tax_rate_percent: Decimal,
}

impl CalculationResult {
    /// Result for a zero gross salary: every field is zero.
    pub(crate) fn zero(monthly_payments: MonthlyPayments) -> Self {
        Self {
            gross_salary: Decimal::ZERO,
            monthly_payments,
            social_contributions: Decimal::ZERO,
            taxable_income: Decimal::ZERO,
            gross_income_tax: Decimal::ZERO,
            income_tax_brackets: Vec::new(),
            employment_tax_credit: Decimal::ZERO,
            low_income_bonus: Decimal::ZERO,
            secondary_tax_credit: Decimal::ZERO,
            net_income_tax: Decimal::ZERO,
            regional_surtax: Decimal::ZERO,
            municipal_surtax: Decimal::ZERO,
            net_annual_salary: Decimal::ZERO,
            net_monthly_salary: Decimal::ZERO,
            effective_tax_rate_percent: Decimal::ZERO,
        }
    }

    /// Everything withheld from gross pay, net of the bonus.
    pub fn total_withholding(&self) -> Decimal {
        self.gross_salary - self.net_annual_salary
    }

    /// Rate of the highest national bracket reached, if any income was taxed.
    pub fn marginal_income_tax_rate(&self) -> Option<Decimal> {
        self.income_tax_brackets.last().map(|detail| detail.rate)
    }
}
