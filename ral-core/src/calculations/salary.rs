//! Gross-to-net salary worksheet.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Social contributions: gross × contribution rate |
//! | 2    | Taxable income: gross − step 1 |
//! | 3    | Gross income tax: national brackets over step 2 |
//! | 4    | Employment tax credit |
//! | 5    | Low-income bonus (non-taxable) |
//! | 6    | Secondary tax credit |
//! | 7    | Net income tax: step 3 − step 4 − step 6, minimum 0 |
//! | 8    | Regional surtax: regional brackets over step 2 |
//! | 9    | Municipal surtax |
//! | 10   | Net annual: gross − 1 − 7 − 8 − 9 + 5; net monthly: net annual ÷ payments |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ral_core::calculations::{SalaryWorksheet, common::round_half_up};
//! use ral_core::{MonthlyPayments, TaxRegime};
//!
//! let regime = TaxRegime::milan_2026();
//! let worksheet = SalaryWorksheet::new(&regime);
//! let result = worksheet.calculate(dec!(15000), MonthlyPayments::Thirteen).unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(13621.5));
//! assert_eq!(result.employment_tax_credit, dec!(1955));
//! assert_eq!(result.municipal_surtax, dec!(0));
//! assert_eq!(round_half_up(result.net_monthly_salary), dec!(999.84));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{max, percent_of};
use crate::calculations::contributions::compute_contributions;
use crate::calculations::deductions::{
    employment_tax_credit, low_income_bonus, secondary_tax_credit,
};
use crate::calculations::progressive::apply_brackets;
use crate::calculations::surtax::{municipal_surtax, regional_surtax};
use crate::{CalculationResult, MonthlyPayments, RegimeError, TaxRegime};

/// Errors that can occur during a salary calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SalaryError {
    /// An argument is outside the domain the calculation is defined on.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The tax regime failed validation.
    #[error("invalid tax regime: {0}")]
    InvalidRegime(#[from] RegimeError),
}

/// Calculator for the gross-to-net worksheet under one [`TaxRegime`].
///
/// Holds no state besides the borrowed regime, so a single worksheet can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct SalaryWorksheet<'a> {
    regime: &'a TaxRegime,
}

impl<'a> SalaryWorksheet<'a> {
    pub fn new(regime: &'a TaxRegime) -> Self {
        Self { regime }
    }

    pub fn regime(&self) -> &'a TaxRegime {
        self.regime
    }

    /// Runs every step of the worksheet.
    ///
    /// A zero gross salary is a defined case: every field of the result is
    /// zero, including the credits.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryError::InvalidInput`] for a negative gross salary and
    /// [`SalaryError::InvalidRegime`] if the regime fails validation.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
        monthly_payments: MonthlyPayments,
    ) -> Result<CalculationResult, SalaryError> {
        self.regime.validate()?;

        if gross_salary < Decimal::ZERO {
            warn!(gross_salary = %gross_salary, "rejecting negative gross salary");
            return Err(SalaryError::InvalidInput {
                field: "gross_salary",
                reason: format!("must be non-negative, got {gross_salary}"),
            });
        }

        if gross_salary.is_zero() {
            warn!("gross salary is zero; returning an all-zero breakdown");
            return Ok(CalculationResult::zero(monthly_payments));
        }

        let regime = self.regime;

        // Steps 1-2
        let social_contributions = compute_contributions(gross_salary, regime.contribution_rate);
        let taxable_income = gross_salary - social_contributions;

        // Step 3
        let income_tax = apply_brackets(taxable_income, &regime.income_tax_brackets);

        // Steps 4-6
        let employment_tax_credit =
            employment_tax_credit(taxable_income, &regime.employment_credit);
        let low_income_bonus = low_income_bonus(taxable_income, &regime.low_income_bonus);
        let secondary_tax_credit = secondary_tax_credit(taxable_income, &regime.secondary_credit);

        // Step 7
        let net_income_tax = self.net_income_tax(
            income_tax.total,
            employment_tax_credit,
            secondary_tax_credit,
        );

        // Steps 8-9
        let regional_surtax = regional_surtax(taxable_income, &regime.regional_surtax_brackets);
        let municipal_surtax = municipal_surtax(taxable_income, &regime.municipal_surtax);

        // Step 10
        let net_annual_salary = gross_salary
            - social_contributions
            - net_income_tax
            - regional_surtax
            - municipal_surtax
            + low_income_bonus;
        let net_monthly_salary = net_annual_salary / monthly_payments.as_decimal();
        let effective_tax_rate_percent = percent_of(gross_salary - net_annual_salary, gross_salary);

        debug!(
            gross_salary = %gross_salary,
            monthly_payments = %monthly_payments,
            taxable_income = %taxable_income,
            net_income_tax = %net_income_tax,
            net_annual_salary = %net_annual_salary,
            "salary worksheet calculated"
        );

        Ok(CalculationResult {
            gross_salary,
            monthly_payments,
            social_contributions,
            taxable_income,
            gross_income_tax: income_tax.total,
            income_tax_brackets: income_tax.details,
            employment_tax_credit,
            low_income_bonus,
            secondary_tax_credit,
            net_income_tax,
            regional_surtax,
            municipal_surtax,
            net_annual_salary,
            net_monthly_salary,
            effective_tax_rate_percent,
        })
    }

    /// Income tax after credits. Credits cannot turn into a refund.
    fn net_income_tax(
        &self,
        gross_income_tax: Decimal,
        employment_tax_credit: Decimal,
        secondary_tax_credit: Decimal,
    ) -> Decimal {
        let net = gross_income_tax - employment_tax_credit - secondary_tax_credit;
        if net < Decimal::ZERO {
            debug!(
                gross_income_tax = %gross_income_tax,
                credits = %(employment_tax_credit + secondary_tax_credit),
                "credits exceed income tax; net income tax floored at zero"
            );
        }
        max(net, Decimal::ZERO)
    }
}

/// Calculates the net salary under the built-in Milan 2026 regime.
///
/// Use [`MonthlyPayments::default()`] for the usual 13 instalments.
///
/// # Errors
///
/// Returns [`SalaryError::InvalidInput`] for a negative gross salary.
pub fn compute_salary(
    gross_salary: Decimal,
    monthly_payments: MonthlyPayments,
) -> Result<CalculationResult, SalaryError> {
    SalaryWorksheet::new(TaxRegime::builtin()).calculate(gross_salary, monthly_payments)
}
