//! Policy constants for one tax year and place of residence.
//!
//! Every threshold, rate and divisor used by the calculations lives here so
//! that a different year can be described by data alone (for example a TOML
//! file loaded by the command-line front end).

use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BracketTable, TaxBracket};

/// Errors raised when a tax regime or one of its tables is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegimeError {
    #[error("bracket table must contain at least one bracket")]
    EmptyBracketTable,

    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidBracketRate { index: usize, rate: Decimal },

    #[error("bracket {index} upper bound {bound} must be greater than the previous bound")]
    NonIncreasingBound { index: usize, bound: Decimal },

    #[error("only the last bracket may be unbounded, but bracket {index} is")]
    UnboundedBeforeLast { index: usize },

    #[error("the last bracket must be unbounded")]
    BoundedTopBracket,

    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    #[error("{name} must be positive, got {value}")]
    NonPositiveAmount { name: &'static str, value: Decimal },

    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },

    #[error("thresholds of {name} must be strictly increasing")]
    UnorderedThresholds { name: &'static str },
}

/// Employment-income tax credit ("detrazioni lavoro dipendente").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentCreditConfig {
    /// Income up to which the flat base amount applies.
    pub lower_threshold: Decimal,
    /// Income up to which the credit tapers from `middle_base_amount + middle_increment`.
    pub middle_threshold: Decimal,
    /// Income above which no credit is due.
    pub upper_threshold: Decimal,
    pub base_amount: Decimal,
    /// Floor for the lowest band.
    pub minimum_amount: Decimal,
    pub middle_base_amount: Decimal,
    pub middle_increment: Decimal,
    pub middle_divisor: Decimal,
    pub upper_divisor: Decimal,
}

/// Flat bonus rate applied to the whole income when it falls at or below `upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTier {
    pub upper_bound: Decimal,
    pub rate: Decimal,
}

/// Non-taxable cash bonus for low incomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowIncomeBonusConfig {
    /// No bonus above this income.
    pub income_ceiling: Decimal,
    /// Tiers in ascending order; the first one containing the income wins.
    pub tiers: Vec<BonusTier>,
}

/// Additional credit for the mid-income band ("ulteriore detrazione").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryCreditConfig {
    pub lower_threshold: Decimal,
    /// Income up to which the full amount is granted.
    pub full_threshold: Decimal,
    pub upper_threshold: Decimal,
    pub amount: Decimal,
    pub taper_divisor: Decimal,
}

/// Flat municipal surtax with an exemption threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalSurtaxConfig {
    pub rate: Decimal,
    /// Incomes at or below this amount pay nothing; above it the rate
    /// applies to the whole income.
    pub exemption_threshold: Decimal,
}

/// Complete set of rules for one tax year, region and municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegime {
    pub tax_year: i32,
    pub region: String,
    pub municipality: String,

    /// Employee social-security contribution rate.
    pub contribution_rate: Decimal,

    /// National income tax (IRPEF) brackets.
    pub income_tax_brackets: BracketTable,

    pub employment_credit: EmploymentCreditConfig,
    pub low_income_bonus: LowIncomeBonusConfig,
    pub secondary_credit: SecondaryCreditConfig,

    pub regional_surtax_brackets: BracketTable,
    pub municipal_surtax: MunicipalSurtaxConfig,
}

impl TaxRegime {
    /// Standard permanent employee resident in Milan, tax year 2026.
    pub fn milan_2026() -> Self {
        Self {
            tax_year: 2026,
            region: "Lombardia".to_string(),
            municipality: "Milano".to_string(),
            contribution_rate: dec!(0.0919),
            income_tax_brackets: BracketTable::from_trusted(vec![
                TaxBracket::bounded(dec!(28000), dec!(0.23)),
                // 33% from 2026, down from 35%
                TaxBracket::bounded(dec!(50000), dec!(0.33)),
                TaxBracket::unbounded(dec!(0.43)),
            ]),
            employment_credit: EmploymentCreditConfig {
                lower_threshold: dec!(15000),
                middle_threshold: dec!(28000),
                upper_threshold: dec!(50000),
                base_amount: dec!(1955),
                minimum_amount: dec!(690),
                middle_base_amount: dec!(1910),
                middle_increment: dec!(1190),
                middle_divisor: dec!(13000),
                upper_divisor: dec!(22000),
            },
            low_income_bonus: LowIncomeBonusConfig {
                income_ceiling: dec!(20000),
                tiers: vec![
                    BonusTier {
                        upper_bound: dec!(8500),
                        rate: dec!(0.071),
                    },
                    BonusTier {
                        upper_bound: dec!(15000),
                        rate: dec!(0.053),
                    },
                    BonusTier {
                        upper_bound: dec!(20000),
                        rate: dec!(0.048),
                    },
                ],
            },
            secondary_credit: SecondaryCreditConfig {
                lower_threshold: dec!(20000),
                full_threshold: dec!(32000),
                upper_threshold: dec!(40000),
                amount: dec!(1000),
                taper_divisor: dec!(8000),
            },
            regional_surtax_brackets: BracketTable::from_trusted(vec![
                TaxBracket::bounded(dec!(15000), dec!(0.0123)),
                TaxBracket::bounded(dec!(28000), dec!(0.0158)),
                TaxBracket::bounded(dec!(50000), dec!(0.0172)),
                TaxBracket::unbounded(dec!(0.0173)),
            ]),
            municipal_surtax: MunicipalSurtaxConfig {
                rate: dec!(0.008),
                exemption_threshold: dec!(23000),
            },
        }
    }

    /// Shared instance of [`TaxRegime::milan_2026`].
    pub fn builtin() -> &'static TaxRegime {
        static BUILTIN: OnceLock<TaxRegime> = OnceLock::new();
        BUILTIN.get_or_init(Self::milan_2026)
    }

    /// Validates every rate, threshold and table of the regime.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegimeError`] found. Divisors must be positive
    /// because the credit formulas divide by them.
    pub fn validate(&self) -> Result<(), RegimeError> {
        check_rate("contribution_rate", self.contribution_rate)?;
        self.income_tax_brackets.validate()?;
        self.regional_surtax_brackets.validate()?;

        let credit = &self.employment_credit;
        check_increasing(
            "employment_credit",
            &[
                credit.lower_threshold,
                credit.middle_threshold,
                credit.upper_threshold,
            ],
        )?;
        check_non_negative("employment_credit.lower_threshold", credit.lower_threshold)?;
        check_non_negative("employment_credit.base_amount", credit.base_amount)?;
        check_non_negative("employment_credit.minimum_amount", credit.minimum_amount)?;
        check_non_negative(
            "employment_credit.middle_base_amount",
            credit.middle_base_amount,
        )?;
        check_non_negative("employment_credit.middle_increment", credit.middle_increment)?;
        check_positive("employment_credit.middle_divisor", credit.middle_divisor)?;
        check_positive("employment_credit.upper_divisor", credit.upper_divisor)?;

        let bonus = &self.low_income_bonus;
        check_non_negative("low_income_bonus.income_ceiling", bonus.income_ceiling)?;
        let tier_bounds: Vec<Decimal> = bonus.tiers.iter().map(|t| t.upper_bound).collect();
        check_increasing("low_income_bonus.tiers", &tier_bounds)?;
        for tier in &bonus.tiers {
            check_rate("low_income_bonus.tiers.rate", tier.rate)?;
        }

        let secondary = &self.secondary_credit;
        check_increasing(
            "secondary_credit",
            &[
                secondary.lower_threshold,
                secondary.full_threshold,
                secondary.upper_threshold,
            ],
        )?;
        check_non_negative("secondary_credit.amount", secondary.amount)?;
        check_positive("secondary_credit.taper_divisor", secondary.taper_divisor)?;

        check_rate("municipal_surtax.rate", self.municipal_surtax.rate)?;
        check_non_negative(
            "municipal_surtax.exemption_threshold",
            self.municipal_surtax.exemption_threshold,
        )?;

        Ok(())
    }
}

impl Default for TaxRegime {
    fn default() -> Self {
        Self::milan_2026()
    }
}

fn check_rate(
    name: &'static str,
    value: Decimal,
) -> Result<(), RegimeError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(RegimeError::InvalidRate { name, value });
    }
    Ok(())
}

fn check_positive(
    name: &'static str,
    value: Decimal,
) -> Result<(), RegimeError> {
    if value <= Decimal::ZERO {
        return Err(RegimeError::NonPositiveAmount { name, value });
    }
    Ok(())
}

fn check_non_negative(
    name: &'static str,
    value: Decimal,
) -> Result<(), RegimeError> {
    if value < Decimal::ZERO {
        return Err(RegimeError::NegativeAmount { name, value });
    }
    Ok(())
}

fn check_increasing(
    name: &'static str,
    values: &[Decimal],
) -> Result<(), RegimeError> {
    if values.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(RegimeError::UnorderedThresholds { name });
    }
    Ok(())
}
