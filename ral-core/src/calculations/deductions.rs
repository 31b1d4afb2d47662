//! Tax credits and the low-income bonus.
//!
//! All three rules are functions of taxable income (gross salary minus
//! social contributions) and of the regime's policy constants. The two
//! credits reduce income tax; the bonus is paid out as non-taxable cash.
//!
//! | Rule | Band | Amount |
//! |------|------|--------|
//! | employment credit | ≤ 15 000 | max(1 955, 690) |
//! | | 15 000 – 28 000 | 1 910 + 1 190 × (28 000 − income) / 13 000 |
//! | | 28 000 – 50 000 | 1 910 × (50 000 − income) / 22 000 |
//! | bonus | ≤ 8 500 / 15 000 / 20 000 | income × 7.1% / 5.3% / 4.8% |
//! | secondary credit | 20 000 – 32 000 | 1 000 |
//! | | 32 000 – 40 000 | 1 000 × (40 000 − income) / 8 000 |
//!
//! Upper bounds are inclusive. Divisors come from a validated
//! [`TaxRegime`](crate::TaxRegime) and are never zero.

use rust_decimal::Decimal;

use crate::calculations::common::max;
use crate::{EmploymentCreditConfig, LowIncomeBonusConfig, SecondaryCreditConfig};

/// Employment-income tax credit.
pub fn employment_tax_credit(
    income: Decimal,
    config: &EmploymentCreditConfig,
) -> Decimal {
    if income <= config.lower_threshold {
        return max(config.base_amount, config.minimum_amount);
    }
    if income <= config.middle_threshold {
        let taper = (config.middle_threshold - income) / config.middle_divisor;
        return config.middle_base_amount + config.middle_increment * taper;
    }
    if income <= config.upper_threshold {
        let taper = (config.upper_threshold - income) / config.upper_divisor;
        return config.middle_base_amount * taper;
    }
    Decimal::ZERO
}

/// Non-taxable bonus: the whole income times the rate of the first tier
/// containing it.
pub fn low_income_bonus(
    income: Decimal,
    config: &LowIncomeBonusConfig,
) -> Decimal {
    if income > config.income_ceiling {
        return Decimal::ZERO;
    }
    config
        .tiers
        .iter()
        .find(|tier| income <= tier.upper_bound)
        .map_or(Decimal::ZERO, |tier| income * tier.rate)
}

/// Additional credit for the mid-income band, tapering to zero at the
/// upper threshold.
pub fn secondary_tax_credit(
    income: Decimal,
    config: &SecondaryCreditConfig,
) -> Decimal {
    if income <= config.lower_threshold || income > config.upper_threshold {
        return Decimal::ZERO;
    }
    if income <= config.full_threshold {
        return config.amount;
    }
    config.amount * ((config.upper_threshold - income) / config.taper_divisor)
}
