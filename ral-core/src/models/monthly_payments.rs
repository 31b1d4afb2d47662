use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::SalaryError;

/// Number of salary instalments per year (12 ordinary months plus the
/// optional 13th and 14th payments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MonthlyPayments {
    Twelve,
    #[default]
    Thirteen,
    Fourteen,
}

impl MonthlyPayments {
    pub const ALL: [Self; 3] = [Self::Twelve, Self::Thirteen, Self::Fourteen];

    pub fn count(self) -> u8 {
        match self {
            Self::Twelve => 12,
            Self::Thirteen => 13,
            Self::Fourteen => 14,
        }
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.count())
    }
}

impl TryFrom<u8> for MonthlyPayments {
    type Error = SalaryError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            12 => Ok(Self::Twelve),
            13 => Ok(Self::Thirteen),
            14 => Ok(Self::Fourteen),
            other => Err(SalaryError::InvalidInput {
                field: "monthly_payments",
                reason: format!("must be 12, 13 or 14, got {other}"),
            }),
        }
    }
}

impl From<MonthlyPayments> for u8 {
    fn from(payments: MonthlyPayments) -> Self {
        payments.count()
    }
}

impl FromStr for MonthlyPayments {
    type Err = SalaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.trim().parse::<u8>().map_err(|_| SalaryError::InvalidInput {
            field: "monthly_payments",
            reason: format!("must be 12, 13 or 14, got '{s}'"),
        })?;
        Self::try_from(count)
    }
}

impl fmt::Display for MonthlyPayments {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}
