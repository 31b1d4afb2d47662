mod bracket;
mod calculation_result;
mod monthly_payments;
mod tax_regime;

pub use bracket::{BracketTable, TaxBracket, TaxBracketDetail};
pub use calculation_result::CalculationResult;
pub use monthly_payments::MonthlyPayments;
pub use tax_regime::{
    BonusTier, EmploymentCreditConfig, LowIncomeBonusConfig, MunicipalSurtaxConfig, RegimeError,
    SecondaryCreditConfig, TaxRegime,
};
