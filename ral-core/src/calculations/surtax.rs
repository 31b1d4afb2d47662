//! Regional and municipal surtaxes ("addizionali").

use rust_decimal::Decimal;

use crate::calculations::progressive::apply_brackets;
use crate::{BracketTable, MunicipalSurtaxConfig};

/// Municipal surtax.
///
/// Incomes at or below the exemption threshold pay nothing. Above it the
/// rate applies to the whole income, not just the excess, so crossing the
/// threshold costs `threshold * rate` at once.
pub fn municipal_surtax(
    income: Decimal,
    config: &MunicipalSurtaxConfig,
) -> Decimal {
    if income <= config.exemption_threshold {
        return Decimal::ZERO;
    }
    income * config.rate
}

/// Regional surtax: marginal bands over the full taxable income.
pub fn regional_surtax(
    income: Decimal,
    table: &BracketTable,
) -> Decimal {
    apply_brackets(income, table).total
}
