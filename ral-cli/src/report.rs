//! Presentation of a [`CalculationResult`]: ordered breakdown rows with
//! their share of gross salary, the income-tax bracket table, and the
//! assumptions the figures rely on.

use std::fmt::Write;

use ral_core::calculations::common::percent_of;
use ral_core::{CalculationResult, TaxRegime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::format::{format_eur, format_percent, format_rate};

/// Width in characters of a bar covering 100% of gross salary.
const BAR_WIDTH: u32 = 30;

const LABEL_WIDTH: usize = 40;

/// How a row affects net pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Neutral,
    Negative,
    Positive,
    Result,
}

/// One line of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub label: String,

    /// Signed amount: withholdings are negative.
    pub amount: Decimal,

    pub kind: RowKind,
    pub bold: bool,

    /// `|amount|` as a percentage of gross salary.
    pub share_percent: Decimal,
}

impl BreakdownRow {
    fn new(
        label: impl Into<String>,
        amount: Decimal,
        kind: RowKind,
        gross_salary: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
            kind,
            bold: false,
            share_percent: percent_of(amount.abs(), gross_salary),
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Share of gross capped at 100, for drawing proportional bars.
    pub fn bar_width_percent(&self) -> Decimal {
        self.share_percent.min(Decimal::ONE_HUNDRED)
    }

    /// Amount in whole euros, with `−` for withholdings and `+` for credits.
    pub fn formatted_amount(&self) -> String {
        let sign = if self.amount < Decimal::ZERO {
            "\u{2212}"
        } else if self.amount > Decimal::ZERO && self.kind == RowKind::Positive {
            "+"
        } else {
            ""
        };
        format!("{sign}{} \u{20ac}", format_eur(self.amount.abs()))
    }

    pub fn formatted_share(&self) -> String {
        format!("({})", format_percent(self.share_percent))
    }

    fn bar(&self) -> String {
        let cells = (self.bar_width_percent() * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
            .round()
            .to_usize()
            .unwrap_or(0);
        "\u{2588}".repeat(cells)
    }
}

/// Builds the breakdown rows in display order.
///
/// The secondary credit and the bonus rows only appear when non-zero.
pub fn breakdown_rows(
    result: &CalculationResult,
    regime: &TaxRegime,
) -> Vec<BreakdownRow> {
    let gross = result.gross_salary;
    let mut rows = Vec::with_capacity(11);

    rows.push(BreakdownRow::new("RAL lorda", gross, RowKind::Neutral, gross));
    rows.push(BreakdownRow::new(
        format!(
            "Contributi INPS ({})",
            format_rate(regime.contribution_rate, 2)
        ),
        -result.social_contributions,
        RowKind::Negative,
        gross,
    ));
    rows.push(
        BreakdownRow::new(
            "Imponibile IRPEF",
            result.taxable_income,
            RowKind::Neutral,
            gross,
        )
        .bold(),
    );

    let marginal = result
        .marginal_income_tax_rate()
        .or_else(|| regime.income_tax_brackets.brackets().first().map(|b| b.rate))
        .unwrap_or(Decimal::ZERO);
    rows.push(BreakdownRow::new(
        format!("IRPEF lorda (scaglione max {})", format_rate(marginal, 0)),
        -result.gross_income_tax,
        RowKind::Negative,
        gross,
    ));
    rows.push(BreakdownRow::new(
        "Detrazioni lavoro dipendente",
        result.employment_tax_credit,
        RowKind::Positive,
        gross,
    ));
    if result.secondary_tax_credit > Decimal::ZERO {
        rows.push(BreakdownRow::new(
            "Ulteriore detrazione",
            result.secondary_tax_credit,
            RowKind::Positive,
            gross,
        ));
    }
    rows.push(
        BreakdownRow::new(
            "IRPEF netta",
            -result.net_income_tax,
            RowKind::Negative,
            gross,
        )
        .bold(),
    );

    let regional_rate = regime
        .regional_surtax_brackets
        .marginal_rate(result.taxable_income);
    rows.push(BreakdownRow::new(
        format!(
            "Add. regionale ({}, {})",
            regime.region,
            format_rate(regional_rate, 2)
        ),
        -result.regional_surtax,
        RowKind::Negative,
        gross,
    ));
    rows.push(BreakdownRow::new(
        format!(
            "Add. comunale ({}, {})",
            regime.municipality,
            format_rate(regime.municipal_surtax.rate, 2)
        ),
        -result.municipal_surtax,
        RowKind::Negative,
        gross,
    ));

    if result.low_income_bonus > Decimal::ZERO {
        rows.push(BreakdownRow::new(
            format!("Bonus ({})", bonus_rate_range(regime)),
            result.low_income_bonus,
            RowKind::Positive,
            gross,
        ));
    }

    rows.push(
        BreakdownRow::new(
            "Netto annuale",
            result.net_annual_salary,
            RowKind::Result,
            gross,
        )
        .bold(),
    );
    rows
}

/// `4,8-7,1%` style range of the bonus tier rates.
fn bonus_rate_range(regime: &TaxRegime) -> String {
    let rates = regime.low_income_bonus.tiers.iter().map(|t| t.rate);
    let (Some(low), Some(high)) = (rates.clone().min(), rates.max()) else {
        return String::new();
    };
    if low == high {
        return format_rate(low, 1);
    }
    let low = format_rate(low, 1);
    format!("{}-{}", low.trim_end_matches('%'), format_rate(high, 1))
}

/// Fixed assumptions behind every figure of the report.
pub fn assumptions(regime: &TaxRegime) -> Vec<String> {
    vec![
        "Dipendente a tempo indeterminato".to_string(),
        format!("Residente a {} ({})", regime.municipality, regime.region),
        "Solo reddito da lavoro dipendente".to_string(),
        "Nessuna detrazione per familiari a carico".to_string(),
        "Nessun benefit aziendale / welfare".to_string(),
        "Nessuna agevolazione (under 36, rientro cervelli, ecc.)".to_string(),
        format!("Anno fiscale {}", regime.tax_year),
    ]
}

/// Renders the full human-readable report.
pub fn render_text(
    result: &CalculationResult,
    regime: &TaxRegime,
    show_assumptions: bool,
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Netto annuale:      {} \u{20ac}",
        format_eur(result.net_annual_salary)
    );
    let _ = writeln!(
        out,
        "Netto mensile:      {} \u{20ac} ({} mensilit\u{e0})",
        format_eur(result.net_monthly_salary),
        result.monthly_payments
    );
    let _ = writeln!(
        out,
        "Aliquota effettiva: {}",
        format_percent(result.effective_tax_rate_percent)
    );

    let _ = writeln!(out, "\nDettaglio calcolo");
    for row in breakdown_rows(result, regime) {
        let label = if row.bold {
            row.label.to_uppercase()
        } else {
            row.label.clone()
        };
        let _ = writeln!(
            out,
            "  {label:<LABEL_WIDTH$}{:>12} {:>9}  {}",
            row.formatted_amount(),
            row.formatted_share(),
            row.bar()
        );
    }

    if !result.income_tax_brackets.is_empty() {
        let _ = writeln!(out, "\nScaglioni IRPEF");
        for detail in &result.income_tax_brackets {
            let band = match detail.upper_bound {
                Some(upper) => format!(
                    "{} \u{2013} {}",
                    format_eur(detail.lower_bound),
                    format_eur(upper)
                ),
                None => format!("oltre {}", format_eur(detail.lower_bound)),
            };
            let _ = writeln!(
                out,
                "  {band:<22}{:>5}{:>14}{:>12}",
                format_rate(detail.rate, 0),
                format!("{} \u{20ac}", format_eur(detail.taxable_amount)),
                format!("{} \u{20ac}", format_eur(detail.tax)),
            );
        }
    }

    if show_assumptions {
        let _ = writeln!(out, "\nAssunzioni del calcolo");
        for assumption in assumptions(regime) {
            let _ = writeln!(out, "  - {assumption}");
        }
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tax_year: i32,
    region: &'a str,
    municipality: &'a str,
    result: &'a CalculationResult,
    breakdown: Vec<BreakdownRow>,
}

/// Renders the result and its breakdown rows as pretty-printed JSON.
pub fn render_json(
    result: &CalculationResult,
    regime: &TaxRegime,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        tax_year: regime.tax_year,
        region: &regime.region,
        municipality: &regime.municipality,
        result,
        breakdown: breakdown_rows(result, regime),
    })
}
