//! Integration tests running typed input through a loaded regime to the
//! rendered report.

use std::path::Path;

use pretty_assertions::assert_eq;
use ral_cli::config::RegimeLoader;
use ral_cli::input::{format_input_value, parse_gross_salary};
use ral_cli::report::{breakdown_rows, render_json, render_text};
use ral_core::{MonthlyPayments, SalaryWorksheet, TaxRegime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MILANO_2026: &str = include_str!("../regimes/milano-2026.toml");

fn shipped_regime_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("regimes/milano-2026.toml")
}

#[test]
fn test_shipped_regime_file_loads_from_disk() {
    let regime = RegimeLoader::load(&shipped_regime_path()).unwrap();

    assert_eq!(regime, TaxRegime::milan_2026());
}

#[test]
fn test_typed_salary_to_text_report() {
    let regime = RegimeLoader::resolve(Some(&shipped_regime_path())).unwrap();
    let gross = parse_gross_salary("€ 35.000").unwrap();

    let result = SalaryWorksheet::new(&regime)
        .calculate(gross, MonthlyPayments::Thirteen)
        .unwrap();
    let text = render_text(&result, &regime, true);

    assert_eq!(format_input_value("35000"), "35.000");
    assert_eq!(result.gross_salary, dec!(35000));
    assert!(text.contains("RAL lorda"));
    assert!(text.contains("(13 mensilit\u{e0})"));
    assert!(text.contains("Residente a Milano (Lombardia)"));
}

#[test]
fn test_breakdown_reconciles_to_net_salary() {
    let regime = TaxRegime::milan_2026();

    for gross in [dec!(8000), dec!(15000), dec!(30000), dec!(45000), dec!(100000)] {
        let result = SalaryWorksheet::new(&regime)
            .calculate(gross, MonthlyPayments::Twelve)
            .unwrap();
        let rows = breakdown_rows(&result, &regime);

        // Gross plus every withholding and credit row, excluding the
        // subtotal rows, lands on the net salary.
        let skip = ["Imponibile IRPEF", "IRPEF lorda", "Detrazioni", "Ulteriore"];
        let reconciled: Decimal = rows
            .iter()
            .filter(|r| !skip.iter().any(|s| r.label.starts_with(s)))
            .filter(|r| r.label != "Netto annuale")
            .map(|r| r.amount)
            .sum();

        assert_eq!(reconciled, result.net_annual_salary, "gross {gross}");
    }
}

#[test]
fn test_custom_regime_changes_report_labels() {
    let text = MILANO_2026.replace("rate = \"0.008\"", "rate = \"0.009\"");
    let regime = RegimeLoader::parse(text.as_bytes()).unwrap();

    let result = SalaryWorksheet::new(&regime)
        .calculate(dec!(30000), MonthlyPayments::Twelve)
        .unwrap();
    let rows = breakdown_rows(&result, &regime);

    assert!(rows.iter().any(|r| r.label == "Add. comunale (Milano, 0,90%)"));
    assert_eq!(result.municipal_surtax, dec!(245.187));
}

#[test]
fn test_json_report_parses_back_into_result() {
    let regime = TaxRegime::milan_2026();
    let result = SalaryWorksheet::new(&regime)
        .calculate(dec!(30000), MonthlyPayments::Fourteen)
        .unwrap();

    let json = render_json(&result, &regime).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let parsed: ral_core::CalculationResult =
        serde_json::from_value(value["result"].clone()).unwrap();

    assert_eq!(parsed, result);
}
