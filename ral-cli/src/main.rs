use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;

use ral_cli::config::RegimeLoader;
use ral_cli::input::{format_input_value, parse_gross_salary};
use ral_cli::logging::init_tracing;
use ral_cli::report::{render_json, render_text};
use ral_core::{MonthlyPayments, SalaryWorksheet};

// ─── CLI definition ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Net salary calculator for employees resident in Milan.
///
/// Takes the gross annual salary (RAL) and prints the net annual and
/// monthly pay with the full withholding breakdown.
#[derive(Debug, Parser)]
#[command(name = "ral", version)]
struct Cli {
    /// Gross annual salary in euros. Separators are ignored (`35.000`).
    #[arg(required_unless_present = "print_regime")]
    ral: Option<String>,

    /// Number of monthly payments per year (12, 13 or 14).
    #[arg(long, default_value = "13")]
    payments: MonthlyPayments,

    /// TOML file with an alternative tax regime.
    #[arg(long)]
    regime: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Omit the list of assumptions from the text report.
    #[arg(long)]
    no_assumptions: bool,

    /// Print the selected tax regime as TOML and exit.
    #[arg(long)]
    print_regime: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let regime = RegimeLoader::resolve(cli.regime.as_deref()).with_context(|| match &cli.regime {
        Some(path) => format!("failed to load tax regime from {}", path.display()),
        None => "failed to load the built-in tax regime".to_string(),
    })?;

    if cli.print_regime {
        print!("{}", RegimeLoader::to_toml(&regime)?);
        return Ok(());
    }

    let ral = cli.ral.as_deref().unwrap_or_default();
    let gross = parse_gross_salary(ral)?;
    debug!(ral = %format_input_value(ral), payments = %cli.payments, "computing net salary");
    let result = SalaryWorksheet::new(&regime)
        .calculate(gross, cli.payments)
        .context("salary calculation failed")?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&result, &regime, !cli.no_assumptions)),
        OutputFormat::Json => println!("{}", render_json(&result, &regime)?),
    }

    Ok(())
}
