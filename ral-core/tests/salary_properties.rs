//! Property tests for the salary worksheet and the progressive bracket engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ral_core::calculations::apply_brackets;
use ral_core::{BracketTable, MonthlyPayments, TaxBracket, TaxRegime, compute_salary};

/// Taxable-income points where the net salary may legitimately drop: the
/// municipal exemption threshold and the low-income bonus tier bounds.
const CLIFFS: [Decimal; 4] = [dec!(8500), dec!(15000), dec!(20000), dec!(23000)];

fn payments() -> impl Strategy<Value = MonthlyPayments> {
    prop::sample::select(MonthlyPayments::ALL.to_vec())
}

/// Tables of 1 to 5 bounded bands (width in euros, rate in tenths of a
/// percent) followed by an unbounded band.
fn bracket_table() -> impl Strategy<Value = BracketTable> {
    (
        prop::collection::vec((1u32..50_000, 0u32..=1000), 0..5),
        0u32..=1000,
    )
        .prop_map(|(bands, top_rate)| {
            let mut bound = Decimal::ZERO;
            let mut brackets: Vec<TaxBracket> = bands
                .into_iter()
                .map(|(width, rate)| {
                    bound += Decimal::from(width);
                    TaxBracket::bounded(bound, Decimal::new(i64::from(rate), 3))
                })
                .collect();
            brackets.push(TaxBracket::unbounded(Decimal::new(i64::from(top_rate), 3)));
            BracketTable::new(brackets).unwrap()
        })
}

proptest! {
    #[test]
    fn bracket_details_account_for_every_unit(
        table in bracket_table(),
        cents in 0u64..50_000_000,
    ) {
        let amount = Decimal::new(cents as i64, 2);

        let tax = apply_brackets(amount, &table);

        let tax_sum: Decimal = tax.details.iter().map(|d| d.tax).sum();
        let amount_sum: Decimal = tax.details.iter().map(|d| d.taxable_amount).sum();
        prop_assert_eq!(tax_sum, tax.total);
        prop_assert_eq!(amount_sum, amount);
        prop_assert!(tax.details.iter().all(|d| d.taxable_amount > Decimal::ZERO));
    }

    #[test]
    fn bracket_details_are_contiguous(
        table in bracket_table(),
        amount in 0u32..500_000,
    ) {
        let tax = apply_brackets(Decimal::from(amount), &table);

        let mut expected_lower = Decimal::ZERO;
        for detail in &tax.details {
            prop_assert_eq!(detail.lower_bound, expected_lower);
            if let Some(upper) = detail.upper_bound {
                expected_lower = upper;
            }
        }
    }

    #[test]
    fn monthly_salary_times_payments_is_annual(
        gross in 0u32..500_000,
        payments in payments(),
    ) {
        let result = compute_salary(Decimal::from(gross), payments).unwrap();

        let rebuilt = result.net_monthly_salary * payments.as_decimal();
        prop_assert!((rebuilt - result.net_annual_salary).abs() < dec!(0.000001));
    }

    #[test]
    fn identical_inputs_give_identical_results(
        gross in 0u32..500_000,
        payments in payments(),
    ) {
        let first = compute_salary(Decimal::from(gross), payments).unwrap();
        let second = compute_salary(Decimal::from(gross), payments).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn raise_never_lowers_net_outside_cliffs(
        gross in 1u32..200_000,
        raise in 1u32..5_000,
    ) {
        let low = compute_salary(Decimal::from(gross), MonthlyPayments::Twelve).unwrap();
        let high = compute_salary(Decimal::from(gross + raise), MonthlyPayments::Twelve).unwrap();

        prop_assume!(!CLIFFS
            .iter()
            .any(|cliff| low.taxable_income <= *cliff && *cliff < high.taxable_income));

        prop_assert!(high.net_annual_salary >= low.net_annual_salary);
        prop_assert!(high.net_annual_salary - low.net_annual_salary <= Decimal::from(raise));
    }

    #[test]
    fn net_income_tax_is_never_negative(gross in 0u32..200_000) {
        let result = compute_salary(Decimal::from(gross), MonthlyPayments::default()).unwrap();

        prop_assert!(result.net_income_tax >= Decimal::ZERO);
        prop_assert!(result.net_income_tax <= result.gross_income_tax);
    }
}

#[test]
fn builtin_regime_tables_satisfy_partition_invariant() {
    let regime = TaxRegime::milan_2026();

    for table in [&regime.income_tax_brackets, &regime.regional_surtax_brackets] {
        assert!(table.validate().is_ok());
        assert!(table.brackets().last().unwrap().upper_bound.is_none());
    }
}
