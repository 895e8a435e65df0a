// Property-based tests for tax line computation.
//
// Each line is a separately stated, independently rounded amount; the grand
// total adds the rounded lines, never the raw products.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use findoc::taxes::{TaxCalculator, TaxSpec};
use findoc::AppError;

proptest! {
    #[test]
    fn tax_application_is_deterministic(
        base_cents in 0u64..1_000_000_000u64,
        percent in 0u32..=100u32
    ) {
        let base = Decimal::new(base_cents as i64, 2);
        let spec = TaxSpec::single("GST", Decimal::from(percent)).unwrap();
        let calculator = TaxCalculator::new();

        let first = calculator.apply(base, &spec).unwrap();
        let second = calculator.apply(base, &spec).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn symmetric_split_lines_are_equal_and_total_exact(
        base_cents in 0u64..1_000_000_000u64,
        nominal in 0u32..=100u32
    ) {
        let base = Decimal::new(base_cents as i64, 2);
        let spec = TaxSpec::symmetric_split("CGST", "SGST", Decimal::from(nominal)).unwrap();
        let breakdown = TaxCalculator::new().apply(base, &spec).unwrap();

        prop_assert_eq!(breakdown.lines.len(), 2);
        prop_assert_eq!(breakdown.lines[0].amount, breakdown.lines[1].amount);

        let half = Decimal::from(nominal) / Decimal::TWO;
        let expected_line = (base * half / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(breakdown.lines[0].amount.value(), expected_line);

        // total is base plus the two rounded lines, with no residue
        let expected_total = base + expected_line + expected_line;
        prop_assert_eq!(breakdown.total.value(), expected_total);
    }

    #[test]
    fn total_never_below_base(
        base_cents in 0u64..1_000_000_000u64,
        percent in 0u32..=100u32
    ) {
        let base = Decimal::new(base_cents as i64, 2);
        let spec = TaxSpec::single("GST", Decimal::from(percent)).unwrap();
        let breakdown = TaxCalculator::new().apply(base, &spec).unwrap();

        prop_assert!(breakdown.total.value() >= base);
    }
}

#[test]
fn eighteen_percent_split_on_7626() {
    let spec = TaxSpec::symmetric_split("CGST", "SGST", Decimal::from(18)).unwrap();
    let breakdown = TaxCalculator::new()
        .apply(Decimal::from(7626), &spec)
        .unwrap();

    assert_eq!(breakdown.lines[0].label, "CGST");
    assert_eq!(breakdown.lines[0].amount.value(), Decimal::new(68634, 2));
    assert_eq!(breakdown.lines[1].amount.value(), Decimal::new(68634, 2));
    assert_eq!(breakdown.total.value(), Decimal::new(899868, 2));
}

#[test]
fn out_of_range_percent_rejected() {
    assert!(matches!(
        TaxSpec::single("GST", Decimal::from(101)).unwrap_err(),
        AppError::InvalidTaxSpec(_)
    ));
    assert!(matches!(
        TaxSpec::single("GST", Decimal::from(-1)).unwrap_err(),
        AppError::InvalidTaxSpec(_)
    ));
}

#[test]
fn negative_base_rejected() {
    let spec = TaxSpec::single("GST", Decimal::from(18)).unwrap();
    let err = TaxCalculator::new()
        .apply(Decimal::from(-100), &spec)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTaxSpec(_)));
}
