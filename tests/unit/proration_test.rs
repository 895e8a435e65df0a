// Property-based tests for the proration engine.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use findoc::payroll::{ProrationContext, ProrationEngine};
use findoc::{AppError, Money};

fn context(payable: i64, month: u32, year: i32) -> ProrationContext {
    ProrationContext::new(payable, month, year, Money::from(10_000)).unwrap()
}

proptest! {
    #[test]
    fn full_month_is_identity_scale(
        baseline in 0u64..10_000_000u64,
        ratio_hundredths in 0u32..300u32,
        month in 1u32..=12u32,
        year in 2000i32..2100i32
    ) {
        let ratio = Decimal::new(ratio_hundredths as i64, 2);
        let total = findoc::core::calendar::days_in_month(year, month).unwrap();
        let ctx = context(total as i64, month, year);

        let result = ProrationEngine::prorate(Money::from(baseline), ratio, &ctx).unwrap();
        let expected = (Decimal::from(baseline) * ratio)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        prop_assert_eq!(result.value(), expected);
    }

    #[test]
    fn zero_payable_days_always_zero(
        baseline in 0u64..10_000_000u64,
        month in 1u32..=12u32,
        year in 2000i32..2100i32
    ) {
        let ctx = context(0, month, year);
        let result = ProrationEngine::prorate(Money::from(baseline), Decimal::ONE, &ctx).unwrap();
        prop_assert_eq!(result, Money::ZERO);
    }

    #[test]
    fn prorated_never_exceeds_full_month(
        baseline in 0u64..10_000_000u64,
        payable in 0u32..=28u32,
        month in 1u32..=12u32,
        year in 2000i32..2100i32
    ) {
        let ctx = context(payable as i64, month, year);
        let result = ProrationEngine::prorate(Money::from(baseline), Decimal::ONE, &ctx).unwrap();
        prop_assert!(result.value() <= Decimal::from(baseline));
    }
}

#[test]
fn leap_year_february() {
    assert_eq!(findoc::core::calendar::days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(findoc::core::calendar::days_in_month(2025, 2).unwrap(), 28);
}

#[test]
fn payable_days_cannot_exceed_month_length() {
    let err = ProrationContext::new(30, 2, 2025, Money::from(10_000)).unwrap_err();
    assert!(matches!(err, AppError::InvalidProrationContext(_)));
}

#[test]
fn negative_payable_days_clamp_to_zero() {
    let ctx = ProrationContext::new(-3, 6, 2025, Money::from(10_000)).unwrap();
    assert_eq!(ctx.payable_days, 0);

    let result = ProrationEngine::prorate(Money::from(8_000), Decimal::ONE, &ctx).unwrap();
    assert_eq!(result, Money::ZERO);
}

#[test]
fn half_month_prorates_exactly() {
    // June has 30 days: 15/30 halves the baseline
    let ctx = context(15, 6, 2025);
    let result = ProrationEngine::prorate(Money::from(9_000), Decimal::ONE, &ctx).unwrap();
    assert_eq!(result, Money::from(4_500));
}
