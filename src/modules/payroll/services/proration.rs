use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::core::{AppError, Money, Result};
use crate::modules::payroll::models::{
    EarningComponent, EarningRule, EarningsBreakdown, ProrationContext, SalaryBasis,
};

/// Scales monthly-baseline amounts down to a partial pay period.
///
/// Pure and stateless; safe to call from any number of threads.
pub struct ProrationEngine;

impl ProrationEngine {
    /// Prorate one monthly baseline.
    ///
    /// Formula: `baseline * ratio * payable_days / total_days`, kept exact
    /// until a single round to two decimals (half-up) at the end. This value
    /// is a displayed line item, which is the one point where rounding is
    /// allowed to happen.
    pub fn prorate(baseline: Money, ratio: Decimal, ctx: &ProrationContext) -> Result<Money> {
        if ratio < Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "component ratio cannot be negative, got: {}",
                ratio
            )));
        }

        let scaled = baseline.value() * ratio * Decimal::from(ctx.payable_days)
            / Decimal::from(ctx.total_days);

        Money::new(scaled.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Compute the full earnings breakdown for a period.
    ///
    /// Every rule is evaluated against the same context, so the whole table
    /// moves in lockstep when the base salary, payable days or month changes.
    pub fn compute_earnings(
        basis: &SalaryBasis,
        ctx: &ProrationContext,
        rules: &[EarningRule],
    ) -> Result<EarningsBreakdown> {
        let reference_base = basis.reference_base();

        let mut components = Vec::with_capacity(rules.len());
        for rule in rules {
            let amount = Self::prorate(rule.baseline_for(reference_base), rule.ratio, ctx)?;
            components.push(EarningComponent {
                name: rule.name.clone(),
                amount,
            });
        }

        let breakdown = EarningsBreakdown::new(components);
        info!(
            components = breakdown.components().len(),
            payable_days = ctx.payable_days,
            total_days = ctx.total_days,
            gross = %breakdown.gross(),
            "computed earnings breakdown"
        );

        Ok(breakdown)
    }
}
