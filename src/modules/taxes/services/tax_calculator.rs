use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Money, Result};
use crate::modules::taxes::models::{TaxBreakdown, TaxLineAmount, TaxSpec};

/// Applies a [`TaxSpec`] to a base amount.
///
/// Each line is rounded to two decimals (half-up) on its own, and the grand
/// total is the base plus those already-rounded lines. Real invoices state
/// every tax line as a separately rounded figure, so rounding once at the end
/// would not reproduce what gets filed.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, base: Decimal, spec: &TaxSpec) -> Result<TaxBreakdown> {
        if base < Decimal::ZERO {
            return Err(AppError::invalid_tax_spec(format!(
                "tax base cannot be negative, got: {}",
                base
            )));
        }

        let mut lines = Vec::with_capacity(spec.lines().len());
        let mut total = base;

        for rate in spec.lines() {
            let amount = (base * rate.percent / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            total += amount;
            lines.push(TaxLineAmount {
                label: rate.label.clone(),
                amount: Money::new(amount)?,
            });
        }

        Ok(TaxBreakdown {
            lines,
            total: Money::new(total)?,
        })
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
