use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::calendar::days_in_month;
use crate::core::{AppError, Money, Result};

/// Day-count scaling context for one payslip period.
///
/// `total_days` is always the true calendar length of the stated month, never
/// an assumed 30 or 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationContext {
    pub payable_days: u32,
    pub total_days: u32,
    /// The monthly base the ratio-scaled components are relative to
    pub reference_base: Money,
}

impl ProrationContext {
    /// Build a context from raw form input.
    ///
    /// Negative payable day counts are clamped to zero here, at the input
    /// boundary. Payable days exceeding the calendar month length are a
    /// caller error, not something to silently cap.
    pub fn new(
        payable_days: i64,
        month: u32,
        year: i32,
        reference_base: Money,
    ) -> Result<Self> {
        let total_days = days_in_month(year, month)?;

        if payable_days < 0 {
            warn!(payable_days, "negative payable days clamped to zero");
        }
        let payable_days = payable_days.max(0) as u32;

        if payable_days > total_days {
            return Err(AppError::invalid_proration(format!(
                "payable days ({}) exceed days in {}/{} ({})",
                payable_days, month, year, total_days
            )));
        }

        Ok(Self {
            payable_days,
            total_days,
            reference_base,
        })
    }

    /// A full-month context scales by exactly 1
    pub fn is_full_month(&self) -> bool {
        self.payable_days == self.total_days
    }
}
