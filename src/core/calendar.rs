use chrono::NaiveDate;

use crate::core::error::{AppError, Result};

/// True calendar length of a month (28/29/30/31), leap-year aware
///
/// Proration must never assume a 30- or 31-day month; February 2024 has 29
/// days and February 2025 has 28.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        AppError::invalid_proration(format!("invalid month {}/{}", month, year))
    })?;

    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::invalid_proration(format!("invalid month {}/{}", month, year)))?;

    Ok(next_first.signed_duration_since(first).num_days() as u32)
}
