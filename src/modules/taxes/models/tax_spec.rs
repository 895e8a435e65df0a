use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Money, Result};

/// One named percentage line, e.g. ("CGST", 9)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub label: String,
    /// Percentage of the base amount, 0..=100
    pub percent: Decimal,
}

impl TaxRate {
    pub fn new(label: &str, percent: Decimal) -> Result<Self> {
        validate_percent(percent)?;
        Ok(Self {
            label: label.to_string(),
            percent,
        })
    }
}

/// Validated set of tax lines applied to one base amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSpec {
    lines: Vec<TaxRate>,
}

impl TaxSpec {
    pub fn new(lines: Vec<TaxRate>) -> Result<Self> {
        for line in &lines {
            validate_percent(line.percent)?;
        }
        Ok(Self { lines })
    }

    /// A simple single-percentage scheme
    pub fn single(label: &str, percent: Decimal) -> Result<Self> {
        Ok(Self {
            lines: vec![TaxRate::new(label, percent)?],
        })
    }

    /// Two equal lines summing to one nominal rate, e.g. CGST/SGST at 9%
    /// each from a nominal 18%
    pub fn symmetric_split(label_a: &str, label_b: &str, nominal_percent: Decimal) -> Result<Self> {
        validate_percent(nominal_percent)?;
        let half = nominal_percent / Decimal::TWO;
        Ok(Self {
            lines: vec![TaxRate::new(label_a, half)?, TaxRate::new(label_b, half)?],
        })
    }

    pub fn lines(&self) -> &[TaxRate] {
        &self.lines
    }
}

fn validate_percent(percent: Decimal) -> Result<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(AppError::invalid_tax_spec(format!(
            "tax percentage must be between 0 and 100, got: {}",
            percent
        )));
    }
    Ok(())
}

/// One computed and separately rounded tax line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLineAmount {
    pub label: String,
    pub amount: Money,
}

/// Result of applying a [`TaxSpec`] to a base amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub lines: Vec<TaxLineAmount>,
    /// Base plus the sum of the already-rounded line amounts
    pub total: Money,
}
