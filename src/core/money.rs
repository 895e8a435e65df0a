use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::core::error::{AppError, Result};

/// A non-negative monetary amount in a single decimal currency unit with a
/// 1/100 subunit.
///
/// The inner value is an exact decimal; intermediate arithmetic never loses
/// precision. Rounding to two places (half-up) happens only where a value
/// becomes a separately displayed line item, via [`Money::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create a monetary amount, rejecting negative values
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "amount cannot be negative, got: {}",
                value
            )));
        }
        Ok(Money(value))
    }

    /// The exact inner value, unrounded
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The display value: two decimal places, round-half-up
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Split the display value into whole units and a 0..=99 subunit part,
    /// for the words converter
    pub fn split_units(&self) -> Result<(u64, u8)> {
        let rounded = self.rounded();
        let whole = rounded.trunc();
        let units = whole.to_u64().ok_or_else(|| {
            AppError::invalid_amount(format!("amount too large to split: {}", rounded))
        })?;
        let subunits = ((rounded - whole) * Decimal::from(100))
            .to_u32()
            .unwrap_or(0) as u8;
        Ok((units, subunits))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtraction flooring at zero; a breakdown can never go negative
    pub fn saturating_sub(&self, other: Money) -> Money {
        if other.0 >= self.0 {
            Money::ZERO
        } else {
            Money(self.0 - other.0)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Money(Decimal::from(value))
    }
}

impl TryFrom<Decimal> for Money {
    type Error = AppError;

    fn try_from(value: Decimal) -> Result<Self> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}
