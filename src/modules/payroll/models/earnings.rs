// Earnings and deductions breakdowns for one payslip.
//
// An earnings breakdown is fully derived: every component is recomputed in
// lockstep whenever the base salary, payable days or month changes. The
// deductions breakdown carries independent inputs with no proration coupling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Money;

/// Reference monthly base used when no usable base salary is on record
const DEFAULT_REFERENCE_BASE: u64 = 10_000;

/// Where a payslip's reference base salary comes from.
///
/// A zero, unset or non-positive base salary is an explicit named state, not
/// a silent zero flowing through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBasis {
    /// The subject's actual monthly base salary
    Actual(Money),
    /// Fall back to the documented default earnings table
    DefaultTable,
}

impl SalaryBasis {
    /// Classify raw form input. Anything non-positive falls back to the
    /// default table.
    pub fn from_base_salary(base_salary: Option<Decimal>) -> Self {
        match base_salary {
            Some(value) if value > Decimal::ZERO => {
                // value > 0, so the constructor cannot fail
                match Money::new(value) {
                    Ok(money) => SalaryBasis::Actual(money),
                    Err(_) => SalaryBasis::DefaultTable,
                }
            }
            other => {
                warn!(
                    base_salary = ?other,
                    "no usable base salary, using default earnings table"
                );
                SalaryBasis::DefaultTable
            }
        }
    }

    /// The monthly base that ratio-scaled components are computed against
    pub fn reference_base(&self) -> Money {
        match self {
            SalaryBasis::Actual(money) => *money,
            SalaryBasis::DefaultTable => Money::from(DEFAULT_REFERENCE_BASE),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SalaryBasis::DefaultTable)
    }
}

/// Where an earning rule's monthly baseline comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaselineSource {
    /// The context's reference base salary ("Basic" always uses this)
    ReferenceBase,
    /// A fixed monthly figure independent of the base salary
    Fixed(Money),
}

/// One named earning component and how its monthly baseline scales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningRule {
    pub name: String,
    pub baseline: BaselineSource,
    pub ratio: Decimal,
}

impl EarningRule {
    /// A component scaled off the reference base salary
    pub fn of_base(name: &str, ratio: Decimal) -> Self {
        Self {
            name: name.to_string(),
            baseline: BaselineSource::ReferenceBase,
            ratio,
        }
    }

    /// A component with a fixed monthly baseline
    pub fn fixed(name: &str, monthly: Money) -> Self {
        Self {
            name: name.to_string(),
            baseline: BaselineSource::Fixed(monthly),
            ratio: Decimal::ONE,
        }
    }

    /// Resolve the monthly baseline against a reference base
    pub fn baseline_for(&self, reference_base: Money) -> Money {
        match self.baseline {
            BaselineSource::ReferenceBase => reference_base,
            BaselineSource::Fixed(monthly) => monthly,
        }
    }
}

/// The documented default earnings table.
///
/// "Basic" is always the reference base at ratio 1; the allowances carry
/// fixed monthly baselines.
pub fn default_earning_rules() -> Vec<EarningRule> {
    vec![
        EarningRule::of_base("Basic", Decimal::ONE),
        EarningRule::fixed("House Rent Allowance", Money::from(5_000)),
        EarningRule::fixed("Conveyance Allowance", Money::from(1_600)),
        EarningRule::fixed("Medical Allowance", Money::from(1_250)),
        EarningRule::fixed("Special Allowance", Money::from(2_000)),
    ]
}

/// One computed earning line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningComponent {
    pub name: String,
    pub amount: Money,
}

/// Ordered, fully derived earning components for one payslip period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    components: Vec<EarningComponent>,
}

impl EarningsBreakdown {
    pub fn new(components: Vec<EarningComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[EarningComponent] {
        &self.components
    }

    pub fn amount_of(&self, name: &str) -> Option<Money> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.amount)
    }

    /// Sum of the already-rounded component line amounts
    pub fn gross(&self) -> Money {
        self.components.iter().map(|c| c.amount).sum()
    }
}

/// Ordered deduction entries; values are independent inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeductionsBreakdown {
    entries: Vec<(String, Money)>,
}

impl DeductionsBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a deduction, preserving entry order
    pub fn set(&mut self, name: &str, amount: Money) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = amount,
            None => self.entries.push((name.to_string(), amount)),
        }
    }

    pub fn entries(&self) -> &[(String, Money)] {
        &self.entries
    }

    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }
}
