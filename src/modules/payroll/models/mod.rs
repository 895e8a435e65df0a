pub mod earnings;
pub mod proration_context;

pub use earnings::{
    default_earning_rules, BaselineSource, DeductionsBreakdown, EarningComponent, EarningRule,
    EarningsBreakdown, SalaryBasis,
};
pub use proration_context::ProrationContext;
