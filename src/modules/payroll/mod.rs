pub mod models;
pub mod services;

pub use models::{
    default_earning_rules, BaselineSource, DeductionsBreakdown, EarningComponent, EarningRule,
    EarningsBreakdown, ProrationContext, SalaryBasis,
};
pub use services::ProrationEngine;
