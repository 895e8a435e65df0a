pub mod models;
pub mod services;

pub use models::{TaxBreakdown, TaxLineAmount, TaxRate, TaxSpec};
pub use services::TaxCalculator;
