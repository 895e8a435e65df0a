pub mod tax_spec;

pub use tax_spec::{TaxBreakdown, TaxLineAmount, TaxRate, TaxSpec};
