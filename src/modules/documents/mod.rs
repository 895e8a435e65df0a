pub mod models;
pub mod services;

pub use models::{
    ComputedDocument, FieldPath, FieldValue, InvoiceDocument, PayslipDocument, Period,
};
pub use services::RecalculationCoordinator;
