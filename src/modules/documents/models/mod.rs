pub mod document;
pub mod graph;

pub use document::{
    ComputedDocument, FieldPath, FieldValue, InvoiceDocument, PayslipDocument, Period,
};
