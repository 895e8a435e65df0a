//! Findoc Financial Document Computation Engine
//!
//! This library provides the deterministic numeric core shared by payslip,
//! tax-invoice and reference-letter generation: proration of monthly
//! components, tax line computation, amount-in-words rendering using the
//! Indian numbering system, and monotonic reference-number issuance.
//!
//! The crate performs no I/O. Rendering, persistence and form handling are
//! external collaborators that consume the fully computed documents returned
//! by [`modules::documents::RecalculationCoordinator`].

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Money, Result};
pub use modules::documents;
pub use modules::payroll;
pub use modules::sequences;
pub use modules::taxes;
pub use modules::words;
