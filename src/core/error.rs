/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// All variants are local validation failures raised synchronously at the
/// offending call. None are retriable: they indicate a caller bug or
/// malformed input, not a transient condition.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Monetary input that is negative or otherwise not a valid amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Proration context violating day-count or calendar constraints
    #[error("Invalid proration context: {0}")]
    InvalidProrationContext(String),

    /// Tax specification with a negative base or out-of-range percentage
    #[error("Invalid tax spec: {0}")]
    InvalidTaxSpec(String),

    /// Sequence namespace with no registered counter template
    #[error("Unknown sequence namespace: {0}")]
    UnknownSequenceNamespace(String),

    /// Attempt to write a field whose value is derived from other fields
    #[error("Field '{0}' is derived and cannot be written directly")]
    DerivedFieldWrite(String),

    /// Document id not known to the coordinator
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Field update carrying a value of the wrong shape for its path
    #[error("Invalid value for field: {0}")]
    InvalidFieldValue(String),

    /// Sequence format template without a numeric placeholder
    #[error("Invalid sequence template: {0}")]
    InvalidSequenceTemplate(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        AppError::InvalidAmount(msg.into())
    }

    pub fn invalid_proration(msg: impl Into<String>) -> Self {
        AppError::InvalidProrationContext(msg.into())
    }

    pub fn invalid_tax_spec(msg: impl Into<String>) -> Self {
        AppError::InvalidTaxSpec(msg.into())
    }

    pub fn derived_field(field: impl Into<String>) -> Self {
        AppError::DerivedFieldWrite(field.into())
    }

    pub fn document_not_found(id: impl Into<String>) -> Self {
        AppError::DocumentNotFound(id.into())
    }

    pub fn invalid_field_value(msg: impl Into<String>) -> Self {
        AppError::InvalidFieldValue(msg.into())
    }
}
