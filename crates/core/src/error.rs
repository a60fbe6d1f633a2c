//! Validation error model.

use thiserror::Error;

/// Result type used across the validation layer.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Request validation failure.
///
/// The `Display` text is the client-facing message and must stay stable:
/// HTTP callers match on it. Extra context (which item, which field) is kept
/// in the variant for logs only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A top-level invoice field was absent, falsy or of the wrong shape.
    #[error("Missing or invalid required fields")]
    MissingFields {
        /// Name of the first offending field.
        field: &'static str,
    },

    /// A line item failed validation.
    #[error("Invalid item data: ensure all fields are correct")]
    InvalidItem {
        /// Zero-based position of the item in the request.
        index: usize,
        /// Name of the offending item field.
        field: &'static str,
    },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingFields { field }
    }

    pub fn invalid_item(index: usize, field: &'static str) -> Self {
        Self::InvalidItem { index, field }
    }

    /// Field name for structured logging.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingFields { field } | Self::InvalidItem { field, .. } => field,
        }
    }
}
