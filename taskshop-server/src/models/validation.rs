//! Validation error types and shared field checks

use thiserror::Error;

/// Validation error for domain inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Required field absent from the request body
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric field below zero
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// Value doesn't match the required format
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

/// Unwrap a required request field.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

/// Check a required text field. The value is kept exactly as sent;
/// whitespace is ignored only for the emptiness and length checks.
pub(crate) fn text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_owned())
}
