//! Validation error types

use std::fmt;

/// Client input that was rejected before reaching the database
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Request body is not valid JSON for the expected shape
    MalformedBody { reason: String },

    /// Value doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Patch body must carry exactly one key
    FieldCount { count: usize },

    /// Patch key is not one of the mutable member columns
    FieldNotAllowed { field: String },

    /// Patch value has the wrong JSON type for its column
    WrongType { field: &'static str, expected: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::FieldCount { count } => write!(
                f,
                "only one field can be updated at a time (got {})",
                count
            ),
            Self::FieldNotAllowed { field } => {
                write!(f, "field '{}' is not allowed to be updated", field)
            }
            Self::WrongType { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::FieldCount { count: 2 };
        assert_eq!(
            err.to_string(),
            "only one field can be updated at a time (got 2)"
        );

        let err = ValidationError::FieldNotAllowed { field: "id".into() };
        assert_eq!(err.to_string(), "field 'id' is not allowed to be updated");
    }
}
