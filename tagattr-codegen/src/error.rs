//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Listing extraction error.
    #[error("listing parse error: {0}")]
    Parse(#[from] tagattr_schema::ParseError),

    /// Hierarchy resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] tagattr_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed special attribute entry.
    #[error("invalid special attribute '{value}', expected 'Type.attribute'")]
    InvalidSpecialAttribute {
        /// The rejected entry.
        value: String,
    },
}

impl CodegenError {
    /// Creates an invalid special attribute error.
    pub fn invalid_special(value: impl Into<String>) -> Self {
        Self::InvalidSpecialAttribute {
            value: value.into(),
        }
    }
}
