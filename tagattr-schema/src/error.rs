//! Error types for declaration extraction and hierarchy resolution.

use thiserror::Error;

/// Error type for declaration extraction.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A declaration block was opened but never closed.
    #[error("declaration block for '{type_name}' opened at line {line} is never closed")]
    UnterminatedBlock {
        /// Name of the declared type.
        type_name: String,
        /// 1-based line number of the opener.
        line: usize,
    },

    /// An opener line without a `class`/`interface` name token.
    #[error("missing type name on declaration opener at line {line}: '{text}'")]
    MissingTypeName {
        /// 1-based line number of the opener.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for hierarchy resolution.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Type not found in the pruned registry.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Type name.
        name: String,
    },

    /// Parent edges form a cycle the ancestor walk cannot leave.
    #[error("circular inheritance detected: {path}")]
    CircularReference {
        /// Path of the cycle, joined by " -> ".
        path: String,
    },
}

impl ParseError {
    /// Creates an unterminated block error.
    pub fn unterminated(type_name: impl Into<String>, line: usize) -> Self {
        Self::UnterminatedBlock {
            type_name: type_name.into(),
            line,
        }
    }

    /// Creates a missing type name error.
    pub fn missing_name(line: usize, text: impl Into<String>) -> Self {
        Self::MissingTypeName {
            line,
            text: text.into(),
        }
    }
}

impl SchemaError {
    /// Creates a type not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Creates a circular reference error from the names along the cycle.
    pub fn circular<S: AsRef<str>>(path: &[S]) -> Self {
        let path = path
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CircularReference { path }
    }
}
