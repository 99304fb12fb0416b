//! # tagattr Codegen
//!
//! Kotlin attribute accessor generation from DOM declaration listings.
//!
//! This crate provides:
//! - Accessor pair generation per attribute kind (plain, boolean, banner)
//! - Special DOM property binding for an allow-list of attributes
//! - Per-tag sections under a fixed header banner
//! - File and string entry points

pub mod error;
pub mod generator;
pub mod kotlin;

pub use error::CodegenError;
pub use generator::{Generator, GeneratorBuilder};
pub use kotlin::{AccessorShape, ShapePolicy};

/// Generates Kotlin accessors from a declaration listing string.
///
/// # Arguments
/// * `input` - Declaration listing content
///
/// # Returns
/// Generated Kotlin code as a string.
///
/// # Errors
/// Returns `CodegenError` if extraction or resolution fails.
pub fn generate_from_str(input: &str) -> Result<String, CodegenError> {
    Generator::new().generate(input)
}

/// Generates Kotlin accessors from a declaration listing file.
///
/// # Arguments
/// * `path` - Path to the declaration listing
///
/// # Returns
/// Generated Kotlin code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, extraction, or resolution fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let input = std::fs::read_to_string(path)?;
    generate_from_str(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LISTING: &str = "public external interface HTMLElement {\n    var lang: String\n}\n";

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(LISTING.as_bytes()).expect("Failed to write");

        let output = generate_from_file(file.path()).expect("Failed to generate");
        assert_eq!(output, generate_from_str(LISTING).expect("Failed to generate"));
        assert!(output.contains("fun Tag<HTMLElement>.lang(value: String)"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = generate_from_file(&dir.path().join("missing.kt"));
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }

    #[test]
    fn test_unterminated_block_is_fatal() {
        let result = generate_from_str("public external interface HTMLElement {\n    var lang: String\n");
        assert!(matches!(
            result,
            Err(CodegenError::Schema(tagattr_schema::SchemaError::Parse(_)))
        ));
    }

    #[test]
    fn test_trailing_opener_without_brace_is_fatal() {
        let input = format!("{LISTING}public external interface Trailing : HTMLElement\n");
        let result = generate_from_str(&input);
        assert!(matches!(
            result,
            Err(CodegenError::Schema(tagattr_schema::SchemaError::Parse(
                tagattr_schema::ParseError::UnterminatedBlock { line: 4, .. }
            )))
        ));
    }
}
