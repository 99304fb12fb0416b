//! # tagattr Schema
//!
//! Declaration listing extraction and tag hierarchy resolution.
//!
//! This crate provides:
//! - Line-level extraction of external class/interface declarations
//! - Attribute name and type normalization
//! - A name-keyed tag registry and its pruned, index-based form
//! - Root-descendant classification and inherited attribute closure
//! - Intermediate representation for code generation

pub mod config;
pub mod error;
pub mod ir;
pub mod normalize;
pub mod parser;
pub mod patterns;
pub mod registry;
pub mod types;
pub mod validation;

pub use config::{OpenerPolicy, SchemaConfig};
pub use error::{ParseError, SchemaError};
pub use ir::{ResolvedTag, TagIr};
pub use parser::{extract, parse_listing};
pub use registry::{PrunedRegistry, PrunedTag, TagId, TagRegistry};
pub use types::{Attribute, AttributeKind, RawTag};

/// Extracts and resolves a listing in one step.
///
/// # Arguments
/// * `input` - Declaration listing content
/// * `config` - Root marker and opener settings
///
/// # Returns
/// The qualifying tags with their full attribute lists.
///
/// # Errors
/// Returns `SchemaError` if extraction fails or the hierarchy is cyclic.
pub fn resolve(input: &str, config: &SchemaConfig) -> Result<Vec<ResolvedTag>, SchemaError> {
    Ok(TagIr::from_listing(input, config)?.tags)
}
