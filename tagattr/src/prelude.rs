//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use tagattr::prelude::*;
//! ```

// Schema types
pub use tagattr_schema::{
    Attribute, AttributeKind, OpenerPolicy, ParseError, PrunedRegistry, RawTag, ResolvedTag,
    SchemaConfig, SchemaError, TagIr, TagRegistry,
};

// Codegen types
pub use tagattr_codegen::{AccessorShape, CodegenError, Generator, GeneratorBuilder, ShapePolicy};
