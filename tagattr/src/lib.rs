//! # tagattr
//!
//! Generates Kotlin attribute accessors for DOM element types.
//!
//! The input is a listing of external declarations, such as the Kotlin/JS
//! DOM bindings. Every type that descends from a root marker (by default
//! `HTMLElement`) gets a section of `Tag<T>` extension functions, one pair
//! per own or inherited attribute.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tagattr::prelude::*;
//!
//! let generator = Generator::builder()
//!     .root_type("HTMLElement")
//!     .special_attribute("HTMLSelectElement", "value")
//!     .build();
//!
//! let kotlin = generator.generate(&std::fs::read_to_string("dom.kt")?)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Declaration extraction and hierarchy resolution
//! - [`codegen`] - Kotlin accessor generation

pub mod cli;
pub mod prelude;

/// Declaration extraction and hierarchy resolution.
pub mod schema {
    pub use tagattr_schema::*;
}

/// Kotlin accessor generation.
pub mod codegen {
    pub use tagattr_codegen::*;
}

// Re-export commonly used items at the crate root
pub use tagattr_codegen::{
    CodegenError, Generator, GeneratorBuilder, generate_from_file, generate_from_str,
};
pub use tagattr_schema::{SchemaConfig, SchemaError, resolve};
