//! Kotlin code generation modules.

pub mod accessors;
pub mod shape;

pub use accessors::AccessorGenerator;
pub use shape::{AccessorShape, SPECIAL_DOM_ATTRIBUTES, ShapePolicy};
