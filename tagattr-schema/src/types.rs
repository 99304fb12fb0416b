//! Tag and attribute definitions.
//!
//! This module contains the data structures produced by the extractor:
//! attributes with their emission kind, and raw tag records as they appear
//! in the declaration listing.

use crate::normalize;

/// Attribute name that is never carried into the model.
pub const CLASS_NAME_ATTRIBUTE: &str = "className";

/// Source type reported for boolean attributes.
pub const BOOLEAN_TYPE: &str = "Boolean";

/// Source type reported for inherited-attribute banners.
pub const COMMENT_TYPE: &str = "Comment";

/// Declared type of a string-valued attribute.
pub const STRING_TYPE: &str = "String";

/// Emission kind of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Any declared type other than `Boolean`.
    Plain(String),
    /// Exactly `Boolean`.
    Boolean,
    /// Synthetic banner naming the ancestor that contributed the following attributes.
    Comment,
}

impl AttributeKind {
    /// Derives the kind from a normalized declared type.
    #[must_use]
    pub fn from_declared(type_name: &str) -> Self {
        if type_name == BOOLEAN_TYPE {
            Self::Boolean
        } else {
            Self::Plain(type_name.to_string())
        }
    }

    /// Returns the textual source type.
    #[must_use]
    pub fn source_type(&self) -> &str {
        match self {
            Self::Plain(t) => t,
            Self::Boolean => BOOLEAN_TYPE,
            Self::Comment => COMMENT_TYPE,
        }
    }
}

/// A single attribute of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Identifier used in generated code.
    pub name: String,
    /// Emission kind.
    pub kind: AttributeKind,
    /// Lower-cased markup name; empty for banners.
    pub display_name: String,
}

impl Attribute {
    /// Creates a normalized attribute from a matched `(name, type)` pair.
    #[must_use]
    pub fn from_declaration(raw_name: &str, raw_type: &str) -> Self {
        Self {
            name: normalize::attribute_name(raw_name),
            kind: AttributeKind::from_declared(&normalize::declared_type(raw_type)),
            display_name: normalize::display_name(raw_name),
        }
    }

    /// Creates the banner that precedes attributes inherited from `ancestor`.
    #[must_use]
    pub fn inherited_banner(ancestor: &str) -> Self {
        Self {
            name: format!("// inherited attributes from supertype {ancestor}"),
            kind: AttributeKind::Comment,
            display_name: String::new(),
        }
    }

    /// Returns the textual source type.
    #[must_use]
    pub fn source_type(&self) -> &str {
        self.kind.source_type()
    }

    /// Returns true for inherited-attribute banners.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.kind == AttributeKind::Comment
    }

    /// Returns the expression converting `value` to text for a DOM `setAttribute` call.
    #[must_use]
    pub fn value_as_string(&self) -> &'static str {
        if self.source_type() == STRING_TYPE {
            "value"
        } else {
            "value.toString()"
        }
    }
}

/// A tag record exactly as extracted from one declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    /// Declared type name.
    pub name: String,
    /// Own attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// Declared parent names, left to right, duplicates retained.
    pub parents: Vec<String>,
}

impl RawTag {
    /// Creates a new raw tag.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>, parents: Vec<String>) -> Self {
        Self {
            name: name.into(),
            attributes,
            parents,
        }
    }
}
