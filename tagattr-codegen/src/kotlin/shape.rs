//! Accessor shape selection.
//!
//! Most attributes are written through the generic `attr(...)` helper. A few
//! DOM properties diverge from their markup attribute once the user has
//! interacted with the element, so they are assigned on the live node instead.

use crate::error::CodegenError;
use std::collections::HashSet;

/// Built-in `(tag, attribute)` pairs that need direct DOM property access.
pub const SPECIAL_DOM_ATTRIBUTES: &[(&str, &str)] = &[
    ("HTMLInputElement", "checked"),
    ("HTMLInputElement", "value"),
    ("HTMLMediaElement", "playbackRate"),
    ("HTMLMediaElement", "muted"),
    ("HTMLOptionElement", "selected"),
    ("HTMLOutputElement", "value"),
    ("HTMLTextAreaElement", "value"),
];

/// Template family used for an accessor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorShape {
    /// Delegates to the generic attribute setter.
    Default,
    /// Assigns the live DOM property and its `default*` counterpart.
    SpecialDomBinding,
}

/// Static lookup from `(tag, attribute)` to [`AccessorShape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapePolicy {
    special: HashSet<(String, String)>,
}

impl ShapePolicy {
    /// Creates a policy with no special pairs.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            special: HashSet::new(),
        }
    }

    /// Adds a special pair.
    pub fn insert(&mut self, tag: impl Into<String>, attribute: impl Into<String>) {
        self.special.insert((tag.into(), attribute.into()));
    }

    /// Adds a special pair written as `Type.attribute`.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidSpecialAttribute` if either side is missing.
    pub fn insert_qualified(&mut self, qualified: &str) -> Result<(), CodegenError> {
        match qualified.split_once('.') {
            Some((tag, attribute)) if !tag.is_empty() && !attribute.is_empty() => {
                self.insert(tag, attribute);
                Ok(())
            }
            _ => Err(CodegenError::invalid_special(qualified)),
        }
    }

    /// Returns the shape for an attribute of a tag.
    #[must_use]
    pub fn shape(&self, tag: &str, attribute: &str) -> AccessorShape {
        if self
            .special
            .contains(&(tag.to_string(), attribute.to_string()))
        {
            AccessorShape::SpecialDomBinding
        } else {
            AccessorShape::Default
        }
    }

    /// Returns the number of special pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.special.len()
    }

    /// Returns true if no pair is special.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.special.is_empty()
    }
}

impl Default for ShapePolicy {
    fn default() -> Self {
        let mut policy = Self::empty();
        for (tag, attribute) in SPECIAL_DOM_ATTRIBUTES {
            policy.insert(*tag, *attribute);
        }
        policy
    }
}
