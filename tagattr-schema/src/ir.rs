//! Intermediate representation for code generation.
//!
//! This module provides the resolved view of the listing: only the tags that
//! descend from the root marker, each carrying its own attributes followed by
//! everything it inherits from non-qualifying ancestors.

use crate::config::SchemaConfig;
use crate::error::SchemaError;
use crate::parser::parse_listing;
use crate::registry::{PrunedRegistry, TagRegistry};
use crate::types::{Attribute, RawTag};

/// Resolved listing, ready for code generation.
#[derive(Debug, Clone)]
pub struct TagIr {
    /// Root marker type the tags descend from.
    pub root_type: String,
    /// Qualifying tags in declaration order.
    pub tags: Vec<ResolvedTag>,
}

impl TagIr {
    /// Parses and resolves a listing.
    ///
    /// # Errors
    /// Returns `SchemaError` if extraction fails or the hierarchy is cyclic.
    pub fn from_listing(input: &str, config: &SchemaConfig) -> Result<Self, SchemaError> {
        let raw = parse_listing(input, config.openers)?;
        Self::from_raw_tags(raw, &config.root_type)
    }

    /// Resolves extracted tags against `root_type`.
    ///
    /// # Errors
    /// Returns `SchemaError::CircularReference` if a qualifying tag inherits
    /// through a cycle of non-qualifying ancestors.
    pub fn from_raw_tags(raw: Vec<RawTag>, root_type: &str) -> Result<Self, SchemaError> {
        let registry = TagRegistry::from_tags(raw).prune(root_type)?;
        Ok(Self::from_registry(&registry))
    }

    /// Builds the representation from a pruned registry.
    #[must_use]
    pub fn from_registry(registry: &PrunedRegistry) -> Self {
        let tags: Vec<ResolvedTag> = registry
            .ids()
            .filter(|&id| registry.is_qualifying(id))
            .map(|id| {
                let tag = registry.tag(id);
                let mut attributes = tag.attributes.clone();
                attributes.extend(registry.inherited_attributes(id));
                ResolvedTag {
                    name: tag.name.clone(),
                    attributes,
                    parents: registry
                        .parent_names(id)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                }
            })
            .collect();

        tracing::info!(
            "Resolved {} of {} declarations as descendants of {}",
            tags.len(),
            registry.len(),
            registry.root_type()
        );

        Self {
            root_type: registry.root_type().to_string(),
            tags,
        }
    }

    /// Gets a resolved tag by name.
    #[must_use]
    pub fn get_tag(&self, name: &str) -> Option<&ResolvedTag> {
        self.tags.iter().find(|tag| tag.name == name)
    }
}

/// A qualifying tag with its full attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    /// Tag name.
    pub name: String,
    /// Own attributes, then inherited banners and attributes.
    pub attributes: Vec<Attribute>,
    /// Known parents in declaration order.
    pub parents: Vec<String>,
}

impl ResolvedTag {
    /// Returns true if the tag has anything to emit.
    #[must_use]
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"public external interface GlobalEventHandlers {
    open var onabort: ((Event) -> dynamic)?
}

public external interface ElementContentEditable {
    open var contentEditable: String
    open var isContentEditable: Boolean
}

public external abstract class Element : Node {
    open var id: String
    open var className: String
}

public external abstract class HTMLElement : Element, GlobalEventHandlers, ElementContentEditable {
    open var title: String
    open var hidden: Boolean
}

public external abstract class HTMLAnchorElement : HTMLElement, HTMLHyperlinkElementUtils {
    open var target: String
    open var download: String
}

public external interface HTMLHyperlinkElementUtils {
    open var href: String
}
"#;

    fn ir() -> TagIr {
        TagIr::from_listing(LISTING, &SchemaConfig::default()).expect("Failed to resolve")
    }

    fn names(tag: &ResolvedTag) -> Vec<&str> {
        tag.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_only_descendants_are_kept() {
        let ir = ir();
        let tags: Vec<&str> = ir.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tags, vec!["HTMLElement", "HTMLAnchorElement"]);
        assert_eq!(ir.root_type, "HTMLElement");
    }

    #[test]
    fn test_root_inlines_foreign_parents() {
        let ir = ir();
        let root = ir.get_tag("HTMLElement").expect("missing HTMLElement");
        assert_eq!(
            names(root),
            vec![
                "title",
                "hidden",
                "// inherited attributes from supertype Element",
                "id",
                "// inherited attributes from supertype ElementContentEditable",
                "contentEditable",
                "isContentEditable",
            ]
        );
        assert_eq!(root.parents, vec!["Element", "GlobalEventHandlers", "ElementContentEditable"]);
    }

    #[test]
    fn test_descendant_does_not_inline_qualifying_parent() {
        let ir = ir();
        let anchor = ir.get_tag("HTMLAnchorElement").expect("missing anchor");
        assert_eq!(
            names(anchor),
            vec![
                "target",
                "download",
                "// inherited attributes from supertype HTMLHyperlinkElementUtils",
                "href",
            ]
        );
        assert_eq!(anchor.attributes.iter().filter(|a| !a.is_comment()).count(), 3);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let ir = TagIr::from_listing(LISTING, &SchemaConfig::with_root("SVGElement"))
            .expect("Failed to resolve");
        assert!(ir.tags.is_empty());
    }
}
