//! Tag registries.
//!
//! [`TagRegistry`] maps names to raw tags as extracted. Pruning it yields a
//! [`PrunedRegistry`], an arena in which every parent edge is a [`TagId`]
//! pointing at a known tag. Ancestor walks are only offered on the pruned
//! form, so they can never meet a dangling parent name.

use crate::error::SchemaError;
use crate::types::{Attribute, CLASS_NAME_ATTRIBUTE, RawTag};
use crate::validation;
use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};

/// Index of a tag inside a [`PrunedRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(usize);

impl TagId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Name-keyed registry of raw tags in declaration order.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: IndexMap<String, RawTag>,
}

impl TagRegistry {
    /// Builds a registry; a later tag replaces an earlier one of the same name
    /// but keeps the earlier position.
    #[must_use]
    pub fn from_tags(tags: impl IntoIterator<Item = RawTag>) -> Self {
        let mut registry = Self::default();
        for tag in tags {
            if let Some(previous) = registry.tags.insert(tag.name.clone(), tag) {
                tracing::warn!("Duplicate declaration of {}, keeping the last one", previous.name);
            }
        }
        registry
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the registry holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns true if a tag with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Looks up a raw tag by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawTag> {
        self.tags.get(name)
    }

    /// Drops unknown parent references and `className` attributes, then
    /// classifies every tag against `root_type`.
    ///
    /// # Errors
    /// Returns `SchemaError::CircularReference` if a tag descending from
    /// `root_type` reaches a cycle of tags that do not.
    pub fn prune(self, root_type: &str) -> Result<PrunedRegistry, SchemaError> {
        let index: HashMap<String, TagId> = self
            .tags
            .keys()
            .enumerate()
            .map(|(i, name)| (name.clone(), TagId(i)))
            .collect();

        let tags: Vec<PrunedTag> = self
            .tags
            .into_values()
            .map(|raw| {
                let parents = raw
                    .parents
                    .iter()
                    .filter_map(|parent| {
                        let id = index.get(parent).copied();
                        if id.is_none() {
                            tracing::debug!("Dropping unknown parent {} of {}", parent, raw.name);
                        }
                        id
                    })
                    .collect();
                let attributes = raw
                    .attributes
                    .into_iter()
                    .filter(|attr| attr.name != CLASS_NAME_ATTRIBUTE)
                    .collect();
                PrunedTag {
                    name: raw.name,
                    attributes,
                    parents,
                }
            })
            .collect();

        let mut registry = PrunedRegistry {
            root_type: root_type.to_string(),
            qualifying: Vec::new(),
            tags,
            index,
        };
        let qualifying = registry.ids().map(|id| registry.is_descendant(id)).collect();
        registry.qualifying = qualifying;

        validation::check_foreign_cycles(&registry)?;

        Ok(registry)
    }
}

/// A tag whose parent edges all point into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedTag {
    /// Tag name.
    pub name: String,
    /// Own attributes without `className`.
    pub attributes: Vec<Attribute>,
    /// Known parents in declaration order.
    pub parents: Vec<TagId>,
}

/// Arena of pruned tags.
#[derive(Debug, Clone)]
pub struct PrunedRegistry {
    root_type: String,
    tags: Vec<PrunedTag>,
    index: HashMap<String, TagId>,
    qualifying: Vec<bool>,
}

impl PrunedRegistry {
    /// Returns the root marker type name.
    #[must_use]
    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the registry holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over all ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = TagId> + use<> {
        (0..self.tags.len()).map(TagId)
    }

    /// Looks up the id of a tag by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<TagId> {
        self.index.get(name).copied()
    }

    /// Returns the tag stored under `id`.
    #[must_use]
    pub fn tag(&self, id: TagId) -> &PrunedTag {
        &self.tags[id.0]
    }

    /// Returns the parent names of `id` in declaration order.
    #[must_use]
    pub fn parent_names(&self, id: TagId) -> Vec<&str> {
        self.tag(id)
            .parents
            .iter()
            .map(|&parent| self.tag(parent).name.as_str())
            .collect()
    }

    /// Returns true if `id` is the root marker or reaches it through its parents.
    ///
    /// The parent chain is expanded breadth-first; a tag already expanded is
    /// not expanded again.
    #[must_use]
    pub fn is_descendant(&self, id: TagId) -> bool {
        let mut expanded = vec![false; self.tags.len()];
        let mut frontier = VecDeque::from([id]);

        while let Some(current) = frontier.pop_front() {
            let tag = self.tag(current);
            if tag.name == self.root_type {
                return true;
            }
            if !std::mem::replace(&mut expanded[current.0], true) {
                frontier.extend(tag.parents.iter().copied());
            }
        }

        false
    }

    /// Name-based form of [`Self::is_descendant`].
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if no tag has that name.
    pub fn is_descendant_by_name(&self, name: &str) -> Result<bool, SchemaError> {
        self.id(name)
            .map(|id| self.is_descendant(id))
            .ok_or_else(|| SchemaError::not_found(name))
    }

    /// Returns the cached descendant classification of `id`.
    #[must_use]
    pub fn is_qualifying(&self, id: TagId) -> bool {
        self.qualifying[id.0]
    }

    /// Collects the attributes `id` inherits from non-qualifying ancestors.
    ///
    /// Ancestors are visited breadth-first in parent declaration order. A
    /// qualifying ancestor ends its branch; every other ancestor that owns
    /// attributes contributes a banner followed by its attributes. An
    /// ancestor reachable along several branches contributes once per branch.
    #[must_use]
    pub fn inherited_attributes(&self, id: TagId) -> Vec<Attribute> {
        let mut accumulated = Vec::new();
        let mut frontier: VecDeque<TagId> = self.tag(id).parents.iter().copied().collect();

        while let Some(current) = frontier.pop_front() {
            if self.is_qualifying(current) {
                continue;
            }
            let ancestor = self.tag(current);
            tracing::trace!("Inlining {} into {}", ancestor.name, self.tag(id).name);
            if !ancestor.attributes.is_empty() {
                accumulated.push(Attribute::inherited_banner(&ancestor.name));
                accumulated.extend(ancestor.attributes.iter().cloned());
            }
            frontier.extend(ancestor.parents.iter().copied());
        }

        accumulated
    }
}
