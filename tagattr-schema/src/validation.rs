//! Hierarchy validation.
//!
//! A cycle that contains a qualifying tag is harmless: every walk stops at
//! the first qualifying ancestor. A cycle made only of non-qualifying tags
//! would keep the attribute closure of a qualifying descendant running
//! forever, so it is rejected once such a descendant can reach it. Foreign
//! cycles no qualifying tag reaches are never walked and are left alone.

use crate::error::SchemaError;
use crate::registry::{PrunedRegistry, TagId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Checks that no qualifying tag reaches a cycle of non-qualifying ancestors.
///
/// # Errors
/// Returns `SchemaError::CircularReference` naming the tags along the first
/// cycle found.
pub fn check_foreign_cycles(registry: &PrunedRegistry) -> Result<(), SchemaError> {
    let mut marks = vec![Mark::Unvisited; registry.len()];

    for id in registry.ids().filter(|&id| registry.is_qualifying(id)) {
        for &parent in &registry.tag(id).parents {
            if !registry.is_qualifying(parent) && marks[parent.index()] == Mark::Unvisited {
                visit(registry, parent, &mut marks)?;
            }
        }
    }

    Ok(())
}

/// Depth-first walk over non-qualifying ancestors of `start`.
///
/// The stack holds the current path together with the index of the next
/// parent to follow for each entry.
fn visit(registry: &PrunedRegistry, start: TagId, marks: &mut [Mark]) -> Result<(), SchemaError> {
    let mut stack: Vec<(TagId, usize)> = vec![(start, 0)];
    marks[start.index()] = Mark::OnPath;

    while let Some((id, next)) = stack.last_mut() {
        let id = *id;
        let parent = registry.tag(id).parents.get(*next).copied();
        *next += 1;

        let Some(parent) = parent else {
            marks[id.index()] = Mark::Done;
            stack.pop();
            continue;
        };
        if registry.is_qualifying(parent) {
            continue;
        }

        match marks[parent.index()] {
            Mark::Unvisited => {
                marks[parent.index()] = Mark::OnPath;
                stack.push((parent, 0));
            }
            Mark::OnPath => {
                let from = stack.iter().position(|&(p, _)| p == parent).unwrap_or(0);
                let names: Vec<&str> = stack[from..]
                    .iter()
                    .map(|&(p, _)| p)
                    .chain(std::iter::once(parent))
                    .map(|p| registry.tag(p).name.as_str())
                    .collect();
                return Err(SchemaError::circular(&names));
            }
            Mark::Done => {}
        }
    }

    Ok(())
}
