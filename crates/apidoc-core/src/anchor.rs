//! Anchor id assignment
//!
//! Every element carrying an anchor key receives `id = key`. Ids come only
//! from those keys, never from heading text, so they stay stable as long as
//! the symbol model does.

use std::collections::HashSet;

use crate::error::{RenderError, Result};
use crate::tree::{try_walk_elements_mut, Element};

/// Assign ids to every anchor-bearing element in one pre-order walk
///
/// Returns the number of ids assigned. A key claimed by two elements is
/// reported instead of being disambiguated.
#[tracing::instrument(skip_all)]
pub fn assign_ids(root: &mut Element) -> Result<usize> {
    let mut assigned = HashSet::new();

    try_walk_elements_mut(root, &mut |element: &mut Element| {
        let Some(key) = element.anchor_key.clone() else {
            return Ok(());
        };
        if !assigned.insert(key.clone()) {
            return Err(RenderError::DuplicateAnchor(key));
        }
        element.set_attr("id", key);
        Ok(())
    })?;

    tracing::debug!(count = assigned.len(), "assigned anchor ids");
    Ok(assigned.len())
}
