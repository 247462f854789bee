//! Topological ordering of path definitions.

use std::collections::{BTreeSet, VecDeque};

use crate::config::Bindings;
use crate::error::{Error, Result};
use crate::expand::graph::{dependents_of, Requirements};

/// Order path definitions so each comes after everything it references.
///
/// This is Kahn's algorithm with a deterministic tie-break: the initial
/// frontier is sorted, dependents are visited in sorted order, and the
/// frontier is consumed first-in first-out.
///
/// References to names in `external` that are not themselves path
/// definitions are satisfied up front and never block a node.
///
/// # Errors
///
/// Returns [`Error::ResolveFailed`] naming the first (in sorted order) node
/// left with a requirement that is neither ordered nor external. This covers
/// both cycles and references to undefined names.
///
/// # Examples
///
/// ```
/// use pathsjson::config::{Bindings, Namespace};
/// use pathsjson::expand::{requirements_of, topo_sort};
///
/// let ns = Namespace::new()
///     .with_path("raw_dir", ["$data_dir", "raw"])
///     .with_path("data_dir", ["data"]);
/// let order = topo_sort(requirements_of(&ns), &Bindings::new()).unwrap();
/// assert_eq!(order, vec!["data_dir", "raw_dir"]);
/// ```
pub fn topo_sort(mut requirements: Requirements, external: &Bindings) -> Result<Vec<String>> {
    let defined: BTreeSet<String> = requirements.keys().cloned().collect();
    for targets in requirements.values_mut() {
        targets.retain(|target| !external.contains_key(target) || defined.contains(target));
    }

    let dependents = dependents_of(&requirements);
    let mut frontier: VecDeque<String> = requirements
        .iter()
        .filter(|(_, targets)| targets.is_empty())
        .map(|(name, _)| name.clone())
        .collect();
    let mut ordering = Vec::with_capacity(requirements.len());

    while let Some(node) = frontier.pop_front() {
        if let Some(names) = dependents.get(&node) {
            for name in names {
                if let Some(targets) = requirements.get_mut(name) {
                    targets.remove(&node);
                    if targets.is_empty() {
                        frontier.push_back(name.clone());
                    }
                }
            }
        }
        ordering.push(node);
    }

    // Whatever is left could not be ordered.
    for (name, targets) in &requirements {
        if targets.iter().any(|target| !external.contains_key(target)) {
            log::debug!("unresolved requirements for {name}: {targets:?}");
            return Err(Error::ResolveFailed { name: name.clone() });
        }
    }

    log::debug!("topological order: {ordering:?}");
    Ok(ordering)
}
