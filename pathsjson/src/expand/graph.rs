//! Dependency graph construction.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::Namespace;
use crate::expand::token::Token;

/// Adjacency list: path name to the path names it directly references.
pub type Requirements = BTreeMap<String, BTreeSet<String>>;

/// Reverse adjacency: path name to the (sorted) names that reference it.
pub type Dependents = BTreeMap<String, Vec<String>>;

/// Compute the requirements of each path definition.
///
/// The reserved `__ENV` key is never a node. Referenced names are not
/// checked for existence here; that happens during ordering.
///
/// # Examples
///
/// ```
/// use pathsjson::config::Namespace;
/// use pathsjson::expand::requirements_of;
///
/// let ns = Namespace::new()
///     .with_path("data_dir", ["data"])
///     .with_path("raw_dir", ["$data_dir", "raw"]);
/// let g = requirements_of(&ns);
/// assert!(g["data_dir"].is_empty());
/// assert!(g["raw_dir"].contains("data_dir"));
/// ```
#[must_use]
pub fn requirements_of(namespace: &Namespace) -> Requirements {
    namespace
        .paths
        .iter()
        .map(|(name, tokens)| {
            let refs = tokens
                .iter()
                .filter_map(|token| match Token::classify(token) {
                    Token::PathRef(target) => Some(target.to_string()),
                    Token::Literal(_) | Token::EnvRef(_) => None,
                })
                .collect();
            (name.clone(), refs)
        })
        .collect()
}

/// Compute the dependents of each referenced name.
///
/// Values are sorted so that traversal order is reproducible.
#[must_use]
pub fn dependents_of(requirements: &Requirements) -> Dependents {
    let mut deps: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for (name, targets) in requirements {
        for target in targets {
            deps.entry(target.clone()).or_default().insert(name.clone());
        }
    }

    deps.into_iter()
        .map(|(target, names)| (target, names.into_iter().collect()))
        .collect()
}
