//! Expansion of path definitions into segment lists.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{Bindings, Namespace};
use crate::error::{Error, Result};
use crate::expand::graph::requirements_of;
use crate::expand::token::Token;
use crate::expand::topo::topo_sort;

/// One element of an expanded path.
///
/// Serializes as a plain string for literals and as a `[name, default]`
/// pair for parameter placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// A literal path segment.
    Literal(String),
    /// A free parameter: environment variable name and its default.
    Param(String, Option<String>),
}

impl Segment {
    /// Create a literal segment.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a parameter placeholder.
    #[must_use]
    pub fn param(name: impl Into<String>, default: Option<&str>) -> Self {
        Self::Param(name.into(), default.map(str::to_string))
    }
}

/// Path name to fully expanded segments, in declaration order.
pub type Expansion = IndexMap<String, Vec<Segment>>;

/// Reject path definitions named like an environment binding.
///
/// # Errors
///
/// Returns [`Error::ShadowedBinding`] for the first such path name in
/// declaration order.
pub fn check_shadowing(namespace: &Namespace) -> Result<()> {
    match namespace
        .paths
        .keys()
        .find(|name| namespace.env.contains_key(*name))
    {
        Some(name) => Err(Error::ShadowedBinding { name: name.clone() }),
        None => Ok(()),
    }
}

/// Seed the resolution context from the environment bindings.
///
/// A bound value is a ready-made single literal segment; an unbound name
/// becomes a required parameter.
fn seed_context(bindings: &Bindings) -> HashMap<String, Vec<Segment>> {
    bindings
        .iter()
        .map(|(name, value)| {
            let seed = match value {
                Some(value) => Segment::Literal(value.clone()),
                None => Segment::Param(name.clone(), None),
            };
            (name.clone(), vec![seed])
        })
        .collect()
}

/// Expand a namespace into per-path segment lists.
///
/// Path references are spliced in transitively, environment references
/// become parameter placeholders carrying their current binding, and
/// literals are copied. The namespace itself is never modified.
///
/// # Errors
///
/// Returns [`Error::ShadowedBinding`] if a path is named like a binding,
/// or [`Error::ResolveFailed`] for cycles and undefined references.
///
/// # Examples
///
/// ```
/// use pathsjson::config::Namespace;
/// use pathsjson::expand::{expand, Segment};
///
/// let ns = Namespace::new()
///     .with_binding("VERSION", Some("1.0.0"))
///     .with_path("data_dir", ["data"])
///     .with_path("latest", ["$data_dir", "$$VERSION", "data.csv"]);
///
/// let expansion = expand(&ns).unwrap();
/// assert_eq!(
///     expansion["latest"],
///     vec![
///         Segment::literal("data"),
///         Segment::param("VERSION", Some("1.0.0")),
///         Segment::literal("data.csv"),
///     ]
/// );
/// ```
pub fn expand(namespace: &Namespace) -> Result<Expansion> {
    check_shadowing(namespace)?;

    let bindings = &namespace.env;
    let order = topo_sort(requirements_of(namespace), bindings)?;
    let mut context = seed_context(bindings);

    for name in order {
        let tokens = namespace
            .paths
            .get(&name)
            .ok_or_else(|| Error::ResolveFailed { name: name.clone() })?;
        let mut path = Vec::with_capacity(tokens.len());

        for token in tokens {
            match Token::classify(token) {
                Token::PathRef(target) => {
                    let segments = context
                        .get(target)
                        .ok_or_else(|| Error::ResolveFailed { name: name.clone() })?;
                    path.extend(segments.iter().cloned());
                }
                Token::EnvRef(var) => {
                    let default = bindings.get(var).cloned().flatten();
                    path.push(Segment::Param(var.to_string(), default));
                }
                Token::Literal(literal) => path.push(Segment::Literal(literal.to_string())),
            }
        }

        log::debug!("expanded {name}: {path:?}");
        context.insert(name, path);
    }

    Ok(namespace
        .paths
        .keys()
        .filter_map(|name| context.remove(name).map(|path| (name.clone(), path)))
        .collect())
}
