//! Path templates and argument binding.
//!
//! A [`PathTemplate`] is the terminal artifact of expansion: a skeleton
//! string with one `{}` marker per free parameter, plus the ordered
//! parameter names and defaults. Templates are immutable; resolving one only
//! reads its own fields and the caller's [`Arguments`].

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::expand::Segment;
use crate::path::normpath;

/// Substitution marker in a template skeleton.
const MARKER: &str = "{}";

/// Runtime arguments for resolving a template.
///
/// # Examples
///
/// ```
/// use pathsjson::Arguments;
///
/// let args = Arguments::new()
///     .with_positional("2.1.3")
///     .with_keyword("PROJ", "vaquero");
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    positional: Vec<String>,
    keyword: IndexMap<String, String>,
}

impl Arguments {
    /// Create an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an argument list from positional values only.
    #[must_use]
    pub fn positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: IndexMap::new(),
        }
    }

    /// Append a positional value.
    #[must_use]
    pub fn with_positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword value, replacing any earlier value for the same name.
    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Total number of supplied arguments, positional plus keyword.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// Whether no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An expanded, immutable path template.
///
/// Equality and hashing compare the skeleton, the parameter names and the
/// defaults, in order.
///
/// # Examples
///
/// ```
/// use pathsjson::{Arguments, PathTemplate};
///
/// let template = PathTemplate::new(
///     "data/{}/{}",
///     ["VERSION", "PROJ"],
///     [Some("0.0.1"), Some("pathsjson")],
/// );
/// let args = Arguments::new().with_keyword("PROJ", "x").with_keyword("VERSION", "y");
/// assert_eq!(template.resolve(&args).unwrap(), "data/y/x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathTemplate {
    skeleton: String,
    arg_names: Vec<String>,
    defaults: Vec<Option<String>>,
}

impl PathTemplate {
    /// Create a template from its parts.
    ///
    /// `arg_names` and `defaults` are aligned by index; missing defaults are
    /// padded with `None`.
    #[must_use]
    pub fn new<N, S, D, V>(skeleton: impl Into<String>, arg_names: N, defaults: D) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
        D: IntoIterator<Item = Option<V>>,
        V: Into<String>,
    {
        let arg_names: Vec<String> = arg_names.into_iter().map(Into::into).collect();
        let mut defaults: Vec<Option<String>> = defaults
            .into_iter()
            .map(|d| d.map(Into::into))
            .collect();
        defaults.resize(arg_names.len(), None);

        Self {
            skeleton: skeleton.into(),
            arg_names,
            defaults,
        }
    }

    /// Build a template from an expanded segment list.
    ///
    /// Literals become path components (braces escaped), parameters become
    /// a single `{}` marker each, and everything is joined with the platform
    /// separator.
    #[must_use]
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut skeleton = PathBuf::new();
        let mut arg_names = Vec::new();
        let mut defaults = Vec::new();

        for segment in segments {
            match segment {
                Segment::Literal(literal) => skeleton.push(escape(literal)),
                Segment::Param(name, default) => {
                    skeleton.push(MARKER);
                    arg_names.push(name.clone());
                    defaults.push(default.clone());
                }
            }
        }

        Self {
            skeleton: skeleton.to_string_lossy().into_owned(),
            arg_names,
            defaults,
        }
    }

    /// The unresolved skeleton.
    #[must_use]
    pub fn skeleton(&self) -> &str {
        &self.skeleton
    }

    /// Free parameter names, in order.
    #[must_use]
    pub fn arg_names(&self) -> &[String] {
        &self.arg_names
    }

    /// Defaults aligned with [`arg_names`](Self::arg_names).
    #[must_use]
    pub fn defaults(&self) -> &[Option<String>] {
        &self.defaults
    }

    /// Resolve the template to a concrete, normalized path string.
    ///
    /// Parameters are bound left to right: a keyword argument with the
    /// parameter's name wins, then the next positional argument, then the
    /// default. When fewer arguments are supplied than there are
    /// parameters, parameters whose name starts with `_` skip straight to
    /// their default so implicit values fall back silently.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArguments`] if a parameter ends up with no
    /// value, or [`Error::TooManyArguments`] if any argument is left over.
    pub fn resolve(&self, args: &Arguments) -> Result<String> {
        if self.arg_names.is_empty() {
            return Ok(normpath(&substitute(&self.skeleton, &[])));
        }

        let skipping = args.len() < self.arg_names.len();
        let mut positional = args.positional.iter();
        let mut consumed: HashSet<&str> = HashSet::new();
        let mut values: Vec<&str> = Vec::with_capacity(self.arg_names.len());

        for (name, default) in self.arg_names.iter().zip(&self.defaults) {
            let skip = skipping && name.starts_with('_');

            if !skip {
                if !consumed.contains(name.as_str()) {
                    if let Some(value) = args.keyword.get(name) {
                        consumed.insert(name);
                        values.push(value);
                        continue;
                    }
                }
                if let Some(value) = positional.next() {
                    values.push(value);
                    continue;
                }
            }

            match default {
                Some(default) => values.push(default),
                None => {
                    return Err(Error::MissingArguments {
                        expected: self.expected(),
                    })
                }
            }
        }

        if positional.next().is_some() || consumed.len() < args.keyword.len() {
            return Err(Error::TooManyArguments {
                expected: self.expected(),
            });
        }

        Ok(normpath(&substitute(&self.skeleton, &values)))
    }

    fn expected(&self) -> String {
        self.arg_names.join(", ")
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.skeleton)
    }
}

impl From<&[Segment]> for PathTemplate {
    fn from(segments: &[Segment]) -> Self {
        Self::from_segments(segments)
    }
}

fn escape(literal: &str) -> String {
    literal.replace('{', "{{").replace('}', "}}")
}

/// Fill `{}` markers with `values` in order and unescape doubled braces.
fn substitute(skeleton: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(skeleton.len());
    let mut values = values.iter();
    let mut chars = skeleton.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                if let Some(value) = values.next() {
                    out.push_str(value);
                }
            }
            _ => out.push(c),
        }
    }

    out
}
