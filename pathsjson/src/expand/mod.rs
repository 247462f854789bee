//! The path-definition expansion engine.
//!
//! Expansion runs in four steps over one namespace snapshot:
//!
//! 1. [`token`]: classify every token as a literal, a path reference
//!    (`$name`) or an environment reference (`$$NAME`).
//! 2. [`graph`]: build the adjacency list of path references.
//! 3. [`topo`]: order the definitions so every path follows its
//!    dependencies, failing on cycles and undefined references.
//! 4. [`engine`]: splice dependencies in order, turning environment
//!    references into parameter placeholders.
//!
//! # Examples
//!
//! ```
//! use pathsjson::config::Namespace;
//! use pathsjson::expand::{expand, Segment};
//!
//! let ns = Namespace::new()
//!     .with_path("data_dir", ["data"])
//!     .with_path("raw_dir", ["$data_dir", "raw"]);
//!
//! let expansion = expand(&ns).unwrap();
//! assert_eq!(
//!     expansion["raw_dir"],
//!     vec![Segment::literal("data"), Segment::literal("raw")]
//! );
//! ```

pub mod engine;
pub mod graph;
pub mod token;
pub mod topo;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use engine::{check_shadowing, expand, Expansion, Segment};
pub use graph::{dependents_of, requirements_of, Dependents, Requirements};
pub use token::{is_env_var, is_path_var, Token};
pub use topo::topo_sort;
