#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathsjson
//!
//! A library for declaring project paths once, in a `.paths.json` file, and
//! resolving them anywhere in the project.
//!
//! A definition file maps path names to token lists. Tokens are literals,
//! references to other paths (`$data_dir`) or references to environment
//! bindings declared under `__ENV` (`$$VERSION`). Definitions are expanded
//! once into [`PathTemplate`]s whose free parameters are the environment
//! references; resolving a template binds those parameters from runtime
//! arguments or their defaults.
//!
//! ## Core Types
//!
//! - [`config::Namespace`] and [`config::NamespaceBuilder`]: the document
//!   model and the loading pipeline
//! - [`expand`]: dependency ordering and expansion
//! - [`PathTemplate`] and [`Arguments`]: expanded templates and their inputs
//! - [`TemplateSet`] and [`PathsJson`]: template registries
//! - [`Resolution`]: a resolved path
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathsjson::config::Namespace;
//! use pathsjson::{Arguments, TemplateSet};
//!
//! let ns: Namespace = serde_json::from_str(r#"{
//!     "__ENV": {"VERSION": "1.0.0"},
//!     "data_dir": ["data"],
//!     "raw_dir": ["$data_dir", "raw"],
//!     "latest_data": ["$raw_dir", "$$VERSION", "data.csv"]
//! }"#).unwrap();
//!
//! let paths = TemplateSet::from_namespace(&ns).unwrap();
//! let latest = paths.resolve_path("latest_data", &Arguments::positional(["2.1.3"])).unwrap();
//! assert!(latest.ends_with("data.csv"));
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod logging;
pub mod output;
pub mod path;
pub mod registry;
pub mod resolution;
pub mod template;

#[cfg(test)]
mod test_util;

// Re-export key types at crate root for convenience
pub use config::{EnvSnapshot, LoadedNamespace, Namespace, NamespaceBuilder};
pub use error::{Error, Result};
pub use expand::{expand, Expansion, Segment};
pub use logging::{init_logger, resolve_level, LogLevel, Logger};
pub use registry::{PathsJson, TemplateSet};
pub use resolution::Resolution;
pub use template::{Arguments, PathTemplate};
