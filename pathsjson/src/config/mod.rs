//! Loading `.paths.json` definitions.
//!
//! This module covers everything between a file on disk and a merged
//! [`Namespace`]:
//! - the document model ([`schema`])
//! - upward file discovery and JSON loading ([`loader`])
//! - environment variable overrides ([`environment`])
//! - per-user global definitions ([`globals`])
//! - schema and structural validation ([`validator`])
//! - the full pipeline ([`builder`])
//!
//! # Precedence
//!
//! From highest to lowest:
//!
//! 1. Environment variables named like a binding or a path
//! 2. The project `.paths.json`
//! 3. User globals
//! 4. Implicit bindings (`_IMPLICIT_ROOT`, `_DRIVE_ROOT`), which only fill
//!    names nothing else bound
//!
//! # Examples
//!
//! ```no_run
//! use pathsjson::config::NamespaceBuilder;
//!
//! let loaded = NamespaceBuilder::new().build().unwrap();
//! for name in loaded.namespace.paths.keys() {
//!     println!("{name}");
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod globals;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::{
    inject_special_variables, LoadedNamespace, NamespaceBuilder, DRIVE_ROOT, IMPLICIT_ROOT,
};
pub use environment::{patch_with_env, EnvSnapshot};
pub use globals::{
    create_user_globals_file, load_user_globals, merge_globals, patch_with_user_globals,
    user_globals_path,
};
pub use loader::{find_file_asc, load_document, locate, DEFAULT_TARGET_NAME};
pub use schema::{Bindings, Namespace, ENV_KEY};
pub use validator::{validate_document, validate_namespace, SCHEMA};
