//! Shared fixtures for unit tests.

use crate::config::Namespace;

/// The canonical sample document used throughout the unit tests.
pub fn sample_namespace() -> Namespace {
    Namespace::new()
        .with_binding("VERSION", Some("1.0.0"))
        .with_path("data_dir", ["data"])
        .with_path("raw_dir", ["$data_dir", "raw"])
        .with_path("test_dir", ["$data_dir", "tests"])
        .with_path("clean_dir", ["$data_dir", "clean"])
        .with_path("codebook_dir", ["$clean_dir", "codebooks"])
        .with_path("latest_data", ["$raw_dir", "$$VERSION", "data.csv"])
}
