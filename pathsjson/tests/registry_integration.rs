//! Integration tests for loading definition files into registries.
//!
//! These tests run the whole pipeline: locate a file, validate it, expand
//! it and resolve paths from the resulting registry.

mod common;

use std::fs;

use common::{fixture_builder, fixture_path, isolated_builder, join, write_definitions};
use pathsjson::path::absolute;
use pathsjson::{Arguments, Error, PathsJson, TemplateSet};
use tempfile::TempDir;

// ============================================================================
// Sample fixture
// ============================================================================

fn sample() -> PathsJson {
    PathsJson::load(fixture_builder("sample.paths.json").with_implicit_root(false)).unwrap()
}

#[test]
fn test_simple_path() {
    assert_eq!(
        sample().resolve_path("clean_dir", &Arguments::new()).unwrap(),
        join(&["data", "clean"])
    );
}

#[test]
fn test_default_interpolation() {
    assert_eq!(
        sample()
            .resolve_path("latest_data", &Arguments::new())
            .unwrap(),
        join(&["data", "raw", "1.0.0", "data.csv"])
    );
}

#[test]
fn test_arg_override() {
    assert_eq!(
        sample()
            .resolve_path("latest_data", &Arguments::positional(["2.1.3"]))
            .unwrap(),
        join(&["data", "raw", "2.1.3", "data.csv"])
    );
}

#[test]
fn test_keyword_override() {
    let args = Arguments::new().with_keyword("VERSION", "99");
    assert_eq!(
        sample().resolve_path("latest_data", &args).unwrap(),
        join(&["data", "raw", "99", "data.csv"])
    );
}

#[test]
fn test_display() {
    assert_eq!(
        sample().to_string(),
        "PathsJson(KEYS=[clean_dir, codebook_dir, data_dir, latest_data, raw_dir, test_dir])"
    );
}

#[test]
fn test_source_recorded() {
    let paths = sample();
    assert_eq!(
        paths.source().unwrap(),
        absolute(&fixture_path("sample.paths.json")).unwrap()
    );
}

#[test]
fn test_names_follow_file_order() {
    assert_eq!(
        sample().names(),
        vec!["data_dir", "raw_dir", "test_dir", "clean_dir", "codebook_dir", "latest_data"]
    );
}

#[test]
fn test_zero_parameter_path_ignores_arguments() {
    let resolved = sample()
        .resolve_path("clean_dir", &Arguments::positional(["extra"]))
        .unwrap();
    assert_eq!(resolved, join(&["data", "clean"]));
}

#[test]
fn test_too_many_args() {
    let err = sample()
        .resolve_path("latest_data", &Arguments::positional(["2.0", "extra"]))
        .unwrap_err();
    assert!(matches!(err, Error::TooManyArguments { .. }));
}

#[test]
fn test_discovery_by_target_name() {
    let paths = PathsJson::load(
        isolated_builder()
            .with_src_dir(fixture_path(""))
            .with_target_name("sample.paths.json"),
    )
    .unwrap();
    assert_eq!(paths.names().len(), 6);
}

// ============================================================================
// Implicit bindings
// ============================================================================

#[test]
fn test_implicit_root() {
    let loaded = fixture_builder("sample.paths.json").build().unwrap();
    let expected = absolute(&fixture_path(""))
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert_eq!(
        loaded.namespace.env["_IMPLICIT_ROOT"].as_deref(),
        Some(expected.trim_end_matches(std::path::MAIN_SEPARATOR))
    );
}

#[test]
fn test_rooted_paths() {
    let paths = PathsJson::load(fixture_builder("rooted.paths.json")).unwrap();
    let root = absolute(&fixture_path("")).unwrap();

    let outputs = paths.resolve("outputs", &Arguments::new()).unwrap();
    assert_eq!(outputs.path(), root.join("outputs").join("latest"));

    // A single positional value fills RUN; the implicit root keeps its default
    let custom = paths
        .resolve("outputs", &Arguments::positional(["2024-01"]))
        .unwrap();
    assert_eq!(custom.path(), root.join("outputs").join("2024-01"));
}

#[test]
fn test_required_parameter_by_keyword() {
    let paths = PathsJson::load(fixture_builder("rooted.paths.json")).unwrap();
    let root = absolute(&fixture_path("")).unwrap();

    let err = paths
        .resolve_path("project_outputs", &Arguments::new())
        .unwrap_err();
    assert!(err.is_argument_error());

    let resolved = paths
        .resolve(
            "project_outputs",
            &Arguments::new().with_keyword("PROJ", "vaquero"),
        )
        .unwrap();
    assert_eq!(
        resolved.path(),
        root.join("outputs").join("latest").join("vaquero")
    );
}

#[test]
fn test_all_resolvable_paths_skips_required() {
    let paths = PathsJson::load(fixture_builder("rooted.paths.json")).unwrap();
    let resolvable = paths.all_resolvable_paths().unwrap();

    let names: Vec<&str> = resolvable.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["root", "outputs", "scratch"]);
}

#[test]
#[cfg(unix)]
fn test_drive_root() {
    let paths = PathsJson::load(fixture_builder("rooted.paths.json")).unwrap();
    assert_eq!(
        paths.resolve_path("scratch", &Arguments::new()).unwrap(),
        "/tmp/scratch"
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_cycle_fails_whole_load() {
    let err = PathsJson::load(fixture_builder("cycle.paths.json")).unwrap_err();
    assert!(format!("{err}").contains("Resolve failed on"));
}

#[test]
fn test_invalid_document_reports_every_violation() {
    let err = PathsJson::load(fixture_builder("invalid.paths.json")).unwrap_err();
    match err {
        Error::SchemaViolation { errors } => {
            assert_eq!(errors.len(), 3);
            assert!(errors.iter().any(|e| e.starts_with("/__ENV/VERSION")));
            assert!(errors.iter().any(|e| e.starts_with("/data_dir")));
            assert!(errors.iter().any(|e| e.starts_with("/raw_dir/1")));
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn test_validation_can_be_disabled() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definitions(temp_dir.path(), r#"{"data_dir": ["data", "a$b"]}"#);

    assert!(PathsJson::load(isolated_builder().with_file(&path)).is_err());
    let paths = PathsJson::load(isolated_builder().with_file(&path).with_validation(false)).unwrap();
    assert_eq!(
        paths.resolve_path("data_dir", &Arguments::new()).unwrap(),
        join(&["data", "a$b"])
    );
}

#[test]
fn test_undefined_reference() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definitions(temp_dir.path(), r#"{"raw_dir": ["$data_dir", "raw"]}"#);

    let err = PathsJson::load(isolated_builder().with_file(&path)).unwrap_err();
    assert!(matches!(err, Error::ResolveFailed { ref name } if name == "raw_dir"));
}

#[test]
fn test_no_definition_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = PathsJson::load(
        isolated_builder()
            .with_src_dir(temp_dir.path())
            .with_target_name("missing-7f3a.paths.json"),
    )
    .unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// Reload
// ============================================================================

#[test]
fn test_reload_picks_up_edits() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definitions(temp_dir.path(), r#"{"out": ["out"]}"#);
    let paths = PathsJson::load(isolated_builder().with_file(&path)).unwrap();

    fs::write(&path, r#"{"out": ["build", "out"]}"#).unwrap();
    paths.reload().unwrap();

    assert_eq!(
        paths.resolve_path("out", &Arguments::new()).unwrap(),
        join(&["build", "out"])
    );
}

#[test]
fn test_reload_failure_keeps_previous() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definitions(temp_dir.path(), r#"{"out": ["out"]}"#);
    let paths = PathsJson::load(isolated_builder().with_file(&path)).unwrap();

    fs::write(&path, "{ broken").unwrap();
    assert!(paths.reload().is_err());
    assert_eq!(paths.resolve_path("out", &Arguments::new()).unwrap(), "out");
}

#[test]
fn test_resolution_open_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_definitions(
        temp_dir.path(),
        r#"{"report": ["$$_IMPLICIT_ROOT", "reports", "summary.txt"]}"#,
    );
    let paths = PathsJson::load(isolated_builder().with_file(&path)).unwrap();

    let report = paths.resolve("report", &Arguments::new()).unwrap();
    assert!(!report.path().parent().unwrap().exists());

    fs::write(report.path(), "x").unwrap_err();
    drop(report.create().unwrap());
    assert!(report.path().exists());
}

#[test]
fn test_template_set_from_loaded_namespace() {
    let loaded = fixture_builder("sample.paths.json")
        .with_implicit_root(false)
        .build()
        .unwrap();
    let set = TemplateSet::from_namespace(&loaded.namespace).unwrap();
    let template = set.get("latest_data").unwrap();

    assert_eq!(template.arg_names(), ["VERSION".to_string()]);
    assert_eq!(template.skeleton(), join(&["data", "raw", "{}", "data.csv"]));
}
