//! Integration tests for keygap-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge -> validate.

// Integration test crates have no cfg(test) module to live in
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use keygap_config::{
    Config, ConfigError, ConfigWarning, DEFAULT_CANDIDATE_FACTOR, DEFAULT_LIMIT,
    DEFAULT_MIN_COUNT, local_template, parse_config_str,
};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Temporary root removed on drop.
    root: tempfile::TempDir,
}

impl TestEnv {
    /// Creates an empty environment.
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Root of the environment.
    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_from_files_empty_list() {
    let config = Config::load_from_files(&[]).unwrap();

    assert!(config.config_root.is_none());
    assert_eq!(config.extract.limit, DEFAULT_LIMIT);
    assert_eq!(config.extract.min_count, DEFAULT_MIN_COUNT);
    assert_eq!(config.extract.candidate_factor, DEFAULT_CANDIDATE_FACTOR);
    assert!(config.lexicon.is_empty());
}

#[test]
fn test_load_single_root_config() {
    let env = TestEnv::new();
    env.create_file(
        ".keygap.toml",
        r#"
root = true

[extract]
limit = 25

[lexicon]
allow = "zapier"
short_keep = ["rpa", "OKR"]
"#,
    );

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.extract.limit, 25);
    assert_eq!(config.extract.min_count, DEFAULT_MIN_COUNT);
    assert_eq!(config.lexicon.allow, vec!["zapier"]);
    assert_eq!(config.lexicon.short_keep, vec!["rpa", "okr"]);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
}

#[test]
fn test_load_nested_configs_merging() {
    let env = TestEnv::new();
    let subdir = env.create_dir("project/subdir");

    env.create_file(
        ".keygap.toml",
        r#"
root = true

[extract]
limit = 40
min_count = 3

[lexicon]
stopwords = ["rockstar"]
allow = ["hubspot"]
"#,
    );

    env.create_file(
        "project/.keygap.toml",
        r#"
[extract]
limit = 10

[lexicon]
stopwords = ["ninja", "rockstar"]
"#,
    );

    let config = Config::load(&subdir).unwrap();

    // Closest file wins for scalars.
    assert_eq!(config.extract.limit, 10);
    // Unset in the project file, inherited from the parent.
    assert_eq!(config.extract.min_count, 3);
    // Lists are unioned, closest entries first, without duplicates.
    assert_eq!(config.lexicon.stopwords, vec!["ninja", "rockstar"]);
    assert_eq!(config.lexicon.allow, vec!["hubspot"]);
    assert_eq!(
        config.config_root.as_deref(),
        Some(env.path().join("project").as_path())
    );
}

#[test]
fn test_root_config_stops_discovery() {
    let env = TestEnv::new();
    let project = env.create_dir("project");

    env.create_file(".keygap.toml", "[extract]\nlimit = 3\n");
    env.create_file("project/.keygap.toml", "root = true\n");

    let config = Config::load(&project).unwrap();

    assert_eq!(config.extract.limit, DEFAULT_LIMIT);
}

#[test]
fn test_load_from_files_precedence() {
    let env = TestEnv::new();
    let near = env.create_file(
        "near.toml",
        "[extract]\ncandidate_factor = 4\n[lexicon]\niso_stopwords = false\n",
    );
    let far = env.create_file(
        "far.toml",
        "[extract]\ncandidate_factor = 1\nmin_count = 5\n[lexicon]\niso_stopwords = true\n",
    );

    let config = Config::load_from_files(&[near, far]).unwrap();

    assert_eq!(config.extract.candidate_factor, 4);
    assert_eq!(config.extract.min_count, 5);
    assert!(!config.lexicon.iso_stopwords);
}

#[test]
fn test_load_error_invalid_toml() {
    let env = TestEnv::new();
    let path = env.create_file(".keygap.toml", "[extract\nlimit = 1\n");

    let err = Config::load_from_files(&[path.clone()]).unwrap_err();

    match err {
        ConfigError::ParseToml { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_error_wrong_type() {
    let env = TestEnv::new();
    let path = env.create_file(".keygap.toml", "[extract]\nlimit = \"many\"\n");

    assert!(matches!(
        Config::load_from_files(&[path]),
        Err(ConfigError::ParseToml { .. })
    ));
}

#[test]
fn test_load_error_missing_file() {
    let env = TestEnv::new();
    let path = env.path().join("absent.toml");

    assert!(matches!(
        Config::load_from_files(&[path]),
        Err(ConfigError::ReadFile { .. })
    ));
}

#[test]
fn test_validate_reports_conflicts_across_files() {
    let env = TestEnv::new();
    let near = env.create_file("near.toml", "[lexicon]\nallow = \"seo\"\n");
    let far = env.create_file("far.toml", "[lexicon]\njunk = [\"seo\"]\n");

    let config = Config::load_from_files(&[near, far]).unwrap();
    let warnings = config.validate();

    assert_eq!(
        warnings,
        vec![ConfigWarning::ConflictingTerm {
            term: "seo".into(),
            kept_by: "allow",
            blocked_by: "junk",
        }]
    );
}

#[test]
fn test_settings_to_toml_round_trips() {
    let env = TestEnv::new();
    let path = env.create_file(
        ".keygap.toml",
        "[extract]\nlimit = 12\n[lexicon]\nallow = [\"zapier\", \"airtable\"]\n",
    );
    let config = Config::load_from_files(&[path]).unwrap();

    let rendered = config.settings_to_toml();
    let reparsed = parse_config_str(&rendered, Path::new("rendered.toml")).unwrap();

    let extract = reparsed.extract.unwrap();
    assert_eq!(extract.limit, Some(12));
    let lexicon = reparsed.lexicon.unwrap();
    assert_eq!(
        lexicon.allow,
        Some(vec!["airtable".to_string(), "zapier".to_string()])
    );
}

#[test]
fn test_local_template_is_inert() {
    let env = TestEnv::new();
    let path = env.create_file(".keygap.toml", &local_template());

    let config = Config::load_from_files(&[path]).unwrap();

    assert_eq!(config.extract.limit, DEFAULT_LIMIT);
    assert!(config.lexicon.is_empty());
}
