//! Configuration file parsing.
//!
//! Parses individual `.keygap.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Extraction settings section.
    pub extract: Option<RawExtractSettings>,
    /// Lexicon additions section.
    pub lexicon: Option<RawLexiconSettings>,
}

/// Raw extraction settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExtractSettings {
    /// Minimum occurrence count.
    pub min_count: Option<usize>,
    /// Maximum number of returned terms.
    pub limit: Option<usize>,
    /// Candidate multiplier applied before the resume filter.
    pub candidate_factor: Option<usize>,
}

/// Raw lexicon additions.
///
/// Every list accepts either a single string or an array of strings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLexiconSettings {
    /// Load the Stopwords-ISO English list in addition to the built-in stopwords.
    pub iso_stopwords: Option<bool>,
    /// Extra stopwords.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub stopwords: Option<Vec<String>>,
    /// Extra disallowed fragments.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub junk: Option<Vec<String>>,
    /// Extra allowlist terms.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub allow: Option<Vec<String>>,
    /// Extra short acronyms.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub short_keep: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.extract.is_none());
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn test_parse_extract_settings() {
        let toml = r#"
[extract]
min_count = 3
limit = 25
candidate_factor = 4
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let extract = config.extract.unwrap();
        assert_eq!(extract.min_count, Some(3));
        assert_eq!(extract.limit, Some(25));
        assert_eq!(extract.candidate_factor, Some(4));
    }

    #[test]
    fn test_parse_partial_extract_settings() {
        let toml = r#"
[extract]
limit = 10
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let extract = config.extract.unwrap();
        assert_eq!(extract.limit, Some(10));
        assert!(extract.min_count.is_none());
        assert!(extract.candidate_factor.is_none());
    }

    #[test]
    fn test_parse_lexicon_lists() {
        let toml = r#"
[lexicon]
iso_stopwords = true
stopwords = ["synergy", "rockstar"]
allow = ["hubspot", "zapier"]
short_keep = ["okr"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let lexicon = config.lexicon.unwrap();
        assert_eq!(lexicon.iso_stopwords, Some(true));
        assert_eq!(
            lexicon.stopwords,
            Some(vec!["synergy".to_string(), "rockstar".to_string()])
        );
        assert_eq!(
            lexicon.allow,
            Some(vec!["hubspot".to_string(), "zapier".to_string()])
        );
        assert_eq!(lexicon.short_keep, Some(vec!["okr".to_string()]));
        assert!(lexicon.junk.is_none());
    }

    #[test]
    fn test_parse_lexicon_single_string() {
        let toml = r#"
[lexicon]
junk = "click here"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let lexicon = config.lexicon.unwrap();
        assert_eq!(lexicon.junk, Some(vec!["click here".to_string()]));
    }

    #[test]
    fn test_parse_root() {
        let config = parse_config_str("root = true\n", Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
    }

    #[test]
    fn test_parse_invalid_toml_reports_path() {
        let err = parse_config_str("[extract\nlimit = 3", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_parse_wrong_type_is_error() {
        let toml = r#"
[extract]
limit = "ten"
"#;
        let result = parse_config_str(toml, Path::new("test.toml"));
        assert!(result.is_err());
    }
}
