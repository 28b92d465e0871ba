//! Configuration system for keygap.
//!
//! keygap uses TOML configuration files named `.keygap.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.keygap.toml` files found, then loading `~/.keygap.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
    require_global_config_path,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawExtractSettings, RawLexiconSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default minimum occurrence count for a term to be suggested.
pub const DEFAULT_MIN_COUNT: usize = 2;
/// Default maximum number of suggested terms.
pub const DEFAULT_LIMIT: usize = 80;
/// Default multiplier applied to the limit before filtering against the resume.
pub const DEFAULT_CANDIDATE_FACTOR: usize = 2;

/// Top-level merged configuration for keygap.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.keygap.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Keyword extraction settings.
    pub extract: ExtractSettings,
    /// Additions to the built-in lexicon.
    pub lexicon: LexiconSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.keygap.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.keygap.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.keygap.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - Zero limits, thresholds or candidate factors
    /// - Allowlisted or short-keep terms that are also configured as stopwords or junk
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.keygap.toml` file. Lexicon lists are sorted so
    /// the output is deterministic.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            extract: self.extract.clone(),
            lexicon: self.lexicon.sorted(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Settings for keyword extraction and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Terms seen fewer times than this are dropped unless allowlisted.
    pub min_count: usize,
    /// Maximum number of terms to return.
    pub limit: usize,
    /// How many ranked candidates per output slot survive deduplication before the resume
    /// filter runs.
    pub candidate_factor: usize,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            min_count: DEFAULT_MIN_COUNT,
            limit: DEFAULT_LIMIT,
            candidate_factor: DEFAULT_CANDIDATE_FACTOR,
        }
    }
}

impl ExtractSettings {
    /// Number of deduplicated candidates to keep for a given output limit.
    pub fn candidate_limit(&self, limit: usize) -> usize {
        limit.saturating_mul(self.candidate_factor.max(1))
    }
}

/// User additions to the built-in lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LexiconSettings {
    /// Also load the Stopwords-ISO English list.
    pub iso_stopwords: bool,
    /// Extra stopwords.
    pub stopwords: Vec<String>,
    /// Extra disallowed fragments.
    pub junk: Vec<String>,
    /// Extra domain allowlist terms.
    pub allow: Vec<String>,
    /// Extra short acronyms exempt from length filtering and stemming.
    pub short_keep: Vec<String>,
}

impl LexiconSettings {
    /// Returns true when no additions are configured.
    pub fn is_empty(&self) -> bool {
        !self.iso_stopwords
            && self.stopwords.is_empty()
            && self.junk.is_empty()
            && self.allow.is_empty()
            && self.short_keep.is_empty()
    }

    /// Returns a copy with every list sorted, for stable output.
    fn sorted(&self) -> Self {
        let sort = |list: &[String]| {
            let mut list = list.to_vec();
            list.sort();
            list
        };
        Self {
            iso_stopwords: self.iso_stopwords,
            stopwords: sort(&self.stopwords),
            junk: sort(&self.junk),
            allow: sort(&self.allow),
            short_keep: sort(&self.short_keep),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Extraction settings.
    extract: ExtractSettings,
    /// Lexicon additions.
    lexicon: LexiconSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_settings_defaults() {
        let extract = ExtractSettings::default();
        assert_eq!(extract.min_count, 2);
        assert_eq!(extract.limit, 80);
        assert_eq!(extract.candidate_factor, 2);
    }

    #[test]
    fn test_candidate_limit() {
        let extract = ExtractSettings::default();
        assert_eq!(extract.candidate_limit(80), 160);
        assert_eq!(extract.candidate_limit(0), 0);

        let degenerate = ExtractSettings {
            candidate_factor: 0,
            ..ExtractSettings::default()
        };
        assert_eq!(degenerate.candidate_limit(10), 10);
    }

    #[test]
    fn test_lexicon_settings_default_is_empty() {
        assert!(LexiconSettings::default().is_empty());

        let with_iso = LexiconSettings {
            iso_stopwords: true,
            ..LexiconSettings::default()
        };
        assert!(!with_iso.is_empty());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.config_root.is_none());
        assert!(config.lexicon.is_empty());
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.lexicon.allow = vec!["zapier".into(), "airtable".into()];
        let toml = config.settings_to_toml();

        assert!(toml.contains("[extract]"));
        assert!(toml.contains("[lexicon]"));
        assert!(toml.contains("min_count = 2"));
        assert!(toml.contains("limit = 80"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        let allow = parsed["lexicon"]["allow"].as_array().unwrap();
        assert_eq!(allow[0].as_str(), Some("airtable"));
        assert_eq!(allow[1].as_str(), Some("zapier"));
    }
}
