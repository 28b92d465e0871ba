//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules.

use std::{collections::HashSet, path::PathBuf};

use crate::{
    Config, ExtractSettings, LexiconSettings,
    parse::{RawConfig, RawExtractSettings, RawLexiconSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Lexicon lists: unioned across all files, highest precedence entries first
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let extract = merge_extract_settings(configs);
    let lexicon = merge_lexicon_settings(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Config {
        extract,
        lexicon,
        config_root,
    }
}

/// Merges extraction settings, taking first defined value for each field.
fn merge_extract_settings(configs: &[ParsedConfig]) -> ExtractSettings {
    let mut result = ExtractSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref extract) = parsed.config.extract {
            apply_raw_extract(&mut result, extract);
        }
    }

    result
}

/// Applies raw extraction settings to result, overwriting any present values.
fn apply_raw_extract(result: &mut ExtractSettings, raw: &RawExtractSettings) {
    if let Some(v) = raw.min_count {
        result.min_count = v;
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.candidate_factor {
        result.candidate_factor = v;
    }
}

/// Merges lexicon additions.
///
/// `iso_stopwords` follows scalar precedence; the term lists are unioned.
fn merge_lexicon_settings(configs: &[ParsedConfig]) -> LexiconSettings {
    let mut result = LexiconSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref lexicon) = parsed.config.lexicon
            && let Some(v) = lexicon.iso_stopwords
        {
            result.iso_stopwords = v;
        }
    }

    let raws: Vec<&RawLexiconSettings> = configs
        .iter()
        .filter_map(|parsed| parsed.config.lexicon.as_ref())
        .collect();

    result.stopwords = union_lists(raws.iter().map(|raw| raw.stopwords.as_deref()));
    result.junk = union_lists(raws.iter().map(|raw| raw.junk.as_deref()));
    result.allow = union_lists(raws.iter().map(|raw| raw.allow.as_deref()));
    result.short_keep = union_lists(raws.iter().map(|raw| raw.short_keep.as_deref()));

    result
}

/// Concatenates optional term lists, lower-casing and dropping blanks and duplicates.
fn union_lists<'a>(lists: impl Iterator<Item = Option<&'a [String]>>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for term in lists.flatten().flatten() {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && seen.insert(term.clone()) {
            out.push(term);
        }
    }
    out
}
