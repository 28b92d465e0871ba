//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{collections::HashSet, fmt};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `extract.limit` is zero, so nothing is ever suggested.
    ZeroLimit,
    /// `extract.min_count` is zero, so every candidate passes the threshold.
    ZeroMinCount,
    /// `extract.candidate_factor` is zero and is treated as one.
    ZeroCandidateFactor,
    /// A term is both kept (allowlist or short-keep) and blocked (stopwords or junk).
    ConflictingTerm {
        /// The conflicting term.
        term: String,
        /// The list that tries to keep the term.
        kept_by: &'static str,
        /// The list that blocks the term.
        blocked_by: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLimit => write!(f, "extract.limit is 0; no keywords will be suggested"),
            Self::ZeroMinCount => write!(
                f,
                "extract.min_count is 0; every candidate term passes the threshold"
            ),
            Self::ZeroCandidateFactor => {
                write!(f, "extract.candidate_factor is 0; treating it as 1")
            }
            Self::ConflictingTerm {
                term,
                kept_by,
                blocked_by,
            } => write!(
                f,
                "term '{term}' is listed in lexicon.{kept_by} and lexicon.{blocked_by}; \
                 it will never be suggested"
            ),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.extract.limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit);
    }
    if config.extract.min_count == 0 {
        warnings.push(ConfigWarning::ZeroMinCount);
    }
    if config.extract.candidate_factor == 0 {
        warnings.push(ConfigWarning::ZeroCandidateFactor);
    }

    let lexicon = &config.lexicon;
    let blocked: [(&'static str, HashSet<&str>); 2] = [
        ("stopwords", lexicon.stopwords.iter().map(String::as_str).collect()),
        ("junk", lexicon.junk.iter().map(String::as_str).collect()),
    ];
    let kept: [(&'static str, &[String]); 2] = [
        ("allow", &lexicon.allow),
        ("short_keep", &lexicon.short_keep),
    ];

    for (kept_by, terms) in kept {
        for term in terms {
            for (blocked_by, set) in &blocked {
                if set.contains(term.as_str()) {
                    warnings.push(ConfigWarning::ConflictingTerm {
                        term: term.clone(),
                        kept_by,
                        blocked_by,
                    });
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtractSettings, LexiconSettings};

    #[test]
    fn test_default_config_has_no_warnings() {
        assert!(validate_config(&Config::default()).is_empty());
    }

    #[test]
    fn test_zero_values_warn() {
        let config = Config {
            extract: ExtractSettings {
                min_count: 0,
                limit: 0,
                candidate_factor: 0,
            },
            ..Config::default()
        };
        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::ZeroLimit,
                ConfigWarning::ZeroMinCount,
                ConfigWarning::ZeroCandidateFactor,
            ]
        );
    }

    #[test]
    fn test_conflicting_terms_warn() {
        let config = Config {
            lexicon: LexiconSettings {
                stopwords: vec!["crm".into()],
                junk: vec!["synergy".into()],
                allow: vec!["synergy".into(), "hubspot".into()],
                short_keep: vec!["crm".into()],
                ..LexiconSettings::default()
            },
            ..Config::default()
        };
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.contains(&ConfigWarning::ConflictingTerm {
            term: "synergy".into(),
            kept_by: "allow",
            blocked_by: "junk",
        }));
        assert!(warnings.contains(&ConfigWarning::ConflictingTerm {
            term: "crm".into(),
            kept_by: "short_keep",
            blocked_by: "stopwords",
        }));
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::ConflictingTerm {
            term: "crm".into(),
            kept_by: "short_keep",
            blocked_by: "stopwords",
        };
        assert_eq!(
            warning.to_string(),
            "term 'crm' is listed in lexicon.short_keep and lexicon.stopwords; \
             it will never be suggested"
        );
    }
}
