//! Deterministic keyword extraction and role detection for job descriptions.
//!
//! The keyword pipeline runs one direction:
//!
//! 1. **Normalize**: fold diacritics, unify quotes and spaces ([`fold_text`])
//! 2. **Tokenize**: lower-case and split into terms that may carry `-/.+%` ([`tokenize`])
//! 3. **Stem and filter**: crude suffix stripping plus lexicon checks ([`stem`], [`Lexicon`])
//! 4. **Count**: unigram and bigram frequencies ([`build_frequencies`])
//! 5. **Rank**: bonus-weighted scores with a minimum-count threshold ([`rank_terms`])
//! 6. **Deduplicate**: collapse spelling variants, prefer phrases ([`dedup_ranked`])
//! 7. **Diff**: drop terms already in the resume ([`filter_missing`])
//!
//! Role detection ([`extract_role`]) is a separate heuristic sharing the light normalizer.
//!
//! Everything here is pure: no I/O, no shared mutable state. The built-in lexicon is built
//! once on first use and shared read-only.
//!
//! ```
//! let missing = keygap_engine::suggest_missing_keywords(
//!     Some("Social Media Coordinator: social media, SEO and SEO reporting"),
//!     Some("seo specialist"),
//!     Some(10),
//! );
//! assert!(missing.contains(&"social media".to_string()));
//! assert!(!missing.contains(&"seo".to_string()));
//! ```

#![warn(missing_docs)]

mod dedup;
mod extract;
mod frequency;
mod lexicon;
mod missing;
mod normalize;
mod rank;
mod role;
mod stem;
mod term;
mod tokenize;

pub use dedup::dedup_ranked;
pub use extract::{KeywordAnalysis, KeywordExtractor};
pub use frequency::{Frequencies, FrequencyMap, build_frequencies};
use keygap_config::DEFAULT_LIMIT;
pub use lexicon::{Lexicon, LexiconBuilder, MIN_TERM_LENGTH};
pub use missing::filter_missing;
pub use normalize::{fold_text, normalize_light};
pub use rank::{RankedTerm, rank_terms, term_bonus};
pub use role::{
    FormData, ResumeFields, RoleGuess, RoleInput, RoleSource, clean_title,
    extract_role_with_source,
};
pub use stem::stem;
pub use term::{TermKind, WeightedTerm};
pub use tokenize::tokenize;

/// Returns up to `limit` ranked job-description terms not found in the resume text.
///
/// Absent inputs read as empty and an absent limit means 80. Uses the shared built-in
/// lexicon and default thresholds; see [`KeywordExtractor`] for custom ones.
pub fn suggest_missing_keywords(
    job_text: Option<&str>,
    resume_text_lower: Option<&str>,
    limit: Option<usize>,
) -> Vec<String> {
    KeywordExtractor::with_defaults().suggest_missing(
        job_text.unwrap_or_default(),
        resume_text_lower.unwrap_or_default(),
        limit.unwrap_or(DEFAULT_LIMIT),
    )
}

/// Returns the best-guess role title, or an empty string.
pub fn extract_role(input: &RoleInput) -> String {
    extract_role_with_source(input).role
}
