//! The keyword extraction pipeline.

use std::sync::Arc;

use keygap_config::{Config, ExtractSettings};
use serde::Serialize;
use tracing::debug;

use crate::{
    Frequencies, FrequencyMap, Lexicon, RankedTerm, build_frequencies, dedup_ranked,
    filter_missing, fold_text, rank_terms, tokenize,
};

/// Intermediate and final results of extracting keywords from one text.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordAnalysis {
    /// Number of tokens before filtering.
    pub token_count: usize,
    /// Accepted unigram counts.
    pub unigrams: FrequencyMap,
    /// Accepted bigram counts.
    pub bigrams: FrequencyMap,
    /// Every candidate that passed the threshold, by descending score.
    pub ranked: Vec<RankedTerm>,
    /// Deduplicated top terms.
    pub keywords: Vec<RankedTerm>,
}

impl KeywordAnalysis {
    /// Returns the deduplicated keyword strings.
    pub fn keyword_terms(&self) -> Vec<&str> {
        self.keywords.iter().map(RankedTerm::text).collect()
    }
}

/// Runs normalization, tokenization, counting, ranking and deduplication.
///
/// Holds a shared [`Lexicon`] and the numeric settings; cheap to clone and safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Term sets used for filtering and scoring.
    lexicon: Arc<Lexicon>,
    /// Thresholds and limits.
    settings: ExtractSettings,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl KeywordExtractor {
    /// Creates an extractor from a lexicon and settings.
    pub fn new(lexicon: Arc<Lexicon>, settings: ExtractSettings) -> Self {
        Self { lexicon, settings }
    }

    /// Creates an extractor with the shared default lexicon and default settings.
    pub fn with_defaults() -> Self {
        Self::new(Lexicon::shared(), ExtractSettings::default())
    }

    /// Creates an extractor from loaded configuration.
    ///
    /// Reuses the shared lexicon when the configuration adds no terms.
    pub fn from_config(config: &Config) -> Self {
        let lexicon = if config.lexicon.is_empty() {
            Lexicon::shared()
        } else {
            Arc::new(Lexicon::from_settings(&config.lexicon))
        };
        Self::new(lexicon, config.extract.clone())
    }

    /// The lexicon in use.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The settings in use.
    pub fn settings(&self) -> &ExtractSettings {
        &self.settings
    }

    /// Folds, lower-cases and tokenizes text.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        tokenize(&fold_text(text).to_lowercase())
    }

    /// Runs the pipeline and keeps intermediate results, deduplicating to `limit` terms.
    pub fn analyze_with_limit(&self, text: &str, limit: usize) -> KeywordAnalysis {
        let tokens = self.tokens(text);
        let frequencies = build_frequencies(&tokens, &self.lexicon);
        let ranked = rank_terms(&frequencies, &self.lexicon, self.settings.min_count);
        let keywords = dedup_ranked(&ranked, limit);
        let Frequencies { unigrams, bigrams } = frequencies;

        debug!(
            tokens = tokens.len(),
            unigrams = unigrams.len(),
            bigrams = bigrams.len(),
            ranked = ranked.len(),
            keywords = keywords.len(),
            "extracted keywords"
        );

        KeywordAnalysis {
            token_count: tokens.len(),
            unigrams,
            bigrams,
            ranked,
            keywords,
        }
    }

    /// Runs the pipeline with the configured limit.
    pub fn analyze(&self, text: &str) -> KeywordAnalysis {
        self.analyze_with_limit(text, self.settings.limit)
    }

    /// Returns up to `limit` deduplicated ranked terms with their scores.
    pub fn ranked_keywords(&self, text: &str, limit: usize) -> Vec<RankedTerm> {
        self.analyze_with_limit(text, limit).keywords
    }

    /// Returns up to `limit` deduplicated ranked terms.
    pub fn keywords(&self, text: &str, limit: usize) -> Vec<String> {
        self.ranked_keywords(text, limit)
            .into_iter()
            .map(|r| r.term.term)
            .collect()
    }

    /// Returns up to `limit` ranked job-description terms that the resume lacks.
    ///
    /// Deduplication keeps `limit * candidate_factor` terms so that terms already in the
    /// resume can be dropped without starving the result.
    pub fn suggest_missing(&self, job_text: &str, resume_text: &str, limit: usize) -> Vec<String> {
        let candidates = self.ranked_keywords(job_text, self.settings.candidate_limit(limit));
        let missing = filter_missing(candidates.iter().map(RankedTerm::text), resume_text, limit);
        debug!(
            candidates = candidates.len(),
            missing = missing.len(),
            limit,
            "filtered against resume"
        );
        missing
    }
}
