//! Term scoring and ranking.
//!
//! Each candidate gets a bonus multiplier:
//! - base 1.0 for a unigram, 1.25 for a bigram
//! - plus 0.25 when the term (hyphens read as spaces) is on the domain allowlist
//! - plus 0.25 when the term is a short-keep acronym
//!
//! and scores `count * bonus`. Terms below the minimum count are dropped unless they are
//! allowlisted or short-keep acronyms.

use serde::Serialize;
use tracing::trace;

use crate::{Frequencies, Lexicon, TermKind, WeightedTerm};

/// Bonus added for allowlisted terms.
const ALLOWLIST_BONUS: f32 = 0.25;
/// Bonus added for short-keep acronyms.
const SHORT_KEEP_BONUS: f32 = 0.25;

/// A term with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    /// The weighted term.
    #[serde(flatten)]
    pub term: WeightedTerm,
    /// The computed score.
    pub score: f32,
}

impl RankedTerm {
    /// Creates a new ranked term with computed score.
    pub fn new(term: WeightedTerm) -> Self {
        let score = term.score();
        Self { term, score }
    }

    /// The term text.
    pub fn text(&self) -> &str {
        &self.term.term
    }

    /// True for unigrams.
    pub fn is_unigram(&self) -> bool {
        self.term.kind == TermKind::Unigram
    }
}

/// Computes the bonus multiplier for a term.
pub fn term_bonus(term: &str, kind: TermKind, lexicon: &Lexicon) -> f32 {
    let mut bonus = kind.base_bonus();
    if lexicon.is_allowlisted(term) {
        bonus += ALLOWLIST_BONUS;
    }
    if lexicon.is_short_keep(term) {
        bonus += SHORT_KEEP_BONUS;
    }
    bonus
}

/// Scores, thresholds and sorts all candidate terms.
///
/// Candidates are listed unigrams first, then bigrams, each in first-seen order, and then
/// stably sorted by descending score. Equal scores therefore keep that order.
pub fn rank_terms(frequencies: &Frequencies, lexicon: &Lexicon, min_count: usize) -> Vec<RankedTerm> {
    let candidates = frequencies
        .unigrams
        .iter()
        .map(|(term, count)| (term, count, TermKind::Unigram))
        .chain(
            frequencies
                .bigrams
                .iter()
                .map(|(term, count)| (term, count, TermKind::Bigram)),
        );

    let mut ranked: Vec<RankedTerm> = candidates
        .filter_map(|(term, count, kind)| {
            let exempt = lexicon.is_allowlisted(term) || lexicon.is_short_keep(term);
            if count < min_count && !exempt {
                trace!(term, count, min_count, "below minimum count");
                return None;
            }
            let bonus = term_bonus(term, kind, lexicon);
            trace!(term, count, bonus, "ranked");
            Some(RankedTerm::new(WeightedTerm::new(term, count, bonus)))
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
