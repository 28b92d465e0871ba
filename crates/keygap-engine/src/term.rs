//! Candidate term types.
//!
//! A term is a lower-cased, stemmed unigram or two stems joined by a single space.

use std::fmt;

use serde::Serialize;

/// Whether a term is a single word or a two-word phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// A single stemmed token.
    Unigram,
    /// Two adjacent stemmed tokens joined by a space.
    Bigram,
}

impl TermKind {
    /// Classifies a term by whether it contains a space.
    pub fn of(term: &str) -> Self {
        if term.contains(' ') {
            Self::Bigram
        } else {
            Self::Unigram
        }
    }

    /// Returns the base bonus multiplier for this kind.
    ///
    /// Phrases are more specific than single words, so bigrams start higher.
    pub fn base_bonus(self) -> f32 {
        match self {
            Self::Unigram => 1.0,
            Self::Bigram => 1.25,
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unigram => write!(f, "unigram"),
            Self::Bigram => write!(f, "bigram"),
        }
    }
}

/// A candidate term with its frequency and bonus multiplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedTerm {
    /// The term (lower-cased, stemmed).
    pub term: String,
    /// Unigram or bigram.
    pub kind: TermKind,
    /// How many times the term occurred.
    pub count: usize,
    /// Multiplier applied to the count.
    pub bonus: f32,
}

impl WeightedTerm {
    /// Creates a weighted term, classifying its kind from the text.
    pub fn new(term: impl Into<String>, count: usize, bonus: f32) -> Self {
        let term = term.into();
        Self {
            kind: TermKind::of(&term),
            term,
            count,
            bonus,
        }
    }

    /// Computes `count * bonus`.
    pub fn score(&self) -> f32 {
        self.count as f32 * self.bonus
    }
}
