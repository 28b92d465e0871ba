//! Unigram and bigram frequency counting.

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{Lexicon, stem::stem};

/// Term counts that remember the order in which terms were first seen.
///
/// Iteration follows first-seen order, which makes ranking ties reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    /// Count per term.
    counts: HashMap<String, usize>,
    /// Terms in first-seen order.
    order: Vec<String>,
}

impl FrequencyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of a term.
    pub fn increment(&mut self, term: &str) {
        if let Some(count) = self.counts.get_mut(term) {
            *count += 1;
            return;
        }
        self.counts.insert(term.to_string(), 1);
        self.order.push(term.to_string());
    }

    /// Returns the count for a term, or 0.
    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Iterates `(term, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|term| (term.as_str(), self.counts.get(term).copied().unwrap_or(0)))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no term has been counted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (term, count) in self.iter() {
            map.serialize_entry(term, &count)?;
        }
        map.end()
    }
}

/// Unigram and bigram counts for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frequencies {
    /// Accepted single stems.
    pub unigrams: FrequencyMap,
    /// Accepted adjacent stem pairs, joined by a space.
    pub bigrams: FrequencyMap,
}

/// Counts unigrams and bigrams over a token sequence.
///
/// Every token is stemmed once and checked with [`Lexicon::accepts`]. Accepted stems are
/// counted as unigrams. Each adjacent pair in the unfiltered sequence is counted as a
/// bigram when both halves are accepted, the stems differ, and the joined form is not junk.
/// A rejected token between two accepted ones therefore breaks the phrase.
pub fn build_frequencies(tokens: &[String], lexicon: &Lexicon) -> Frequencies {
    let stems: Vec<(String, bool)> = tokens
        .iter()
        .map(|raw| {
            let stemmed = stem(raw, lexicon);
            let accepted = lexicon.accepts(raw, &stemmed);
            (stemmed.into_owned(), accepted)
        })
        .collect();

    let mut frequencies = Frequencies::default();

    for (stemmed, accepted) in &stems {
        if *accepted {
            frequencies.unigrams.increment(stemmed);
        }
    }

    for pair in stems.windows(2) {
        let [(first, first_ok), (second, second_ok)] = pair else {
            continue;
        };
        if !first_ok || !second_ok || first == second {
            continue;
        }
        let joined = format!("{first} {second}");
        if lexicon.is_junk(&joined) {
            continue;
        }
        frequencies.bigrams.increment(&joined);
    }

    frequencies
}
