//! Deduplication of ranked terms.

use std::collections::HashSet;

use crate::RankedTerm;

/// Collapses spelling variants and prefers phrases over their words.
///
/// Walks `ranked` in order and keeps a term unless:
/// - a term with the same key (hyphens read as spaces) was already kept
/// - it is a unigram that appears as a word of any bigram in `ranked`, even one ranked
///   lower, so "social media" wins over "social" and "media"
///
/// Stops once `limit` terms are kept.
pub fn dedup_ranked(ranked: &[RankedTerm], limit: usize) -> Vec<RankedTerm> {
    let bigram_words: HashSet<&str> = ranked
        .iter()
        .filter(|r| !r.is_unigram())
        .flat_map(|r| r.text().split(' '))
        .collect();

    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for candidate in ranked {
        if kept.len() >= limit {
            break;
        }
        if candidate.is_unigram() && bigram_words.contains(candidate.text()) {
            continue;
        }
        if !seen.insert(candidate.text().replace('-', " ")) {
            continue;
        }
        kept.push(candidate.clone());
    }

    kept
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::WeightedTerm;

    fn ranked(terms: &[(&str, f32)]) -> Vec<RankedTerm> {
        terms
            .iter()
            .map(|(term, bonus)| RankedTerm::new(WeightedTerm::new(*term, 1, *bonus)))
            .collect()
    }

    fn texts(terms: &[RankedTerm]) -> Vec<&str> {
        terms.iter().map(RankedTerm::text).collect()
    }

    #[test]
    fn lower_ranked_bigram_suppresses_unigram() {
        let input = ranked(&[("social", 3.0), ("seo", 2.0), ("social media", 1.0)]);
        assert_eq!(texts(&dedup_ranked(&input, 10)), vec!["seo", "social media"]);
    }

    #[test]
    fn hyphen_and_space_variants_collapse() {
        let input = ranked(&[("go-to-market", 2.0), ("crm", 1.5), ("go to market", 1.0)]);
        assert_eq!(texts(&dedup_ranked(&input, 10)), vec!["go-to-market", "crm"]);
    }

    #[test]
    fn limit_respected() {
        let input = ranked(&[("seo", 3.0), ("crm", 2.0), ("ppc", 1.0)]);
        assert_eq!(texts(&dedup_ranked(&input, 2)), vec!["seo", "crm"]);
        assert!(dedup_ranked(&input, 0).is_empty());
    }

    #[test]
    fn unigram_not_suppressed_by_partial_word() {
        let input = ranked(&[("market", 2.0), ("marketing automation", 1.0)]);
        assert_eq!(
            texts(&dedup_ranked(&input, 10)),
            vec!["market", "marketing automation"]
        );
    }
}
