//! Word list input types and ranking.
//!
//! The analysis service hands back an unordered `(word, weight)` list; the
//! engine ranks it (stable descending sort by weight) and truncates to the
//! configured display cap before any layout math runs.

use serde::{Deserialize, Serialize};

/// Default display cap when the frontend does not specify one.
pub const DEFAULT_MAX_DISPLAYED: usize = 25;

/// A word with its importance score, as received from the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    pub word: String,
    pub weight: f64,
}

/// A word after ranking. Rank 0 is the highest weight; ties keep the order
/// the analysis service emitted them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub weight: f64,
    pub rank: usize,
}

/// Sort descending by weight (stable) and keep the top `max_displayed`.
pub fn rank_words(mut words: Vec<WordWeight>, max_displayed: usize) -> Vec<RankedWord> {
    words.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    words.truncate(max_displayed);
    words
        .into_iter()
        .enumerate()
        .map(|(rank, w)| RankedWord {
            word: w.word,
            weight: w.weight,
            rank,
        })
        .collect()
}

/// Largest weight in the list, or 1.0 for an empty or all-zero list so the
/// size normalizer never divides by zero.
pub fn max_weight(words: &[RankedWord]) -> f64 {
    let max = words.iter().fold(0.0_f64, |m, w| m.max(w.weight));
    if max > 0.0 { max } else { 1.0 }
}
