use serde::{Deserialize, Serialize};

/// Per-term component of a TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    /// Occurrences of the term in the candidate text.
    pub count: usize,
    pub tf: f64,
    pub idf: f64,
    pub weight: f64,
}

/// Explanation for how a candidate document was scored against the corpus.
///
/// Terms appear in first-occurrence order within the candidate text, so two
/// breakdowns over identical input and corpus state compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub corpus_size: usize,
    pub candidate_tokens: usize,
    pub terms: Vec<TermWeight>,
}

impl ScoreBreakdown {
    /// Aggregate TF-IDF value: the sum of the term weights, in the order
    /// they are stored. Empty breakdowns sum to 0.0.
    pub fn total(&self) -> f64 {
        self.terms.iter().map(|t| t.weight).sum()
    }
}
