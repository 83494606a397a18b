use std::collections::{BTreeMap, HashSet};

use crate::normalize;
use crate::types::relevance::{ScoreBreakdown, TermWeight};

/// One ingested corpus entry: an immutable token multiset.
#[derive(Debug, Clone, Default)]
pub(crate) struct CorpusEntry {
    counts: BTreeMap<String, usize>,
}

impl CorpusEntry {
    fn from_tokens(tokens: Vec<String>) -> Self {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        CorpusEntry { counts }
    }

    fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }
}

/// Append-only reference corpus.
///
/// Entries are never mutated in place; re-ingesting the same source text is
/// an additive operation, not an update. An entry with zero tokens is a
/// valid corpus member and still counts toward the corpus size.
#[derive(Debug, Default)]
pub(crate) struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub(crate) fn push(&mut self, text: &str) {
        let tokens = normalize::tokenize(text);
        self.entries.push(CorpusEntry::from_tokens(tokens));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries containing `term` at least once.
    fn document_frequency(&self, term: &str) -> usize {
        self.entries.iter().filter(|e| e.contains(term)).count()
    }

    /// Score `text` against the corpus, keeping the per-term contributions.
    ///
    /// `tf(t) = count(t) / total_tokens` and
    /// `idf(t) = ln((N + 1) / (1 + df(t)))`; the `+1` smoothing on both
    /// sides keeps every factor finite and non-negative, whether `t` is
    /// absent from the corpus or present in all of it. An empty corpus or a
    /// candidate with zero tokens yields an empty breakdown (total 0.0).
    pub(crate) fn breakdown(&self, text: &str) -> ScoreBreakdown {
        let tokens = normalize::tokenize(text);
        let total_tokens = tokens.len();

        let mut terms = Vec::new();
        if !self.entries.is_empty() && total_tokens > 0 {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for token in &tokens {
                *counts.entry(token).or_insert(0) += 1;
            }

            let corpus_size = self.entries.len() as f64;

            // Distinct terms are visited in first-occurrence order so the
            // floating-point sum is bit-identical across repeated calls.
            let mut seen = HashSet::new();
            for token in &tokens {
                if !seen.insert(token.as_str()) {
                    continue;
                }
                let count = counts[token.as_str()];
                let tf = count as f64 / total_tokens as f64;
                let df = self.document_frequency(token) as f64;
                let idf = ((corpus_size + 1.0) / (1.0 + df)).ln();
                terms.push(TermWeight {
                    term: token.clone(),
                    count,
                    tf,
                    idf,
                    weight: tf * idf,
                });
            }
        }

        ScoreBreakdown {
            corpus_size: self.entries.len(),
            candidate_tokens: total_tokens,
            terms,
        }
    }
}
