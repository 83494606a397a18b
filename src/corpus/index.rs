use std::sync::RwLock;

use tracing::debug;

use super::scoring::Corpus;
use crate::types::relevance::ScoreBreakdown;

/// Shared TF-IDF corpus index.
///
/// The corpus is the only shared mutable state in the crate. An `RwLock`
/// gives concurrent readers and an exclusive writer, so a scoring call never
/// observes a half-appended entry. A poisoned lock is recovered into its
/// inner value rather than panicking; no append leaves the corpus in a
/// partial state.
#[derive(Debug, Default)]
pub struct TfIdfIndex {
    corpus: RwLock<Corpus>,
}

impl TfIdfIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one reference document.
    ///
    /// Every call appends exactly one corpus entry, including for text that
    /// normalizes to zero tokens.
    pub fn add_document(&self, text: &str) {
        let mut corpus = self.corpus.write().unwrap_or_else(|e| e.into_inner());
        corpus.push(text);
        debug!(corpus_size = corpus.len(), "corpus entry added");
    }

    /// Number of ingested entries.
    pub fn len(&self) -> usize {
        self.corpus.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// TF-IDF relevance of `text` against the current corpus.
    ///
    /// 0.0 for an empty corpus or a candidate that normalizes to zero
    /// tokens; otherwise a finite, non-negative sum over the candidate's
    /// distinct terms. Never mutates the corpus, so repeated and concurrent
    /// calls are safe and bit-identical for unchanged state.
    pub fn score(&self, text: &str) -> f64 {
        self.score_breakdown(text).total()
    }

    /// Like [`score`](Self::score), but keeps the per-term contributions.
    pub fn score_breakdown(&self, text: &str) -> ScoreBreakdown {
        let corpus = self.corpus.read().unwrap_or_else(|e| e.into_inner());
        let breakdown = corpus.breakdown(text);
        debug!(
            corpus_size = breakdown.corpus_size,
            candidate_tokens = breakdown.candidate_tokens,
            "scored candidate"
        );
        breakdown
    }
}
