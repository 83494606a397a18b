use std::collections::BTreeMap;

use thiserror::Error;

/// Term → single annotation (lemma, stem, root, segmentation).
pub type TermAnnotations = BTreeMap<String, String>;

/// Term → part-of-speech tags.
pub type TermTags = BTreeMap<String, Vec<String>>;

/// Term → association statistic (PMI, PKL).
pub type TermStatistics = BTreeMap<String, f64>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Analyzer unavailable: {0}")]
    Unavailable(String),
    #[error("Analysis failed: {0}")]
    Failed(String),
}

/// External linguistic services.
///
/// The algorithms behind these are black boxes to the analytics core; the
/// result maps are `BTreeMap` so callers iterate them deterministically.
pub trait LinguisticAnalyzer {
    fn lemmatize(&self, text: &str) -> Result<TermAnnotations, AnalysisError>;

    fn extract_parts_of_speech(&self, text: &str) -> Result<TermTags, AnalysisError>;

    fn extract_roots(&self, text: &str) -> Result<TermAnnotations, AnalysisError>;

    fn stem(&self, text: &str) -> Result<TermAnnotations, AnalysisError>;

    fn segment(&self, text: &str) -> Result<TermAnnotations, AnalysisError>;

    fn transliterate(&self, text: &str) -> Result<String, AnalysisError>;

    fn pmi(&self, text: &str) -> Result<TermStatistics, AnalysisError>;

    fn pkl(&self, text: &str) -> Result<TermStatistics, AnalysisError>;
}
