use analytics_core::normalize;
use analytics_core::store::{
    AnalysisError, LinguisticAnalyzer, TermAnnotations, TermStatistics, TermTags,
};

/// Canned analyzer double; real linguistic services live outside the crate.
struct CannedAnalyzer;

impl LinguisticAnalyzer for CannedAnalyzer {
    fn lemmatize(&self, text: &str) -> Result<TermAnnotations, AnalysisError> {
        Ok(normalize::tokenize(text)
            .into_iter()
            .map(|t| {
                let lemma = format!("lemma:{t}");
                (t, lemma)
            })
            .collect())
    }

    fn extract_parts_of_speech(&self, text: &str) -> Result<TermTags, AnalysisError> {
        Ok(normalize::tokenize(text)
            .into_iter()
            .map(|t| (t, vec!["NOUN".to_string()]))
            .collect())
    }

    fn extract_roots(&self, text: &str) -> Result<TermAnnotations, AnalysisError> {
        self.lemmatize(text)
    }

    fn stem(&self, text: &str) -> Result<TermAnnotations, AnalysisError> {
        self.lemmatize(text)
    }

    fn segment(&self, text: &str) -> Result<TermAnnotations, AnalysisError> {
        self.lemmatize(text)
    }

    fn transliterate(&self, text: &str) -> Result<String, AnalysisError> {
        Ok(format!("translit:{text}"))
    }

    fn pmi(&self, text: &str) -> Result<TermStatistics, AnalysisError> {
        Ok(normalize::tokenize(text).into_iter().map(|t| (t, 0.3)).collect())
    }

    fn pkl(&self, text: &str) -> Result<TermStatistics, AnalysisError> {
        Ok(normalize::tokenize(text).into_iter().map(|t| (t, 0.7)).collect())
    }
}

/// Analyzer double for the unavailable-service path.
struct OfflineAnalyzer;

impl LinguisticAnalyzer for OfflineAnalyzer {
    fn lemmatize(&self, _text: &str) -> Result<TermAnnotations, AnalysisError> {
        Err(AnalysisError::Unavailable("lemmatizer offline".into()))
    }

    fn extract_parts_of_speech(&self, _text: &str) -> Result<TermTags, AnalysisError> {
        Err(AnalysisError::Unavailable("tagger offline".into()))
    }

    fn extract_roots(&self, _text: &str) -> Result<TermAnnotations, AnalysisError> {
        Err(AnalysisError::Unavailable("root extractor offline".into()))
    }

    fn stem(&self, _text: &str) -> Result<TermAnnotations, AnalysisError> {
        Err(AnalysisError::Unavailable("stemmer offline".into()))
    }

    fn segment(&self, _text: &str) -> Result<TermAnnotations, AnalysisError> {
        Err(AnalysisError::Unavailable("segmenter offline".into()))
    }

    fn transliterate(&self, _text: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::Unavailable("transliterator offline".into()))
    }

    fn pmi(&self, _text: &str) -> Result<TermStatistics, AnalysisError> {
        Err(AnalysisError::Unavailable("statistics offline".into()))
    }

    fn pkl(&self, _text: &str) -> Result<TermStatistics, AnalysisError> {
        Err(AnalysisError::Unavailable("statistics offline".into()))
    }
}

#[test]
fn annotations_iterate_in_deterministic_term_order() {
    let analyzer = CannedAnalyzer;

    let annotations = analyzer.lemmatize("zebra apple mango").unwrap();

    let terms: Vec<&str> = annotations.keys().map(String::as_str).collect();
    assert_eq!(terms, vec!["apple", "mango", "zebra"]);
    assert_eq!(annotations["apple"], "lemma:apple");
}

#[test]
fn statistics_cover_every_token() {
    let analyzer = CannedAnalyzer;

    let pmi = analyzer.pmi("alpha beta").unwrap();
    let pkl = analyzer.pkl("alpha beta").unwrap();

    assert_eq!(pmi.len(), 2);
    assert_eq!(pmi["alpha"], 0.3);
    assert_eq!(pkl["beta"], 0.7);
}

#[test]
fn analyzer_is_usable_as_a_trait_object() {
    let analyzer: &dyn LinguisticAnalyzer = &CannedAnalyzer;

    let tags = analyzer.extract_parts_of_speech("word").unwrap();
    assert_eq!(tags["word"], vec!["NOUN".to_string()]);

    let transliterated = analyzer.transliterate("بسم").unwrap();
    assert_eq!(transliterated, "translit:بسم");
}

#[test]
fn unavailable_services_surface_typed_errors() {
    let analyzer = OfflineAnalyzer;

    assert!(matches!(
        analyzer.lemmatize("text"),
        Err(AnalysisError::Unavailable(_))
    ));
    assert!(matches!(
        analyzer.pmi("text"),
        Err(AnalysisError::Unavailable(_))
    ));
}
