//! Literal keyword search across paginated documents.

use tracing::debug;

use crate::document::Document;

/// Keywords shorter than this after trimming are rejected outright.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Case-insensitive substring search over page content.
///
/// Returns the names of matching documents in input order, each at most
/// once. A document matches on the first page (in page order) whose content
/// contains the keyword; its remaining pages are not scanned. A too-short
/// keyword produces an empty result, never an error.
///
/// Matching is deliberately literal, with no tokenization or ranking; it is
/// complementary to TF-IDF relevance scoring.
pub fn search_keyword(keyword: &str, documents: &[Document]) -> Vec<String> {
    let trimmed = keyword.trim();
    if trimmed.chars().count() < MIN_KEYWORD_LEN {
        debug!(keyword = trimmed, "keyword below minimum length, skipping search");
        return Vec::new();
    }

    let needle = trimmed.to_lowercase();

    let mut names = Vec::new();
    for document in documents {
        let matched = document
            .pages()
            .iter()
            .any(|page| page.content.to_lowercase().contains(&needle));
        if matched {
            names.push(document.name.clone());
        }
    }

    debug!(matches = names.len(), "keyword search finished");
    names
}
