//! The persistence boundary.
//!
//! Storage and linguistic annotation live outside this crate; these traits
//! are the contract it consumes. Implementations belong to the surrounding
//! application — an in-memory double is enough for tests.

pub mod linguistics;

use thiserror::Error;

use crate::document::Document;
use crate::types::identifiers::DocumentId;

pub use linguistics::{
    AnalysisError, LinguisticAnalyzer, TermAnnotations, TermStatistics, TermTags,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No document with id {0}")]
    NotFound(DocumentId),
    #[error("Store rejected the operation: {0}")]
    Rejected(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document persistence contract.
pub trait DocumentStore {
    /// Create a document named `name` whose first page holds `content`;
    /// returns the assigned id.
    fn create(&mut self, name: &str, content: &str) -> Result<DocumentId, StoreError>;

    /// Rename the document and replace the content of `page_number`.
    fn update(
        &mut self,
        id: DocumentId,
        name: &str,
        page_number: u32,
        content: &str,
    ) -> Result<(), StoreError>;

    fn delete(&mut self, id: DocumentId) -> Result<(), StoreError>;

    fn list_all(&self) -> Result<Vec<Document>, StoreError>;
}
