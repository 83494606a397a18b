use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::document::Document;
use crate::search;
use crate::store::{DocumentStore, StoreError};
use crate::types::identifiers::{DocumentId, Fingerprint};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Document name must not be empty")]
    EmptyName,
    #[error("Unsupported file format: {0:?}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File extensions accepted by [`Editor::import_text_file`].
const IMPORTABLE_EXTENSIONS: [&str; 1] = ["txt"];

/// Thin business layer over a [`DocumentStore`].
///
/// The editor owns no document state of its own; everything it reads comes
/// back through `list_all`, so its answers always reflect the store.
pub struct Editor<S> {
    store: S,
}

impl<S: DocumentStore> Editor<S> {
    pub fn new(store: S) -> Self {
        Editor { store }
    }

    /// Create a document from in-memory content.
    pub fn create_document(&mut self, name: &str, content: &str) -> Result<DocumentId, EditorError> {
        if name.trim().is_empty() {
            return Err(EditorError::EmptyName);
        }
        let id = self.store.create(name, content)?;
        info!(%id, name, "document created");
        Ok(id)
    }

    /// Import a text file from disk under its file name.
    ///
    /// Only `.txt` is accepted; the file must be valid UTF-8.
    pub fn import_text_file(&mut self, path: &Path) -> Result<DocumentId, EditorError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        let extension = file_extension(name);
        if !IMPORTABLE_EXTENSIONS.contains(&extension.as_str()) {
            warn!(name, extension = %extension, "rejected import of unsupported format");
            return Err(EditorError::UnsupportedFormat(extension));
        }

        let content = fs::read_to_string(path)?;
        self.create_document(name, &content)
    }

    /// Rename a document and replace one page's content.
    pub fn update_document(
        &mut self,
        id: DocumentId,
        name: &str,
        page_number: u32,
        content: &str,
    ) -> Result<(), EditorError> {
        self.store.update(id, name, page_number, content)?;
        info!(%id, page_number, "document updated");
        Ok(())
    }

    pub fn delete_document(&mut self, id: DocumentId) -> Result<(), EditorError> {
        self.store.delete(id)?;
        info!(%id, "document deleted");
        Ok(())
    }

    /// `Ok(None)` when no stored document has this id.
    pub fn document(&self, id: DocumentId) -> Result<Option<Document>, EditorError> {
        Ok(self.store.list_all()?.into_iter().find(|d| d.id == id))
    }

    pub fn documents(&self) -> Result<Vec<Document>, EditorError> {
        Ok(self.store.list_all()?)
    }

    /// Names of stored documents whose pages contain `keyword`.
    pub fn search(&self, keyword: &str) -> Result<Vec<String>, EditorError> {
        let documents = self.store.list_all()?;
        Ok(search::search_keyword(keyword, &documents))
    }

    /// Whether `candidate_content` differs from the stored document's
    /// current content, judged by fingerprint.
    pub fn has_changed(&self, id: DocumentId, candidate_content: &str) -> Result<bool, EditorError> {
        let document = self.document(id)?.ok_or(StoreError::NotFound(id))?;
        let candidate = Fingerprint::from_content(candidate_content);
        Ok(candidate != *document.fingerprint())
    }
}

/// Lowercased final extension of a file name, empty when there is none.
pub fn file_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}
