use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, Fingerprint, PageId};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Page numbers start at 1, got {0}")]
    InvalidPageNumber(u32),
}

/// One page of a document. Content may be empty, never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub document_id: DocumentId,
    /// Positive, unique within the owning document; defines page order.
    pub number: u32,
    pub content: String,
}

/// A paginated document with a content fingerprint.
///
/// The fingerprint always covers the concatenation of page content in page
/// order. The mutating methods here are the only way to change pages, and
/// each one recomputes it, so the invariant cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    fingerprint: Fingerprint,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pages: Vec<Page>,
}

impl Document {
    /// A fresh document with no pages; its fingerprint is the digest of the
    /// empty content.
    pub fn new(id: DocumentId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Document {
            id,
            name: name.into(),
            fingerprint: Fingerprint::from_content(""),
            created_at: now,
            modified_at: now,
            pages: Vec::new(),
        }
    }

    /// Insert `content` at `number`, replacing the content of an existing
    /// page with that number. A replaced page keeps its identifier; `id` is
    /// used only when the page is created.
    pub fn upsert_page(
        &mut self,
        id: PageId,
        number: u32,
        content: impl Into<String>,
    ) -> Result<(), DocumentError> {
        if number == 0 {
            return Err(DocumentError::InvalidPageNumber(number));
        }

        let content = content.into();
        if let Some(existing) = self.pages.iter().position(|p| p.number == number) {
            self.pages[existing].content = content;
        } else {
            let at = self.pages.partition_point(|p| p.number < number);
            self.pages.insert(
                at,
                Page {
                    id,
                    document_id: self.id,
                    number,
                    content,
                },
            );
        }

        self.touch();
        Ok(())
    }

    /// Remove the page with `number` if present; returns whether it was.
    /// The fingerprint is recomputed only when something actually changed.
    pub fn remove_page(&mut self, number: u32) -> bool {
        let before = self.pages.len();
        self.pages.retain(|p| p.number != number);
        let removed = self.pages.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Pages in page-number order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, number: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.number == number)
    }

    /// The concatenation of page content in page order, which is the exact
    /// byte sequence the fingerprint covers.
    pub fn content(&self) -> String {
        self.pages.iter().map(|p| p.content.as_str()).collect()
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    fn touch(&mut self) {
        self.fingerprint = Fingerprint::from_content(&self.content());
        self.modified_at = Utc::now();
    }
}
