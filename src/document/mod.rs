pub mod document;

pub use crate::types::identifiers::{DocumentId, Fingerprint, PageId};
pub use document::{Document, DocumentError, Page};
