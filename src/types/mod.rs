pub mod identifiers;
pub mod relevance;

pub use identifiers::{DocumentId, Fingerprint, PageId};
pub use relevance::{ScoreBreakdown, TermWeight};
