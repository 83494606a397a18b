//! Deterministic text analytics core for bilingual document editing.
//!
//! `analytics-core` provides script-aware normalization for Arabic and
//! Latin-script text, content-hash fingerprinting, corpus-relative TF-IDF
//! scoring, and literal keyword search over paginated documents. All
//! operations are deterministic — identical inputs always produce identical
//! outputs, byte-for-byte.
//!
//! Persistence and linguistic annotation are external collaborators behind
//! the traits in [`store`]; this crate implements neither.

pub mod corpus;
pub mod document;
pub mod editor;
pub mod normalize;
pub mod search;
pub mod store;
pub mod types;
