pub mod index;
mod scoring;

pub use index::TfIdfIndex;
