pub mod editor;

pub use editor::{file_extension, Editor, EditorError};
