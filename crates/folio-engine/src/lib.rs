pub mod catalog;
pub mod editing;
pub mod export;
pub mod import;
pub mod inline;
pub mod io;
pub mod math;
pub mod model;
pub mod render;
pub mod video;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use catalog::{CatalogError, PostKind, PostSummary, SortOption};
pub use editing::{Cmd, DragSession, EditorSession, Patch};
pub use export::{Artifact, ExportError, export_document};
pub use import::{ImportError, import_document};
pub use io::*;
pub use model::*;
