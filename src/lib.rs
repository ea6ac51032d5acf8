//! assigntui library
//!
//! Core functionality for the package assignment settings editor: the
//! option catalog, the pluggable settings store, the editor itself, and the
//! presentation seam with its batch and TUI implementations.

pub mod catalog;
pub mod cli;
pub mod editor;
pub mod error;
pub mod presenter;
pub mod store;
pub mod theme;
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Catalog, CategoryCatalog, SelectionSet, TypeOption};
pub use editor::{AssignmentEditor, SAVED_NOTICE};
pub use error::{AssignError, Result};
pub use presenter::{BatchPresenter, Destination, Presenter, RecordingPresenter};
pub use store::{JsonFileStore, MemoryStore, SettingsRecord, SettingsStore, validate_record};
pub use tui::TuiPresenter;
