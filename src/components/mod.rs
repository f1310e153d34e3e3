//! UI components built with Leptos.
//!
//! - [`toolbar`] - search, sort, filters, settings and the letter bar
//! - [`grid`] - poster grid and pagination
//! - [`bulk`] - multi-select toolbar shown in edit mode
//! - [`edit`] - edit dialog with metadata lookup
//! - [`collections`] - collection browser
//! - [`library`] - add form and CSV import/export
//! - [`toasts`] - notification stack
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod bulk;
pub mod collections;
pub mod edit;
pub mod grid;
pub mod icons;
pub mod library;
pub mod toasts;
pub mod toolbar;

pub use bulk::BulkBar;
pub use collections::CollectionsPanel;
pub use edit::EditDialog;
pub use grid::{Pagination, PosterGrid};
pub use library::LibraryPanel;
pub use toasts::ToastStack;
pub use toolbar::{LetterBar, Toolbar};
