//! Catalogue query and mutation engine.
//!
//! Toolkit-independent core of the catalogue browser:
//! - [`QueryState`] with persisted preferences ([`PreferenceStore`])
//! - [`CatalogueApi`] transport and the [`Fetcher`] stale-response guard
//! - [`render`] view models and the [`SelectionController`]
//! - bulk and single-record mutations ([`mutation`], [`edit`])
//! - [`CatalogueSession`] and its async drivers ([`session`])

pub mod api;
pub mod config;
pub mod edit;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod mutation;
pub mod notify;
pub mod prefs;
pub mod query;
pub mod render;
pub mod selection;
pub mod session;

pub use api::{CatalogueApi, HttpApi};
pub use config::Config;
pub use error::{ActionError, FailureKind, FetchError, StorageError, ValidationError};
pub use fetcher::{FetchTicket, Fetcher};
pub use models::{ItemId, ItemSummary, ListingResult};
pub use notify::{Notice, NoticeLevel, Notices};
pub use prefs::{DisplayPrefs, DisplayToggle, LocalStorage, MemoryStore, PreferenceStore, Skin};
pub use query::{QueryState, SortOrder, StatusFilter};
pub use render::{GridView, PaginationView, PosterCard};
pub use selection::{SelectionController, SelectionMode};
pub use session::{CatalogueSession, SessionHost};
