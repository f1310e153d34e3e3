//! Engine configuration.
//!
//! Storage keys, endpoint paths and defaults shared by the engine and the UI.

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Runtime settings supplied by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_base: "" }
    }
}

// =============================================================================
// Persisted Preference Keys
// =============================================================================

/// localStorage keys. Names match what earlier versions of the app wrote so
/// existing preferences keep working.
pub mod keys {
    pub const SORT: &str = "movieSort";
    pub const STATUS: &str = "movieStatus";
    pub const LETTER: &str = "movieLetter";
    pub const FORMATS: &str = "movieFormats";
    pub const SEARCH: &str = "movieSearch";
    pub const PAGE_SIZE: &str = "moviePageSize";

    pub const POSTER_SIZE: &str = "posterSize";
    pub const SKIN: &str = "movieSkin";
    pub const SHOW_TITLES: &str = "showPosterTitles";
    pub const SHOW_VERSION_BADGE: &str = "showVersionBadge";
    pub const SHOW_FORMAT_BADGE: &str = "showFormatBadge";
    pub const HIDE_EDIT_UNLESS_HOVER: &str = "hideEditUnlessHover";
    pub const ADVANCED_FIELDS_VISIBLE: &str = "advancedFieldsVisible";
    pub const ADD_FORM: &str = "movieAddForm";
}

// =============================================================================
// Remote Endpoints
// =============================================================================

/// API paths, relative to [`Config::api_base`].
pub mod endpoints {
    pub const SEARCH: &str = "/api/search";
    pub const COLLECTIONS: &str = "/api/collections";
    pub const DELETE_BULK: &str = "/delete_bulk";
    pub const UPDATE_BULK: &str = "/update_bulk";
    pub const ADD_BULK_COLLECTIONS: &str = "/add_bulk_collections";
    pub const SUGGESTIONS: &str = "/tmdb_suggestions";
    pub const ADD: &str = "/add";
    pub const IMPORT_CSV: &str = "/import_csv";
    pub const EXPORT_CSV: &str = "/export_csv";

    pub fn item_collections(id: u64) -> String {
        format!("/api/movie_collections/{id}")
    }

    pub fn collection_movies(id: u64) -> String {
        format!("/api/collection/{id}/movies")
    }

    pub fn edit(id: u64) -> String {
        format!("/edit/{id}")
    }

    pub fn delete(id: u64) -> String {
        format!("/delete/{id}")
    }
}

// =============================================================================
// Defaults
// =============================================================================

/// Poster width in pixels when nothing valid is stored.
pub const DEFAULT_POSTER_SIZE: u32 = 180;

/// Accepted poster width range (slider bounds).
pub const POSTER_SIZE_RANGE: std::ops::RangeInclusive<u32> = 80..=400;

/// Format preselected in the add form.
pub const DEFAULT_FORMAT: &str = "Blu-ray";

/// External metadata site used for poster links.
pub const TMDB_BASE_URL: &str = "https://www.themoviedb.org";
