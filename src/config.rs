//! Application configuration.
//!
//! UI constants for the catalogue front-end. Storage keys, endpoints and
//! engine defaults live in [`reelshelf_core::config`].

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Reelshelf";

// =============================================================================
// Timing
// =============================================================================

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4000;

/// Quiet period after the last keystroke before a search request goes out.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

// =============================================================================
// Choice Lists
// =============================================================================

/// Jump-to-letter bar.
pub const ALPHABET: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
    "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Physical and digital formats offered in filters and forms.
pub const FORMATS: &[&str] = &["Blu-ray", "4K", "DVD", "Digital", "VHS"];

/// Common edition labels for the bulk toolbar.
pub const VERSIONS: &[&str] = &[
    "Theatrical",
    "Director's Cut",
    "Extended",
    "Unrated",
    "Collector's Edition",
];

/// Page size choices. `None` leaves the server default in place.
pub const PAGE_SIZES: &[Option<u32>] = &[None, Some(24), Some(48), Some(96), Some(192)];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
