//! Persistent preference store.
//!
//! Preferences are string key/value pairs that survive across sessions. In the
//! browser they live in localStorage; tests and storage-less environments use
//! [`MemoryStore`]. Reads are defensive: a missing or corrupt value decodes to
//! the documented default, never an error.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{DEFAULT_POSTER_SIZE, POSTER_SIZE_RANGE, keys};
use crate::error::StorageError;

/// Key/value string store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// Implementations
// =============================================================================

/// In-process store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Browser `window.localStorage`.
///
/// Looks the storage object up on every call, so the handle itself is a plain
/// value that can live inside reactive state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::WriteFailed)
    }
}

// =============================================================================
// Best-effort helpers
// =============================================================================

/// Write `value`, logging instead of failing.
pub fn persist<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        tracing::warn!(key, error = %e, "preference not saved");
    }
}

/// Remove `key`, logging instead of failing.
pub fn forget<S: PreferenceStore + ?Sized>(store: &mut S, key: &str) {
    if let Err(e) = store.remove(key) {
        tracing::warn!(key, error = %e, "preference not removed");
    }
}

/// Serialize `value` as JSON and write it.
pub fn persist_json<S, T>(store: &mut S, key: &str, value: &T)
where
    S: PreferenceStore + ?Sized,
    T: Serialize,
{
    match serde_json::to_string(value) {
        Ok(json) => persist(store, key, &json),
        Err(e) => tracing::warn!(key, error = %e, "preference not encoded"),
    }
}

/// Read a JSON value, `None` when absent or unparsable.
pub fn read_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: PreferenceStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key, error = %e, "ignoring corrupt preference");
            None
        }
    }
}

/// Read `"true"`/`"false"`; anything else yields `default`.
pub fn read_bool<S: PreferenceStore + ?Sized>(store: &S, key: &str, default: bool) -> bool {
    match store.get(key).as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

/// Read a strictly positive integer.
pub fn read_positive<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<u32> {
    store
        .get(key)?
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
}

// =============================================================================
// Display Preferences
// =============================================================================

/// Colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Skin {
    #[default]
    Dark,
    Light,
    Classic,
}

impl Skin {
    pub const ALL: [Skin; 3] = [Skin::Dark, Skin::Light, Skin::Classic];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Classic => "classic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|skin| skin.as_str() == s)
    }

    /// Body class applied for this skin.
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
            Self::Classic => "theme-classic",
        }
    }
}

/// Per-user display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPrefs {
    pub poster_size: u32,
    pub skin: Skin,
    pub show_titles: bool,
    pub show_version_badges: bool,
    pub show_format_badges: bool,
    pub hide_edit_unless_hover: bool,
    pub advanced_fields_visible: bool,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            poster_size: DEFAULT_POSTER_SIZE,
            skin: Skin::default(),
            show_titles: false,
            show_version_badges: true,
            show_format_badges: true,
            hide_edit_unless_hover: false,
            advanced_fields_visible: false,
        }
    }
}

/// A single display setting change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayToggle {
    PosterSize(u32),
    Skin(Skin),
    ShowTitles(bool),
    ShowVersionBadges(bool),
    ShowFormatBadges(bool),
    HideEditUnlessHover(bool),
    AdvancedFieldsVisible(bool),
}

impl DisplayPrefs {
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let defaults = Self::default();
        Self {
            poster_size: read_positive(store, keys::POSTER_SIZE)
                .filter(|px| POSTER_SIZE_RANGE.contains(px))
                .unwrap_or(defaults.poster_size),
            skin: store
                .get(keys::SKIN)
                .and_then(|s| Skin::parse(&s))
                .unwrap_or(defaults.skin),
            show_titles: read_bool(store, keys::SHOW_TITLES, defaults.show_titles),
            show_version_badges: read_bool(
                store,
                keys::SHOW_VERSION_BADGE,
                defaults.show_version_badges,
            ),
            show_format_badges: read_bool(
                store,
                keys::SHOW_FORMAT_BADGE,
                defaults.show_format_badges,
            ),
            hide_edit_unless_hover: read_bool(
                store,
                keys::HIDE_EDIT_UNLESS_HOVER,
                defaults.hide_edit_unless_hover,
            ),
            advanced_fields_visible: read_bool(
                store,
                keys::ADVANCED_FIELDS_VISIBLE,
                defaults.advanced_fields_visible,
            ),
        }
    }

    /// Apply one change and persist only the affected key. Out-of-range poster
    /// sizes are ignored.
    pub fn apply<S: PreferenceStore + ?Sized>(&mut self, store: &mut S, toggle: DisplayToggle) {
        match toggle {
            DisplayToggle::PosterSize(px) => {
                if POSTER_SIZE_RANGE.contains(&px) {
                    self.poster_size = px;
                    persist(store, keys::POSTER_SIZE, &px.to_string());
                }
            }
            DisplayToggle::Skin(skin) => {
                self.skin = skin;
                persist(store, keys::SKIN, skin.as_str());
            }
            DisplayToggle::ShowTitles(on) => {
                self.show_titles = on;
                persist(store, keys::SHOW_TITLES, bool_str(on));
            }
            DisplayToggle::ShowVersionBadges(on) => {
                self.show_version_badges = on;
                persist(store, keys::SHOW_VERSION_BADGE, bool_str(on));
            }
            DisplayToggle::ShowFormatBadges(on) => {
                self.show_format_badges = on;
                persist(store, keys::SHOW_FORMAT_BADGE, bool_str(on));
            }
            DisplayToggle::HideEditUnlessHover(on) => {
                self.hide_edit_unless_hover = on;
                persist(store, keys::HIDE_EDIT_UNLESS_HOVER, bool_str(on));
            }
            DisplayToggle::AdvancedFieldsVisible(on) => {
                self.advanced_fields_visible = on;
                persist(store, keys::ADVANCED_FIELDS_VISIBLE, bool_str(on));
            }
        }
    }
}

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_display_prefs_defaults_when_empty() {
        let prefs = DisplayPrefs::load(&MemoryStore::new());
        assert_eq!(prefs, DisplayPrefs::default());
        assert!(prefs.show_version_badges);
        assert!(prefs.show_format_badges);
        assert!(!prefs.show_titles);
    }

    #[test]
    fn test_display_prefs_corrupt_values_fall_back() {
        let store = MemoryStore::with_entries([
            (keys::POSTER_SIZE, "huge"),
            (keys::SKIN, "neon"),
            (keys::SHOW_VERSION_BADGE, "yes"),
            (keys::SHOW_TITLES, "1"),
        ]);
        assert_eq!(DisplayPrefs::load(&store), DisplayPrefs::default());
    }

    #[test]
    fn test_display_prefs_out_of_range_poster_size() {
        let store = MemoryStore::with_entries([(keys::POSTER_SIZE, "5000")]);
        assert_eq!(DisplayPrefs::load(&store).poster_size, DEFAULT_POSTER_SIZE);
    }

    #[test]
    fn test_display_prefs_apply_persists() {
        let mut store = MemoryStore::new();
        let mut prefs = DisplayPrefs::default();
        prefs.apply(&mut store, DisplayToggle::Skin(Skin::Classic));
        prefs.apply(&mut store, DisplayToggle::ShowFormatBadges(false));
        prefs.apply(&mut store, DisplayToggle::PosterSize(240));
        prefs.apply(&mut store, DisplayToggle::PosterSize(9));

        let reloaded = DisplayPrefs::load(&store);
        assert_eq!(reloaded.skin, Skin::Classic);
        assert!(!reloaded.show_format_badges);
        assert_eq!(reloaded.poster_size, 240);
        assert_eq!(reloaded, prefs);
    }

    #[test]
    fn test_read_positive_rejects_zero_and_garbage() {
        let store = MemoryStore::with_entries([("a", "0"), ("b", "-3"), ("c", " 24 ")]);
        assert_eq!(read_positive(&store, "a"), None);
        assert_eq!(read_positive(&store, "b"), None);
        assert_eq!(read_positive(&store, "c"), Some(24));
        assert_eq!(read_positive(&store, "missing"), None);
    }
}
