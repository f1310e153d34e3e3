//! Single-record editing and the add form.
//!
//! Opening the edit dialog captures a [`PendingEdit`]: the record's values at
//! open time plus the form the user edits. The snapshot only exists to
//! describe what changed once the save succeeds.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FORMAT, keys};
use crate::error::ValidationError;
use crate::models::{ItemId, ItemSummary, Suggestion};
use crate::mutation::parse_collection_names;
use crate::prefs::{self, PreferenceStore};
use crate::query::StatusFilter;

// =============================================================================
// Edit Form
// =============================================================================

/// Editable field of a record. [`EditField::name`] is the wire name, which is
/// also what the change summary lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    Title,
    Year,
    Format,
    Status,
    Version,
    Country,
    Language,
    Region,
    DiscCount,
    Notes,
    ExternalId,
    Collections,
}

impl EditField {
    pub const ALL: [EditField; 12] = [
        EditField::Title,
        EditField::Year,
        EditField::Format,
        EditField::Status,
        EditField::Version,
        EditField::Country,
        EditField::Language,
        EditField::Region,
        EditField::DiscCount,
        EditField::Notes,
        EditField::ExternalId,
        EditField::Collections,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::Format => "format",
            Self::Status => "status",
            Self::Version => "version",
            Self::Country => "country",
            Self::Language => "language",
            Self::Region => "region",
            Self::DiscCount => "disc_count",
            Self::Notes => "notes",
            Self::ExternalId => "tmdb_id",
            Self::Collections => "collections",
        }
    }
}

/// Values shown in the edit dialog, as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub year: String,
    pub format: String,
    pub status: String,
    pub version: String,
    pub country: String,
    pub language: String,
    pub region: String,
    pub disc_count: String,
    pub notes: String,
    pub external_id: String,
    /// Comma-separated collection names.
    pub collections: String,
}

impl EditForm {
    pub fn from_item(item: &ItemSummary) -> Self {
        Self {
            title: item.title.clone(),
            year: item.year.clone(),
            format: item.format.clone(),
            status: item.status.clone(),
            version: item.version.clone(),
            country: item.country.clone(),
            language: item.language.clone(),
            region: item.region.clone(),
            disc_count: item.disc_count.clone(),
            notes: item.notes.clone(),
            external_id: item.external_id.clone().unwrap_or_default(),
            collections: String::new(),
        }
    }

    pub fn get(&self, field: EditField) -> &str {
        match field {
            EditField::Title => &self.title,
            EditField::Year => &self.year,
            EditField::Format => &self.format,
            EditField::Status => &self.status,
            EditField::Version => &self.version,
            EditField::Country => &self.country,
            EditField::Language => &self.language,
            EditField::Region => &self.region,
            EditField::DiscCount => &self.disc_count,
            EditField::Notes => &self.notes,
            EditField::ExternalId => &self.external_id,
            EditField::Collections => &self.collections,
        }
    }

    pub fn set(&mut self, field: EditField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditField::Title => self.title = value,
            EditField::Year => self.year = value,
            EditField::Format => self.format = value,
            EditField::Status => self.status = value,
            EditField::Version => self.version = value,
            EditField::Country => self.country = value,
            EditField::Language => self.language = value,
            EditField::Region => self.region = value,
            EditField::DiscCount => self.disc_count = value,
            EditField::Notes => self.notes = value,
            EditField::ExternalId => self.external_id = value,
            EditField::Collections => self.collections = value,
        }
    }

    /// Fill in title, year and external id from an identify result.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) {
        self.title = suggestion.title.clone();
        self.year = suggestion.year();
        self.external_id = suggestion.external_id.clone().unwrap_or_default();
    }

    /// Request body for a save. Text is trimmed and an empty title rejected.
    pub fn payload(&self) -> Result<EditPayload, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let external_id = self.external_id.trim();
        Ok(EditPayload {
            title: title.to_string(),
            year: self.year.trim().to_string(),
            format: self.format.trim().to_string(),
            status: self.status.trim().to_string(),
            version: self.version.trim().to_string(),
            country: self.country.trim().to_string(),
            language: self.language.trim().to_string(),
            region: self.region.trim().to_string(),
            disc_count: self.disc_count.trim().to_string(),
            notes: self.notes.trim().to_string(),
            tmdb_id: (!external_id.is_empty()).then(|| external_id.to_string()),
            collections: parse_collection_names(&self.collections),
        })
    }
}

/// Body of `POST /edit/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditPayload {
    pub title: String,
    pub year: String,
    pub format: String,
    pub status: String,
    pub version: String,
    pub country: String,
    pub language: String,
    pub region: String,
    pub disc_count: String,
    pub notes: String,
    pub tmdb_id: Option<String>,
    pub collections: Vec<String>,
}

// =============================================================================
// Pending Edit
// =============================================================================

/// Open edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub id: ItemId,
    /// Distinguishes this opening from any earlier one for the same record.
    pub generation: u64,
    pub poster_url: String,
    pub form: EditForm,
    /// Inline error from the last failed save.
    pub error: Option<String>,
    original: EditForm,
}

impl PendingEdit {
    pub fn open(item: &ItemSummary, generation: u64) -> Self {
        let form = EditForm::from_item(item);
        Self {
            id: item.id,
            generation,
            poster_url: item.poster_url.clone(),
            original: form.clone(),
            form,
            error: None,
        }
    }

    /// Record the collections the record belongs to. They become part of the
    /// snapshot, so only later edits to the list count as changes.
    pub fn collections_loaded(&mut self, names: &[String]) {
        let joined = names.join(", ");
        self.original.collections = joined.clone();
        self.form.collections = joined;
    }

    /// Title as it was when the dialog opened.
    pub fn original_title(&self) -> &str {
        &self.original.title
    }

    /// Fields whose saved value differs from the snapshot, in form order.
    pub fn changed_fields(&self, payload: &EditPayload) -> Vec<EditField> {
        EditField::ALL
            .into_iter()
            .filter(|&field| match field {
                EditField::Collections => {
                    parse_collection_names(&self.original.collections) != payload.collections
                }
                EditField::ExternalId => {
                    self.original.external_id.trim() != payload.tmdb_id.as_deref().unwrap_or("")
                }
                _ => self.original.get(field).trim() != payload_value(payload, field),
            })
            .collect()
    }

    /// `Edited: title, year`, or just `Edited` when nothing differs.
    pub fn change_summary(&self, payload: &EditPayload) -> String {
        let changed = self.changed_fields(payload);
        if changed.is_empty() {
            return "Edited".to_string();
        }
        let names: Vec<&str> = changed.into_iter().map(EditField::name).collect();
        format!("Edited: {}", names.join(", "))
    }
}

fn payload_value(payload: &EditPayload, field: EditField) -> &str {
    match field {
        EditField::Title => &payload.title,
        EditField::Year => &payload.year,
        EditField::Format => &payload.format,
        EditField::Status => &payload.status,
        EditField::Version => &payload.version,
        EditField::Country => &payload.country,
        EditField::Language => &payload.language,
        EditField::Region => &payload.region,
        EditField::DiscCount => &payload.disc_count,
        EditField::Notes => &payload.notes,
        EditField::ExternalId => payload.tmdb_id.as_deref().unwrap_or(""),
        EditField::Collections => "",
    }
}

// =============================================================================
// Add Form
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Barcode,
    Title,
    Year,
    Format,
    Status,
}

/// Draft of the "add movie" form, persisted as JSON on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddForm {
    pub barcode: String,
    pub title: String,
    pub year: String,
    pub format: String,
    pub status: String,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            barcode: String::new(),
            title: String::new(),
            year: String::new(),
            format: DEFAULT_FORMAT.to_string(),
            status: StatusFilter::Owned.as_str().to_string(),
        }
    }
}

impl AddForm {
    /// Restore the saved draft; a missing or corrupt draft gives the defaults.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        prefs::read_json(store, keys::ADD_FORM).unwrap_or_default()
    }

    pub fn update<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        field: AddField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match field {
            AddField::Barcode => self.barcode = value,
            AddField::Title => self.title = value,
            AddField::Year => self.year = value,
            AddField::Format => self.format = value,
            AddField::Status => self.status = value,
        }
        prefs::persist_json(store, keys::ADD_FORM, self);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            Err(ValidationError::EmptyTitle)
        } else {
            Ok(())
        }
    }

    /// Form-encoded fields for `POST /add`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("barcode", self.barcode.trim().to_string()),
            ("title", self.title.trim().to_string()),
            ("year", self.year.trim().to_string()),
            ("format", self.format.clone()),
            ("status", self.status.clone()),
        ]
    }

    /// Reset the per-movie inputs after a successful add. Format and status
    /// stay, since consecutive adds usually share them.
    pub fn clear_entered<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) {
        self.barcode.clear();
        self.title.clear();
        self.year.clear();
        prefs::persist_json(store, keys::ADD_FORM, self);
    }
}
