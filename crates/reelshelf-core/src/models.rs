//! Catalogue records and API payloads.
//!
//! Wire names follow the catalogue server (`rowid`, `poster_path`, `tmdb_id`).
//! Everything other than the id is optional on the wire and defaults to empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Catalogue record id.
pub type ItemId = u64;

/// Read projection of one catalogue record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemSummary {
    #[serde(rename = "rowid")]
    pub id: ItemId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub format: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub disc_count: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(rename = "poster_path", default, deserialize_with = "lenient_string")]
    pub poster_url: String,
    #[serde(rename = "tmdb_id", default, deserialize_with = "lenient_optional")]
    pub external_id: Option<String>,
}

impl ItemSummary {
    pub fn is_wanted(&self) -> bool {
        self.status == "wanted"
    }
}

/// One page of the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ListingResult {
    #[serde(rename = "movies", default)]
    pub items: Vec<ItemSummary>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(rename = "pages", default)]
    pub total_pages: u32,
    #[serde(rename = "total", default)]
    pub total_count: u64,
}

fn first_page() -> u32 {
    1
}

impl ListingResult {
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|i| i.id).collect()
    }
}

/// Named collection with its member count.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CollectionSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// Member of an expanded collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CollectionEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(rename = "poster_path", default, deserialize_with = "lenient_string")]
    pub poster_url: String,
}

/// External metadata candidate used by the identify dialog.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_date: String,
    #[serde(rename = "id", default, deserialize_with = "lenient_optional")]
    pub external_id: Option<String>,
}

impl Suggestion {
    /// Four-digit release year, empty when the date is missing or short.
    pub fn year(&self) -> String {
        let year: String = self.release_date.chars().take(4).collect();
        if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            year
        } else {
            String::new()
        }
    }
}

// =============================================================================
// Request / Response Bodies
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct IdsBody<'a> {
    #[serde(rename = "rowids")]
    pub ids: &'a [ItemId],
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBody<'a, F: Serialize> {
    #[serde(rename = "rowids")]
    pub ids: &'a [ItemId],
    pub fields: &'a F,
}

#[derive(Debug, Serialize)]
pub(crate) struct CollectionsBody<'a> {
    #[serde(rename = "rowids")]
    pub ids: &'a [ItemId],
    pub collections: &'a [String],
}

/// `{deleted}` from a bulk delete.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteReply {
    pub deleted: Option<u64>,
}

/// `{updated}` from a bulk update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReply {
    pub updated: Option<u64>,
}

/// `{added}` from a bulk collection attach.
#[derive(Debug, Default, Deserialize)]
pub struct AttachReply {
    pub added: Option<u64>,
}

/// Reply to an add; both fields are optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct AddReply {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(rename = "poster_path", default, deserialize_with = "lenient_string")]
    pub poster_url: String,
}

// =============================================================================
// Lenient decoding
// =============================================================================

/// Numbers, strings and null all become a string (null → empty).
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(lenient_optional(d)?.unwrap_or_default())
}

fn lenient_optional<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}
