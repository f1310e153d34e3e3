//! Bulk mutations.
//!
//! A bulk action goes through three steps: [`PendingMutation::prepare`]
//! validates it against the selection (no request is made for an invalid
//! action), the user confirms the [`PendingMutation::prompt`], and
//! [`PendingMutation::execute`] sends it. The server's reply is turned into a
//! [`MutationReport`] for the notification surface; the counts it carries are
//! authoritative even when smaller than the request.

use serde::Serialize;

use crate::api::CatalogueApi;
use crate::error::{FetchError, ValidationError};
use crate::models::ItemId;

/// Fields a bulk update may set. Absent fields are left alone by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BulkFields {
    /// Build from raw control values; blank values count as "not chosen".
    pub fn from_inputs(status: &str, format: &str, version: &str) -> Self {
        Self {
            status: non_blank(status),
            format: non_blank(format),
            version: non_blank(version),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.format.is_none() && self.version.is_none()
    }

    /// `Status → owned; Format → DVD`
    pub fn summary(&self) -> String {
        [
            ("Status", &self.status),
            ("Format", &self.format),
            ("Version", &self.version),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name} → {v}")))
        .collect::<Vec<_>>()
        .join("; ")
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Split comma-separated collection names. Entries are trimmed and empty
/// ones dropped; duplicates are kept.
pub fn parse_collection_names(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkAction {
    Delete,
    Update(BulkFields),
    AttachCollections(Vec<String>),
}

impl BulkAction {
    /// Verb used in failure notices.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Update(_) => "Update",
            Self::AttachCollections(_) => "Add",
        }
    }
}

/// Validated action waiting for user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMutation {
    pub ids: Vec<ItemId>,
    pub action: BulkAction,
}

/// Server reply to an executed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationReply {
    Deleted(Option<u64>),
    Updated(Option<u64>),
    Attached(Option<u64>),
}

/// What to tell the user after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport {
    pub title: String,
    pub subtitle: String,
    /// The collections view is stale as well as the listing.
    pub refresh_collections: bool,
}

impl PendingMutation {
    pub fn prepare(ids: Vec<ItemId>, action: BulkAction) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        match &action {
            BulkAction::Update(fields) if fields.is_empty() => {
                return Err(ValidationError::NoFieldsChosen);
            }
            BulkAction::AttachCollections(names) if names.is_empty() => {
                return Err(ValidationError::NoCollectionName);
            }
            _ => {}
        }
        Ok(Self { ids, action })
    }

    /// Confirmation question shown before anything is sent.
    pub fn prompt(&self) -> String {
        let n = self.ids.len();
        match &self.action {
            BulkAction::Delete => {
                format!("Delete {n} selected movies? This cannot be undone.")
            }
            BulkAction::Update(_) => format!("Apply changes to {n} movie(s)?"),
            BulkAction::AttachCollections(names) => {
                format!("Add {n} movie(s) to collection(s): {} ?", names.join(", "))
            }
        }
    }

    pub async fn execute<A: CatalogueApi>(&self, api: &A) -> Result<MutationReply, FetchError> {
        tracing::info!(action = self.action.label(), count = self.ids.len(), "bulk mutation");
        match &self.action {
            BulkAction::Delete => {
                let reply = api.delete_bulk(&self.ids).await?;
                Ok(MutationReply::Deleted(reply.deleted))
            }
            BulkAction::Update(fields) => {
                let reply = api.update_bulk(&self.ids, fields).await?;
                Ok(MutationReply::Updated(reply.updated))
            }
            BulkAction::AttachCollections(names) => {
                let reply = api.attach_collections(&self.ids, names).await?;
                Ok(MutationReply::Attached(reply.added))
            }
        }
    }

    /// Notice text for `reply`. A missing delete/update count falls back to
    /// the request size; a missing association count means none were added.
    pub fn report(&self, reply: MutationReply) -> MutationReport {
        let requested = self.ids.len() as u64;
        match (&self.action, reply) {
            (BulkAction::Update(fields), MutationReply::Updated(n)) => MutationReport {
                title: "Updated".to_string(),
                subtitle: format!(
                    "{} movie(s) updated: {}",
                    n.unwrap_or(requested),
                    fields.summary()
                ),
                refresh_collections: false,
            },
            (BulkAction::AttachCollections(names), MutationReply::Attached(n)) => {
                MutationReport {
                    title: "Collections updated".to_string(),
                    subtitle: format!(
                        "{} associations added: {}",
                        n.unwrap_or(0),
                        names.join(", ")
                    ),
                    refresh_collections: true,
                }
            }
            (_, MutationReply::Deleted(n)) => MutationReport {
                title: "Deleted".to_string(),
                subtitle: format!("{} movie(s) removed", n.unwrap_or(requested)),
                refresh_collections: false,
            },
            (action, reply) => {
                tracing::warn!(?reply, action = action.label(), "reply does not match action");
                MutationReport {
                    title: "Done".to_string(),
                    subtitle: String::new(),
                    refresh_collections: false,
                }
            }
        }
    }
}
