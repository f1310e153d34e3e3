//! Collections panel state.

use std::collections::BTreeMap;

use crate::models::{CollectionEntry, CollectionSummary};

/// Loaded collection list plus the members of every expanded collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionsView {
    items: Vec<CollectionSummary>,
    /// `None` while the member list is loading.
    expanded: BTreeMap<u64, Option<Vec<CollectionEntry>>>,
}

impl CollectionsView {
    pub fn items(&self) -> &[CollectionSummary] {
        &self.items
    }

    /// Replace the list. Every collection collapses, so the next expand
    /// fetches current members.
    pub fn set_items(&mut self, items: Vec<CollectionSummary>) {
        self.expanded.clear();
        self.items = items;
    }

    /// Mark `id` expanded. Returns true when its members still need fetching.
    pub fn expand(&mut self, id: u64) -> bool {
        if self.expanded.contains_key(&id) {
            return false;
        }
        self.expanded.insert(id, None);
        true
    }

    /// Drop the cached members of `id`.
    pub fn collapse(&mut self, id: u64) {
        self.expanded.remove(&id);
    }

    /// Store fetched members, unless `id` was collapsed meanwhile.
    pub fn members_loaded(&mut self, id: u64, entries: Vec<CollectionEntry>) -> bool {
        match self.expanded.get_mut(&id) {
            Some(slot @ None) => {
                *slot = Some(entries);
                true
            }
            _ => false,
        }
    }

    /// Forget a failed member load so the next expand retries.
    pub fn members_failed(&mut self, id: u64) {
        if matches!(self.expanded.get(&id), Some(None)) {
            self.expanded.remove(&id);
        }
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.contains_key(&id)
    }

    /// Members of an expanded collection, `None` when collapsed or loading.
    pub fn members(&self, id: u64) -> Option<&[CollectionEntry]> {
        self.expanded.get(&id)?.as_deref()
    }
}
