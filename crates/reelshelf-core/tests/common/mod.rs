//! Scripted catalogue API and a `RefCell` session host.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use reelshelf_core::edit::{AddForm, EditPayload};
use reelshelf_core::models::{
    AddReply, AttachReply, CollectionEntry, CollectionSummary, DeleteReply, ItemSummary,
    Suggestion, UpdateReply,
};
use reelshelf_core::mutation::BulkFields;
use reelshelf_core::{
    CatalogueApi, CatalogueSession, FetchError, ItemId, ListingResult, MemoryStore, QueryState,
    SessionHost,
};

/// A request the API received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Listing(u32),
    ItemCollections(ItemId),
    Save(ItemId, EditPayload),
    Delete(ItemId),
    DeleteBulk(Vec<ItemId>),
    UpdateBulk(Vec<ItemId>, BulkFields),
    Attach(Vec<ItemId>, Vec<String>),
    Collections,
    CollectionMovies(u64),
    Suggestions(String, String),
    Add(AddForm),
}

/// Listing response plus how many times to yield before answering.
pub struct ScriptedListing {
    pub delay: u32,
    pub result: Result<ListingResult, FetchError>,
}

/// API whose responses are queued up front. Unscripted calls fail with a
/// server error.
#[derive(Default)]
pub struct ScriptedApi {
    pub calls: RefCell<Vec<Call>>,
    pub listings: RefCell<VecDeque<ScriptedListing>>,
    pub item_collections: RefCell<VecDeque<Result<Vec<String>, FetchError>>>,
    pub unit_replies: RefCell<VecDeque<Result<(), FetchError>>>,
    pub deletes: RefCell<VecDeque<Result<DeleteReply, FetchError>>>,
    pub updates: RefCell<VecDeque<Result<UpdateReply, FetchError>>>,
    pub attaches: RefCell<VecDeque<Result<AttachReply, FetchError>>>,
    pub collections: RefCell<VecDeque<Result<Vec<CollectionSummary>, FetchError>>>,
    pub members: RefCell<VecDeque<Result<Vec<CollectionEntry>, FetchError>>>,
    pub suggestions: RefCell<VecDeque<Result<Vec<Suggestion>, FetchError>>>,
    pub adds: RefCell<VecDeque<Result<AddReply, FetchError>>>,
}

fn next<T>(queue: &RefCell<VecDeque<Result<T, FetchError>>>) -> Result<T, FetchError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or(Err(FetchError::Server(599)))
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_listing(&self, result: Result<ListingResult, FetchError>) -> &Self {
        self.push_delayed_listing(0, result)
    }

    pub fn push_delayed_listing(
        &self,
        delay: u32,
        result: Result<ListingResult, FetchError>,
    ) -> &Self {
        self.listings
            .borrow_mut()
            .push_back(ScriptedListing { delay, result });
        self
    }

    pub fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls other than listing fetches.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Listing(_)))
            .collect()
    }

    pub fn listing_pages(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Listing(page) => Some(page),
                _ => None,
            })
            .collect()
    }
}

impl CatalogueApi for ScriptedApi {
    async fn fetch_listing(&self, query: &QueryState) -> Result<ListingResult, FetchError> {
        self.record(Call::Listing(query.page));
        let scripted = self.listings.borrow_mut().pop_front();
        let Some(scripted) = scripted else {
            return Err(FetchError::Server(599));
        };
        for _ in 0..scripted.delay {
            tokio::task::yield_now().await;
        }
        scripted.result
    }

    async fn item_collections(&self, id: ItemId) -> Result<Vec<String>, FetchError> {
        self.record(Call::ItemCollections(id));
        tokio::task::yield_now().await;
        next(&self.item_collections)
    }

    async fn save_item(&self, id: ItemId, payload: &EditPayload) -> Result<(), FetchError> {
        self.record(Call::Save(id, payload.clone()));
        next(&self.unit_replies)
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), FetchError> {
        self.record(Call::Delete(id));
        next(&self.unit_replies)
    }

    async fn delete_bulk(&self, ids: &[ItemId]) -> Result<DeleteReply, FetchError> {
        self.record(Call::DeleteBulk(ids.to_vec()));
        next(&self.deletes)
    }

    async fn update_bulk(
        &self,
        ids: &[ItemId],
        fields: &BulkFields,
    ) -> Result<UpdateReply, FetchError> {
        self.record(Call::UpdateBulk(ids.to_vec(), fields.clone()));
        next(&self.updates)
    }

    async fn attach_collections(
        &self,
        ids: &[ItemId],
        names: &[String],
    ) -> Result<AttachReply, FetchError> {
        self.record(Call::Attach(ids.to_vec(), names.to_vec()));
        next(&self.attaches)
    }

    async fn collections(&self) -> Result<Vec<CollectionSummary>, FetchError> {
        self.record(Call::Collections);
        next(&self.collections)
    }

    async fn collection_movies(&self, id: u64) -> Result<Vec<CollectionEntry>, FetchError> {
        self.record(Call::CollectionMovies(id));
        next(&self.members)
    }

    async fn suggestions(&self, title: &str, year: &str) -> Result<Vec<Suggestion>, FetchError> {
        self.record(Call::Suggestions(title.to_string(), year.to_string()));
        next(&self.suggestions)
    }

    async fn add_item(&self, form: &AddForm) -> Result<AddReply, FetchError> {
        self.record(Call::Add(form.clone()));
        next(&self.adds)
    }
}

/// Session owned by a `RefCell`; `close` simulates the view going away.
pub struct TestHost {
    session: RefCell<Option<CatalogueSession<MemoryStore>>>,
}

impl TestHost {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            session: RefCell::new(Some(CatalogueSession::new(store))),
        }
    }

    pub fn close(&self) {
        self.session.borrow_mut().take();
    }

    /// Read-only look at the session for assertions.
    pub fn read<R>(&self, f: impl FnOnce(&CatalogueSession<MemoryStore>) -> R) -> R {
        let session = self.session.borrow();
        f(session.as_ref().expect("session closed"))
    }
}

impl SessionHost for TestHost {
    type Store = MemoryStore;

    fn with_session<R>(
        &self,
        f: impl FnOnce(&mut CatalogueSession<MemoryStore>) -> R,
    ) -> Option<R> {
        // Panics if a driver ever holds a borrow across an await.
        let mut session = self.session.borrow_mut();
        session.as_mut().map(f)
    }
}

pub fn item(id: ItemId, title: &str) -> ItemSummary {
    ItemSummary {
        id,
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn listing(page: u32, pages: u32, items: Vec<ItemSummary>) -> ListingResult {
    let total_count = items.len() as u64;
    ListingResult {
        items,
        page,
        total_pages: pages,
        total_count,
    }
}

/// Host whose session has rendered `items` on page 1 of `pages`.
pub async fn loaded_host(api: &ScriptedApi, pages: u32, items: Vec<ItemSummary>) -> TestHost {
    let host = TestHost::new(MemoryStore::new());
    api.push_listing(Ok(listing(1, pages, items)));
    let ticket = host
        .with_session(|s| s.start())
        .expect("session open");
    reelshelf_core::session::refresh(&host, api, ticket)
        .await
        .expect("initial load");
    host
}
