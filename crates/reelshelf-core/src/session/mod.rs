//! Catalogue session.
//!
//! [`CatalogueSession`] owns every piece of per-tab state: the query, the
//! rendered grid, the selection, notices, display settings and the dialogs.
//! Its methods are synchronous command handlers; anything that needs the
//! network is split into a `begin`/`finish` pair so the async drivers in
//! [`drivers`] never hold the session across an `.await`.
//!
//! Query commands return a [`FetchTicket`]; pass it to [`refresh`] to load
//! the listing it describes.

mod collections;
mod drivers;

pub use collections::CollectionsView;
pub use drivers::{
    SessionHost, add_item, delete_one, expand_collection, identify, load_collections, open_edit,
    refresh, run_bulk_attach, run_bulk_delete, run_bulk_update, save_edit,
};

use crate::edit::{AddField, AddForm, EditField, EditForm, EditPayload, PendingEdit};
use crate::error::{FetchError, ValidationError};
use crate::fetcher::{FetchTicket, Fetcher};
use crate::models::{
    AddReply, CollectionEntry, CollectionSummary, ItemId, ListingResult, Suggestion,
};
use crate::mutation::{
    BulkAction, BulkFields, MutationReply, MutationReport, PendingMutation,
    parse_collection_names,
};
use crate::notify::{NoticeLevel, Notices};
use crate::prefs::{DisplayPrefs, DisplayToggle, PreferenceStore};
use crate::query::{QueryState, SortOrder, StatusFilter};
use crate::render::{GridView, render};
use crate::selection::SelectionController;

/// Raw values of the bulk toolbar inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkInputs {
    pub status: String,
    pub format: String,
    pub version: String,
    /// Comma-separated collection names.
    pub collections: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkInput {
    Status,
    Format,
    Version,
    Collections,
}

impl BulkInputs {
    pub fn fields(&self) -> BulkFields {
        BulkFields::from_inputs(&self.status, &self.format, &self.version)
    }

    pub fn collection_names(&self) -> Vec<String> {
        parse_collection_names(&self.collections)
    }
}

/// Bulk mutation that went through, with the listing reload it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome {
    pub report: MutationReport,
    pub ticket: FetchTicket,
}

/// Save in flight: the dialog as it was when submitted plus the body sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub edit: PendingEdit,
    pub payload: EditPayload,
}

#[derive(Debug)]
pub struct CatalogueSession<S: PreferenceStore> {
    store: S,
    query: QueryState,
    fetcher: Fetcher,
    grid: Option<GridView>,
    selection: SelectionController,
    notices: Notices,
    display: DisplayPrefs,
    edit: Option<PendingEdit>,
    edit_generation: u64,
    collections: CollectionsView,
    add_form: AddForm,
    bulk_inputs: BulkInputs,
}

impl<S: PreferenceStore> CatalogueSession<S> {
    /// Restore preferences from `store`. Nothing is fetched until
    /// [`CatalogueSession::start`].
    pub fn new(store: S) -> Self {
        let query = QueryState::load(&store);
        let display = DisplayPrefs::load(&store);
        let add_form = AddForm::load(&store);
        tracing::debug!(?query, "session restored");
        Self {
            store,
            query,
            fetcher: Fetcher::new(),
            grid: None,
            selection: SelectionController::new(),
            notices: Notices::new(),
            display,
            edit: None,
            edit_generation: 0,
            collections: CollectionsView::default(),
            add_form,
            bulk_inputs: BulkInputs::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Last applied render, `None` before the first successful load.
    pub fn grid(&self) -> Option<&GridView> {
        self.grid.as_ref()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn display(&self) -> &DisplayPrefs {
        &self.display
    }

    pub fn edit(&self) -> Option<&PendingEdit> {
        self.edit.as_ref()
    }

    pub fn collections(&self) -> &CollectionsView {
        &self.collections
    }

    pub fn add_form(&self) -> &AddForm {
        &self.add_form
    }

    pub fn bulk_inputs(&self) -> &BulkInputs {
        &self.bulk_inputs
    }

    pub fn is_loading(&self) -> bool {
        self.fetcher.is_loading()
    }

    // =========================================================================
    // Query Commands
    // =========================================================================

    /// Initial load with the restored query.
    pub fn start(&mut self) -> FetchTicket {
        self.fetcher.issue(&self.query)
    }

    fn fetch(&mut self) -> FetchTicket {
        self.fetcher.issue(&self.query)
    }

    pub fn on_search_changed(&mut self, text: &str) -> FetchTicket {
        self.query.set_query(&mut self.store, text);
        self.fetch()
    }

    pub fn on_sort_selected(&mut self, sort: SortOrder) -> FetchTicket {
        self.query.set_sort(&mut self.store, sort);
        self.fetch()
    }

    /// Returns `None` for input that is not a single character.
    pub fn on_letter_selected(&mut self, letter: &str) -> Option<FetchTicket> {
        if letter.chars().count() > 1 {
            return None;
        }
        self.query.set_letter_filter(&mut self.store, letter);
        Some(self.fetch())
    }

    pub fn on_status_filter_changed(&mut self, status: StatusFilter) -> FetchTicket {
        self.query.set_status_filter(&mut self.store, status);
        self.fetch()
    }

    pub fn on_format_filters_changed(&mut self, formats: Vec<String>) -> FetchTicket {
        self.query.set_format_filters(&mut self.store, formats);
        self.fetch()
    }

    pub fn on_filters_cleared(&mut self) -> FetchTicket {
        self.query.clear_filters(&mut self.store);
        self.fetch()
    }

    /// `Some(0)` is ignored and returns `None`.
    pub fn on_page_size_changed(&mut self, size: Option<u32>) -> Option<FetchTicket> {
        if size == Some(0) {
            return None;
        }
        self.query.set_page_size(&mut self.store, size);
        Some(self.fetch())
    }

    /// Page 0 is ignored and returns `None`.
    pub fn on_page_requested(&mut self, page: u32) -> Option<FetchTicket> {
        if page == 0 {
            return None;
        }
        self.query.set_page(page);
        Some(self.fetch())
    }

    /// Step the requested page forward by one, if the "next" control is shown.
    pub fn on_next_page(&mut self) -> Option<FetchTicket> {
        self.grid.as_ref()?.pagination.next?;
        self.on_page_requested(self.query.page + 1)
    }

    /// Step the requested page back by one. Page 1 has no predecessor.
    pub fn on_prev_page(&mut self) -> Option<FetchTicket> {
        self.grid.as_ref()?.pagination.prev?;
        let prev = self.query.page.checked_sub(1).filter(|&p| p > 0)?;
        self.on_page_requested(prev)
    }

    fn refresh_current(&mut self) -> FetchTicket {
        self.fetch()
    }

    fn refresh_first_page(&mut self) -> FetchTicket {
        self.query.set_page(1);
        self.fetch()
    }

    /// Settle a listing response.
    ///
    /// Returns `Ok(true)` when the grid was replaced and `Ok(false)` when the
    /// ticket was superseded and the response discarded. A failure for the
    /// latest ticket keeps the current grid and raises a notice.
    pub fn apply_listing(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ListingResult, FetchError>,
    ) -> Result<bool, FetchError> {
        if !self.fetcher.accept(ticket) {
            return Ok(false);
        }
        match result {
            Ok(listing) => {
                let view = render(&listing);
                self.selection.sync_rendered(&view.ids());
                tracing::debug!(
                    seq = ticket.seq,
                    items = view.cards.len(),
                    total = view.total_count,
                    "listing rendered"
                );
                self.grid = Some(view);
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(seq = ticket.seq, error = %e, "listing fetch failed");
                self.notices.failure("Load", e.kind());
                Err(e)
            }
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn toggle_edit_mode(&mut self) {
        self.selection.toggle_edit_mode();
    }

    pub fn toggle_item(&mut self, id: ItemId, checked: bool) {
        self.selection.toggle_item(id, checked);
    }

    pub fn set_select_all(&mut self, checked: bool) {
        self.selection.set_select_all(checked);
    }

    pub fn select_none(&mut self) {
        self.selection.select_none();
    }

    // =========================================================================
    // Bulk Mutations
    // =========================================================================

    pub fn set_bulk_input(&mut self, input: BulkInput, value: impl Into<String>) {
        let value = value.into();
        match input {
            BulkInput::Status => self.bulk_inputs.status = value,
            BulkInput::Format => self.bulk_inputs.format = value,
            BulkInput::Version => self.bulk_inputs.version = value,
            BulkInput::Collections => self.bulk_inputs.collections = value,
        }
    }

    /// Validate `action` against the current selection. A rejection is shown
    /// as a notice straight away.
    pub fn prepare_bulk(&mut self, action: BulkAction) -> Result<PendingMutation, ValidationError> {
        PendingMutation::prepare(self.selection.selected_ids(), action).inspect_err(|e| {
            self.notices.rejected(e);
        })
    }

    /// Settle an executed bulk mutation. Success clears the selection and
    /// reloads page 1; failure leaves selection and mode as they are.
    pub fn finish_bulk(
        &mut self,
        pending: &PendingMutation,
        reply: Result<MutationReply, FetchError>,
    ) -> Result<BulkOutcome, FetchError> {
        let label = pending.action.label();
        match reply {
            Ok(reply) => {
                let report = pending.report(reply);
                tracing::info!(action = label, ?reply, "bulk mutation applied");
                self.notices
                    .success(report.title.clone(), report.subtitle.clone());
                self.selection.select_none();
                if matches!(pending.action, BulkAction::AttachCollections(_)) {
                    self.bulk_inputs.collections.clear();
                }
                let ticket = self.refresh_first_page();
                Ok(BulkOutcome { report, ticket })
            }
            Err(e) => {
                tracing::warn!(action = label, error = %e, "bulk mutation failed");
                self.notices.failure(label, e.kind());
                Err(e)
            }
        }
    }

    // =========================================================================
    // Edit Dialog
    // =========================================================================

    /// Open the dialog for a rendered record. Returns the dialog generation,
    /// or `None` when `id` is not on screen.
    pub fn open_edit(&mut self, id: ItemId) -> Option<u64> {
        let card = self.grid.as_ref()?.cards.iter().find(|c| c.id == id)?;
        self.edit_generation += 1;
        self.edit = Some(PendingEdit::open(&card.item, self.edit_generation));
        Some(self.edit_generation)
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    pub fn set_edit_field(&mut self, field: EditField, value: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.form.set(field, value);
        }
    }

    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) {
        if let Some(edit) = self.edit.as_mut() {
            edit.form.apply_suggestion(suggestion);
        }
    }

    /// Fill the collections field, if the dialog from `generation` is still
    /// open.
    pub fn edit_collections_loaded(&mut self, generation: u64, names: &[String]) -> bool {
        match self.edit.as_mut() {
            Some(edit) if edit.generation == generation => {
                edit.collections_loaded(names);
                true
            }
            _ => {
                tracing::debug!(generation, "discarding collections for closed dialog");
                false
            }
        }
    }

    fn edit_open(&mut self, generation: u64) -> Option<&mut PendingEdit> {
        self.edit.as_mut().filter(|e| e.generation == generation)
    }

    /// Title and year to look up, from the open dialog. `None` when no
    /// dialog is open.
    pub fn identify_request(&self) -> Option<Result<(String, String), ValidationError>> {
        let form = &self.edit.as_ref()?.form;
        Some(Self::lookup_terms(form))
    }

    fn lookup_terms(form: &EditForm) -> Result<(String, String), ValidationError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok((title.to_string(), form.year.trim().to_string()))
    }

    /// Build the save request for the open dialog. Validation errors are
    /// shown inline.
    pub fn begin_save(&mut self) -> Option<Result<SaveRequest, ValidationError>> {
        let edit = self.edit.as_mut()?;
        Some(match edit.form.payload() {
            Ok(payload) => {
                edit.error = None;
                Ok(SaveRequest {
                    edit: edit.clone(),
                    payload,
                })
            }
            Err(e) => {
                edit.error = Some(e.to_string());
                Err(e)
            }
        })
    }

    /// Settle a save. Success closes the dialog and reloads the current page.
    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: Result<(), FetchError>,
    ) -> Result<FetchTicket, FetchError> {
        let generation = request.edit.generation;
        match result {
            Ok(()) => {
                tracing::info!(id = request.edit.id, "record saved");
                if self.edit_open(generation).is_some() {
                    self.edit = None;
                }
                self.notices.push(
                    NoticeLevel::Success,
                    request.payload.title.clone(),
                    request.edit.change_summary(&request.payload),
                    Some(request.edit.poster_url.clone()),
                );
                Ok(self.refresh_current())
            }
            Err(e) => {
                tracing::warn!(id = request.edit.id, error = %e, "record save failed");
                self.dialog_failed(generation, "Save", &e);
                Err(e)
            }
        }
    }

    /// Snapshot of the open dialog for a delete.
    pub fn begin_delete_one(&self) -> Option<PendingEdit> {
        self.edit.clone()
    }

    pub fn finish_delete_one(
        &mut self,
        edit: &PendingEdit,
        result: Result<(), FetchError>,
    ) -> Result<FetchTicket, FetchError> {
        match result {
            Ok(()) => {
                tracing::info!(id = edit.id, "record deleted");
                if self.edit_open(edit.generation).is_some() {
                    self.edit = None;
                }
                self.notices.push(
                    NoticeLevel::Success,
                    edit.original_title(),
                    "Removed",
                    Some(edit.poster_url.clone()),
                );
                Ok(self.refresh_current())
            }
            Err(e) => {
                tracing::warn!(id = edit.id, error = %e, "record delete failed");
                self.dialog_failed(edit.generation, "Delete", &e);
                Err(e)
            }
        }
    }

    /// Inline error when the dialog is still open, a notice otherwise.
    fn dialog_failed(&mut self, generation: u64, action: &str, e: &FetchError) {
        let kind = e.kind();
        match self.edit_open(generation) {
            Some(edit) => edit.error = Some(format!("{action} failed: {}", kind.message())),
            None => {
                self.notices.failure(action, kind);
            }
        }
    }

    // =========================================================================
    // Add Form
    // =========================================================================

    pub fn set_add_field(&mut self, field: AddField, value: impl Into<String>) {
        self.add_form.update(&mut self.store, field, value);
    }

    pub fn begin_add(&mut self) -> Result<AddForm, ValidationError> {
        match self.add_form.validate() {
            Ok(()) => Ok(self.add_form.clone()),
            Err(e) => {
                self.notices.rejected(&e);
                Err(e)
            }
        }
    }

    /// Settle an add. Success clears the per-movie inputs and reloads page 1
    /// with the current filters.
    pub fn finish_add(
        &mut self,
        form: &AddForm,
        result: Result<AddReply, FetchError>,
    ) -> Result<FetchTicket, FetchError> {
        match result {
            Ok(reply) => {
                let title = [form.title.trim(), reply.title.trim()]
                    .into_iter()
                    .find(|t| !t.is_empty())
                    .unwrap_or("Movie")
                    .to_string();
                tracing::info!(%title, "record added");
                self.notices
                    .push(NoticeLevel::Success, title, "Added", Some(reply.poster_url));
                self.add_form.clear_entered(&mut self.store);
                Ok(self.refresh_first_page())
            }
            Err(e) => {
                tracing::warn!(error = %e, "add failed");
                self.notices.failure("Add", e.kind());
                Err(e)
            }
        }
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn collections_loaded(
        &mut self,
        result: Result<Vec<CollectionSummary>, FetchError>,
    ) -> Result<(), FetchError> {
        match result {
            Ok(items) => {
                self.collections.set_items(items);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "collections load failed");
                self.notices.failure("Loading collections", e.kind());
                Err(e)
            }
        }
    }

    /// Returns true when the members of `id` need fetching.
    pub fn expand_collection(&mut self, id: u64) -> bool {
        self.collections.expand(id)
    }

    pub fn collapse_collection(&mut self, id: u64) {
        self.collections.collapse(id);
    }

    pub fn collection_members_loaded(
        &mut self,
        id: u64,
        result: Result<Vec<CollectionEntry>, FetchError>,
    ) -> Result<(), FetchError> {
        match result {
            Ok(entries) => {
                self.collections.members_loaded(id, entries);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "collection members load failed");
                self.collections.members_failed(id);
                self.notices.failure("Loading collection", e.kind());
                Err(e)
            }
        }
    }

    // =========================================================================
    // Display & Notices
    // =========================================================================

    pub fn apply_display(&mut self, toggle: DisplayToggle) {
        self.display.apply(&mut self.store, toggle);
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }
}
