//! Async command drivers.
//!
//! Each driver takes a short borrow of the session to prepare a request,
//! awaits the [`CatalogueApi`] with no borrow held, then takes another short
//! borrow to settle. If the host has dropped the session in between, the
//! response is thrown away and the driver returns [`ActionError::Detached`].

use crate::api::CatalogueApi;
use crate::error::ActionError;
use crate::fetcher::FetchTicket;
use crate::models::Suggestion;
use crate::mutation::{BulkAction, MutationReport};
use crate::prefs::PreferenceStore;

use super::{BulkInputs, CatalogueSession};

/// Owner of a [`CatalogueSession`] that drivers can borrow briefly.
pub trait SessionHost {
    type Store: PreferenceStore;

    /// Run `f` against the session. `None` means the session is gone.
    fn with_session<R>(&self, f: impl FnOnce(&mut CatalogueSession<Self::Store>) -> R)
    -> Option<R>;
}

fn enter<H, R>(
    host: &H,
    f: impl FnOnce(&mut CatalogueSession<H::Store>) -> R,
) -> Result<R, ActionError>
where
    H: SessionHost,
{
    host.with_session(f).ok_or_else(|| {
        tracing::debug!("session closed before the response arrived");
        ActionError::Detached
    })
}

/// Load the listing `ticket` describes. `Ok(false)` means a newer request
/// superseded it.
pub async fn refresh<H, A>(host: &H, api: &A, ticket: FetchTicket) -> Result<bool, ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let result = api.fetch_listing(&ticket.query).await;
    Ok(enter(host, |s| s.apply_listing(&ticket, result))??)
}

/// Reload after a mutation. The mutation already succeeded, so a failed
/// reload is only reported through the listing's own notice.
async fn reload<H, A>(host: &H, api: &A, ticket: FetchTicket)
where
    H: SessionHost,
    A: CatalogueApi,
{
    if let Err(e) = refresh(host, api, ticket).await {
        tracing::debug!(error = %e, "reload after mutation failed");
    }
}

// =============================================================================
// Bulk Mutations
// =============================================================================

async fn run_bulk<H, A>(
    host: &H,
    api: &A,
    action: impl FnOnce(&BulkInputs) -> BulkAction,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<MutationReport, ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let pending = enter(host, |s| {
        let action = action(s.bulk_inputs());
        s.prepare_bulk(action)
    })??;
    if !confirm(&pending.prompt()) {
        tracing::debug!(action = pending.action.label(), "bulk mutation declined");
        return Err(ActionError::Cancelled);
    }

    let reply = pending.execute(api).await;
    let outcome = enter(host, |s| s.finish_bulk(&pending, reply))??;

    reload(host, api, outcome.ticket).await;
    if outcome.report.refresh_collections {
        if let Err(e) = load_collections(host, api).await {
            tracing::debug!(error = %e, "collections reload failed");
        }
    }
    Ok(outcome.report)
}

/// Delete every selected record.
pub async fn run_bulk_delete<H, A>(
    host: &H,
    api: &A,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<MutationReport, ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    run_bulk(host, api, |_| BulkAction::Delete, confirm).await
}

/// Apply the bulk toolbar's status/format/version to every selected record.
pub async fn run_bulk_update<H, A>(
    host: &H,
    api: &A,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<MutationReport, ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    run_bulk(host, api, |inputs| BulkAction::Update(inputs.fields()), confirm).await
}

/// Add every selected record to the collections named in the toolbar.
pub async fn run_bulk_attach<H, A>(
    host: &H,
    api: &A,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<MutationReport, ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    run_bulk(
        host,
        api,
        |inputs| BulkAction::AttachCollections(inputs.collection_names()),
        confirm,
    )
    .await
}

// =============================================================================
// Edit Dialog
// =============================================================================

/// Open the edit dialog for `id` and fill in its collections once known.
pub async fn open_edit<H, A>(host: &H, api: &A, id: u64) -> Result<(), ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let Some(generation) = enter(host, |s| s.open_edit(id))? else {
        return Ok(());
    };
    match api.item_collections(id).await {
        Ok(names) => {
            enter(host, |s| s.edit_collections_loaded(generation, &names))?;
        }
        Err(e) => tracing::debug!(id, error = %e, "item collections not loaded"),
    }
    Ok(())
}

/// Save the open dialog.
pub async fn save_edit<H, A>(host: &H, api: &A) -> Result<(), ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let Some(request) = enter(host, |s| s.begin_save())? else {
        return Err(ActionError::Detached);
    };
    let request = request?;
    let result = api.save_item(request.edit.id, &request.payload).await;
    let ticket = enter(host, |s| s.finish_save(&request, result))??;

    reload(host, api, ticket).await;
    if let Err(e) = load_collections(host, api).await {
        tracing::debug!(error = %e, "collections reload failed");
    }
    Ok(())
}

/// Delete the record in the open dialog.
pub async fn delete_one<H, A>(
    host: &H,
    api: &A,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<(), ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let Some(edit) = enter(host, |s| s.begin_delete_one())? else {
        return Err(ActionError::Detached);
    };
    if !confirm("Are you sure you want to delete this movie?") {
        return Err(ActionError::Cancelled);
    }
    let result = api.delete_item(edit.id).await;
    let ticket = enter(host, |s| s.finish_delete_one(&edit, result))??;
    reload(host, api, ticket).await;
    Ok(())
}

/// Look up metadata candidates for the open dialog's title and year.
pub async fn identify<H, A>(host: &H, api: &A) -> Result<Vec<Suggestion>, ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let Some(request) = enter(host, |s| s.identify_request())? else {
        return Err(ActionError::Detached);
    };
    let (title, year) = request?;
    let suggestions = api.suggestions(&title, &year).await.inspect_err(|e| {
        tracing::warn!(%title, error = %e, "suggestion lookup failed");
    })?;
    tracing::debug!(%title, count = suggestions.len(), "suggestions loaded");
    Ok(suggestions)
}

// =============================================================================
// Add & Collections
// =============================================================================

/// Submit the add form.
pub async fn add_item<H, A>(host: &H, api: &A) -> Result<(), ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let form = enter(host, |s| s.begin_add())??;
    let result = api.add_item(&form).await;
    let ticket = enter(host, |s| s.finish_add(&form, result))??;
    reload(host, api, ticket).await;
    Ok(())
}

/// Reload the collection list.
pub async fn load_collections<H, A>(host: &H, api: &A) -> Result<(), ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    let result = api.collections().await;
    Ok(enter(host, |s| s.collections_loaded(result))??)
}

/// Expand collection `id`, fetching its members unless already cached.
pub async fn expand_collection<H, A>(host: &H, api: &A, id: u64) -> Result<(), ActionError>
where
    H: SessionHost,
    A: CatalogueApi,
{
    if !enter(host, |s| s.expand_collection(id))? {
        return Ok(());
    }
    let result = api.collection_movies(id).await;
    Ok(enter(host, |s| s.collection_members_loaded(id, result))??)
}
