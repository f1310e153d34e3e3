//! Remote catalogue API.
//!
//! [`CatalogueApi`] is the seam between the engine and the network. The
//! browser build talks to the catalogue server through [`HttpApi`]; tests
//! substitute a scripted implementation.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{Config, endpoints};
use crate::edit::{AddForm, EditPayload};
use crate::error::FetchError;
use crate::models::{
    AddReply, AttachReply, CollectionEntry, CollectionSummary, CollectionsBody, DeleteReply,
    IdsBody, ItemId, ListingResult, Suggestion, UpdateBody, UpdateReply,
};
use crate::mutation::BulkFields;
use crate::query::{QueryState, encode_params};

/// Operations the catalogue server exposes.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait CatalogueApi {
    async fn fetch_listing(&self, query: &QueryState) -> Result<ListingResult, FetchError>;
    async fn item_collections(&self, id: ItemId) -> Result<Vec<String>, FetchError>;
    async fn save_item(&self, id: ItemId, payload: &EditPayload) -> Result<(), FetchError>;
    async fn delete_item(&self, id: ItemId) -> Result<(), FetchError>;
    async fn delete_bulk(&self, ids: &[ItemId]) -> Result<DeleteReply, FetchError>;
    async fn update_bulk(
        &self,
        ids: &[ItemId],
        fields: &BulkFields,
    ) -> Result<UpdateReply, FetchError>;
    async fn attach_collections(
        &self,
        ids: &[ItemId],
        names: &[String],
    ) -> Result<AttachReply, FetchError>;
    async fn collections(&self) -> Result<Vec<CollectionSummary>, FetchError>;
    async fn collection_movies(&self, id: u64) -> Result<Vec<CollectionEntry>, FetchError>;
    async fn suggestions(&self, title: &str, year: &str) -> Result<Vec<Suggestion>, FetchError>;
    async fn add_item(&self, form: &AddForm) -> Result<AddReply, FetchError>;
}

/// Fetch API client for the catalogue server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpApi {
    base: &'static str,
}

impl HttpApi {
    pub fn new(config: Config) -> Self {
        Self {
            base: config.api_base,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = Request::get(&url).send().await.map_err(network)?;
        read_json(resp).await
    }

    async fn send_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        Request::post(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(body)
            .map_err(|e| FetchError::Request(e.to_string()))?
            .send()
            .await
            .map_err(network)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        let resp = self.send_json(path, body).await?;
        read_optional_json(resp).await
    }

    async fn post_status(&self, path: &str) -> Result<(), FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = Request::post(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(network)?;
        ensure_ok(&resp)
    }
}

impl CatalogueApi for HttpApi {
    async fn fetch_listing(&self, query: &QueryState) -> Result<ListingResult, FetchError> {
        self.get_json(&query.listing_path()).await
    }

    async fn item_collections(&self, id: ItemId) -> Result<Vec<String>, FetchError> {
        self.get_json(&endpoints::item_collections(id)).await
    }

    async fn save_item(&self, id: ItemId, payload: &EditPayload) -> Result<(), FetchError> {
        let resp = self.send_json(&endpoints::edit(id), payload).await?;
        ensure_ok(&resp)
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), FetchError> {
        self.post_status(&endpoints::delete(id)).await
    }

    async fn delete_bulk(&self, ids: &[ItemId]) -> Result<DeleteReply, FetchError> {
        self.post_json(endpoints::DELETE_BULK, &IdsBody { ids }).await
    }

    async fn update_bulk(
        &self,
        ids: &[ItemId],
        fields: &BulkFields,
    ) -> Result<UpdateReply, FetchError> {
        self.post_json(endpoints::UPDATE_BULK, &UpdateBody { ids, fields })
            .await
    }

    async fn attach_collections(
        &self,
        ids: &[ItemId],
        names: &[String],
    ) -> Result<AttachReply, FetchError> {
        let body = CollectionsBody {
            ids,
            collections: names,
        };
        self.post_json(endpoints::ADD_BULK_COLLECTIONS, &body).await
    }

    async fn collections(&self) -> Result<Vec<CollectionSummary>, FetchError> {
        self.get_json(endpoints::COLLECTIONS).await
    }

    async fn collection_movies(&self, id: u64) -> Result<Vec<CollectionEntry>, FetchError> {
        self.get_json(&endpoints::collection_movies(id)).await
    }

    async fn suggestions(&self, title: &str, year: &str) -> Result<Vec<Suggestion>, FetchError> {
        let params = [("title", title.to_string()), ("year", year.to_string())];
        let path = format!("{}?{}", endpoints::SUGGESTIONS, encode_params(&params));
        self.get_json(&path).await
    }

    async fn add_item(&self, form: &AddForm) -> Result<AddReply, FetchError> {
        let url = self.url(endpoints::ADD);
        tracing::debug!(%url, "POST form");
        let resp = Request::post(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encode_params(&form.form_fields()))
            .map_err(|e| FetchError::Request(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        read_optional_json(resp).await
    }
}

fn network(e: gloo_net::Error) -> FetchError {
    FetchError::Network(e.to_string())
}

fn ensure_ok(resp: &Response) -> Result<(), FetchError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(FetchError::Server(resp.status()))
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    ensure_ok(&resp)?;
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Like [`read_json`] but an empty body decodes to `T::default()`.
async fn read_optional_json<T: DeserializeOwned + Default>(resp: Response) -> Result<T, FetchError> {
    ensure_ok(&resp)?;
    let text = resp
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}
