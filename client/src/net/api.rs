//! Directory-then-detail loading for candidates and problems.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API exposes each collection as an index (`GET {base}/{collection}`)
//! listing key descriptors such as `"partidos/42"`, plus a detail endpoint per
//! identifier (`GET {base}/{collection}/{id}`). Detail bodies wrap the record
//! as a JSON *string* under `data`, so it is decoded twice.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the HTTP fetcher always errors, since lists are only
//! loaded in the browser after mount.
//!
//! ERROR HANDLING
//! ==============
//! Index failures (transport, status, missing `data.keys`) are returned to the
//! caller so the page can offer a retry. Detail failures never escape: each is
//! logged and replaced by the record kind's `failed` placeholder carrying the
//! same identifier, so one bad item cannot shrink or fail the list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use futures::future::join_all;
use serde::Deserialize as _;
use serde_json::Value;

use super::config::api_base_url;
use super::error::ApiError;
use super::types::{Candidate, DirectoryRecord, KeyDescriptor, Problem};

/// Source of JSON documents keyed by absolute URL.
pub trait JsonFetcher {
    /// GET `url` and decode the body as JSON. Non-2xx responses are errors.
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, ApiError>>;
}

/// Browser fetcher backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFetcher;

impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| ApiError::Transport { url: url.to_owned(), message: e.to_string() })?;
            if !resp.ok() {
                return Err(ApiError::Status { url: url.to_owned(), status: resp.status() });
            }
            resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport { url: url.to_owned(), message: "not available on server".to_owned() })
        }
    }
}

/// Load every candidate listed by `GET {base}/partidos`.
///
/// # Errors
///
/// Returns an error only when the index request fails or is malformed.
pub async fn fetch_candidates() -> Result<Vec<Candidate>, ApiError> {
    fetch_directory(&HttpFetcher, api_base_url()).await
}

/// Load every problem listed by `GET {base}/problemas`.
///
/// # Errors
///
/// Returns an error only when the index request fails or is malformed.
pub async fn fetch_problems() -> Result<Vec<Problem>, ApiError> {
    fetch_directory(&HttpFetcher, api_base_url()).await
}

/// Fetch the index of `R`'s collection, then every detail document.
///
/// Detail requests are all started before any is awaited and the output keeps
/// index order. The returned list always has one record per key.
///
/// # Errors
///
/// Returns an error when the index request fails, or its body lacks
/// `data.keys` or holds a key that is not a `{ name }` descriptor.
pub async fn fetch_directory<R, F>(fetcher: &F, base_url: &str) -> Result<Vec<R>, ApiError>
where
    R: DirectoryRecord,
    F: JsonFetcher,
{
    let index_url = index_endpoint(base_url, R::COLLECTION);
    let keys = match fetcher.get_json(&index_url).await.and_then(|body| parse_index(&body)) {
        Ok(keys) => keys,
        Err(e) => {
            log::error!("loading {} index failed: {e}", R::COLLECTION);
            return Err(e);
        }
    };

    let records = join_all(keys.iter().map(|key| fetch_record::<R, F>(fetcher, base_url, &key.name))).await;
    Ok(records)
}

async fn fetch_record<R, F>(fetcher: &F, base_url: &str, key_name: &str) -> R
where
    R: DirectoryRecord,
    F: JsonFetcher,
{
    let Some(id) = derive_id(key_name) else {
        log::warn!("{} key {key_name:?} has no identifier segment", R::COLLECTION);
        return R::failed(key_name);
    };

    let url = detail_endpoint(base_url, R::COLLECTION, id);
    match fetcher.get_json(&url).await.and_then(|body| decode_detail(&body)) {
        Ok(record) => R::from_record(id, &record),
        Err(e) => {
            log::warn!("loading {} {id} failed: {e}", R::COLLECTION);
            R::failed(id)
        }
    }
}

/// Extract the key descriptors from an index body.
///
/// # Errors
///
/// [`ApiError::MissingKeys`] when `data.keys` is absent or not an array;
/// [`ApiError::MalformedKey`] when an entry lacks a string `name`.
pub fn parse_index(body: &Value) -> Result<Vec<KeyDescriptor>, ApiError> {
    let keys = body
        .get("data")
        .and_then(|data| data.get("keys"))
        .and_then(Value::as_array)
        .ok_or(ApiError::MissingKeys)?;

    keys.iter()
        .enumerate()
        .map(|(index, key)| {
            KeyDescriptor::deserialize(key).map_err(|_| ApiError::MalformedKey { index })
        })
        .collect()
}

/// Unwrap the double-encoded record inside a detail body.
///
/// # Errors
///
/// [`ApiError::MissingPayload`] when `data` is absent or not a string,
/// [`ApiError::Decode`] when it is not JSON, and [`ApiError::NullRecord`] when
/// it decodes to `null`.
pub fn decode_detail(body: &Value) -> Result<Value, ApiError> {
    let payload = body.get("data").and_then(Value::as_str).ok_or(ApiError::MissingPayload)?;
    let record: Value = serde_json::from_str(payload)?;
    if record.is_null() {
        return Err(ApiError::NullRecord);
    }
    Ok(record)
}

/// Identifier of a key name: its second `/`-separated segment.
///
/// `"partidos/42"` yields `"42"`; names without a non-empty second segment
/// yield `None`.
pub fn derive_id(name: &str) -> Option<&str> {
    name.split('/').nth(1).filter(|id| !id.is_empty())
}

fn index_endpoint(base_url: &str, collection: &str) -> String {
    format!("{base_url}/{collection}")
}

fn detail_endpoint(base_url: &str, collection: &str, id: &str) -> String {
    format!("{base_url}/{collection}/{id}")
}
