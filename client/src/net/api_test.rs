use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::task::{Context, Poll};

use futures::executor::block_on;
use futures::future::poll_fn;
use futures::task::noop_waker_ref;
use serde_json::json;

use super::*;
use crate::net::types::{LOAD_FAILED, PLACEHOLDER_IMAGE, PROBLEM_LOAD_FAILED_DESCRIPTION};

// =============================================================
// Helpers
// =============================================================

const BASE: &str = "http://api.test/api/v1";

/// In-memory fetcher: unknown URLs answer 404, every request is recorded.
#[derive(Default)]
struct StubFetcher {
    responses: HashMap<String, Result<Value, ApiError>>,
    requested: RefCell<Vec<String>>,
}

impl StubFetcher {
    fn with(mut self, path: &str, response: Result<Value, ApiError>) -> Self {
        self.responses.insert(format!("{BASE}{path}"), response);
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl JsonFetcher for StubFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.requested.borrow_mut().push(url.to_owned());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Status { url: url.to_owned(), status: 404 }))
    }
}

/// Wraps a stub so every detail request stays pending until `details` of
/// them have been issued. A loader that awaits details one at a time never
/// gets past the first.
struct GatedFetcher {
    inner: StubFetcher,
    index_url: String,
    details: usize,
    arrived: Cell<usize>,
}

impl GatedFetcher {
    fn new(inner: StubFetcher, index_path: &str, details: usize) -> Self {
        Self { inner, index_url: format!("{BASE}{index_path}"), details, arrived: Cell::new(0) }
    }
}

impl JsonFetcher for GatedFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        if url != self.index_url {
            self.arrived.set(self.arrived.get() + 1);
            poll_fn(|_| if self.arrived.get() >= self.details { Poll::Ready(()) } else { Poll::Pending }).await;
        }
        self.inner.get_json(url).await
    }
}

/// Poll `future` at most `max_polls` times without an executor.
fn poll_bounded<T>(future: impl Future<Output = T>, max_polls: usize) -> Option<T> {
    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(noop_waker_ref());
    (0..max_polls).find_map(|_| match future.as_mut().poll(&mut cx) {
        Poll::Ready(value) => Some(value),
        Poll::Pending => None,
    })
}

fn index(names: &[&str]) -> Value {
    let keys: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    json!({ "message": "ok", "data": { "keys": keys } })
}

fn detail(record: &Value) -> Value {
    json!({ "message": "ok", "data": record.to_string() })
}

fn candidate_record(name: &str, party: &str) -> Value {
    json!({
        "presidente": { "nombrePresidente": name, "foto": format!("/img/{name}.png") },
        "partido": party,
        "descripcion": format!("Perfil de {name}"),
    })
}

// =============================================================
// derive_id
// =============================================================

#[test]
fn derive_id_takes_second_segment() {
    assert_eq!(derive_id("partidos/42"), Some("42"));
}

#[test]
fn derive_id_ignores_trailing_segments() {
    assert_eq!(derive_id("problemas/7/extra"), Some("7"));
}

#[test]
fn derive_id_without_separator_is_none() {
    assert_eq!(derive_id("partidos"), None);
    assert_eq!(derive_id("partidos/"), None);
}

// =============================================================
// parse_index / decode_detail
// =============================================================

#[test]
fn parse_index_reads_key_names() {
    let keys = parse_index(&index(&["partidos/1", "partidos/2"])).unwrap();
    let names: Vec<&str> = keys.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, ["partidos/1", "partidos/2"]);
}

#[test]
fn parse_index_missing_keys_is_error() {
    assert_eq!(parse_index(&json!({ "data": {} })), Err(ApiError::MissingKeys));
    assert_eq!(parse_index(&json!({ "message": "ok" })), Err(ApiError::MissingKeys));
    assert_eq!(parse_index(&json!({ "data": { "keys": "nope" } })), Err(ApiError::MissingKeys));
}

#[test]
fn parse_index_rejects_key_without_name() {
    let body = json!({ "data": { "keys": [{ "name": "partidos/1" }, { "id": 2 }] } });
    assert_eq!(parse_index(&body), Err(ApiError::MalformedKey { index: 1 }));
}

#[test]
fn decode_detail_parses_embedded_string() {
    let record = decode_detail(&json!({ "data": "{\"titulo\":\"Combustible\"}" })).unwrap();
    assert_eq!(record["titulo"], "Combustible");
}

#[test]
fn decode_detail_errors() {
    assert_eq!(decode_detail(&json!({})), Err(ApiError::MissingPayload));
    assert_eq!(decode_detail(&json!({ "data": { "titulo": "x" } })), Err(ApiError::MissingPayload));
    assert!(matches!(decode_detail(&json!({ "data": "{not json" })), Err(ApiError::Decode(_))));
    assert_eq!(decode_detail(&json!({ "data": "null" })), Err(ApiError::NullRecord));
}

// =============================================================
// fetch_directory: list-level failures
// =============================================================

#[test]
fn index_without_keys_fails_the_list() {
    let fetcher = StubFetcher::default().with("/partidos", Ok(json!({ "data": {} })));
    let result = block_on(fetch_directory::<Candidate, _>(&fetcher, BASE));
    assert_eq!(result, Err(ApiError::MissingKeys));
    assert_eq!(fetcher.requested(), [format!("{BASE}/partidos")]);
}

#[test]
fn index_transport_failure_fails_the_list() {
    let err = ApiError::Transport { url: format!("{BASE}/problemas"), message: "offline".to_owned() };
    let fetcher = StubFetcher::default().with("/problemas", Err(err.clone()));
    let result = block_on(fetch_directory::<Problem, _>(&fetcher, BASE));
    assert_eq!(result, Err(err));
}

#[test]
fn index_status_failure_fails_the_list() {
    let fetcher = StubFetcher::default();
    let result = block_on(fetch_directory::<Problem, _>(&fetcher, BASE));
    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
}

// =============================================================
// fetch_directory: item-level failures
// =============================================================

#[test]
fn all_details_load_in_key_order() {
    let fetcher = StubFetcher::default()
        .with("/partidos", Ok(index(&["partidos/2", "partidos/1"])))
        .with("/partidos/1", Ok(detail(&candidate_record("Ana García", "Partido Verde"))))
        .with("/partidos/2", Ok(detail(&candidate_record("Carlos López", "Partido Rojo"))));

    let list = block_on(fetch_directory::<Candidate, _>(&fetcher, BASE)).unwrap();
    let ids: Vec<&str> = list.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["2", "1"]);
    assert_eq!(list[0].name, "Carlos López");
    assert_eq!(list[1].party, "Partido Verde");
    assert_eq!(list[1].image, "/img/Ana García.png");
}

#[test]
fn rejected_detail_becomes_failed_record_with_same_id() {
    let fetcher = StubFetcher::default()
        .with("/partidos", Ok(index(&["partidos/1", "partidos/2", "partidos/3"])))
        .with("/partidos/1", Ok(detail(&candidate_record("Ana García", "Partido Verde"))))
        .with("/partidos/3", Ok(detail(&candidate_record("María Rodríguez", "Partido Amarillo"))));

    let list = block_on(fetch_directory::<Candidate, _>(&fetcher, BASE)).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[1], Candidate::failed("2"));
    assert_eq!(list[1].name, LOAD_FAILED);
    assert_eq!(list[1].image, PLACEHOLDER_IMAGE);
    assert_eq!(list[0].name, "Ana García");
    assert_eq!(list[2].name, "María Rodríguez");
}

#[test]
fn malformed_embedded_json_becomes_failed_record() {
    let fetcher = StubFetcher::default()
        .with("/problemas", Ok(index(&["problemas/a", "problemas/b"])))
        .with("/problemas/a", Ok(json!({ "data": "{\"titulo\": " })))
        .with("/problemas/b", Ok(detail(&json!({ "titulo": "El Dólar", "descripcion": "Tipo de cambio" }))));

    let list = block_on(fetch_directory::<Problem, _>(&fetcher, BASE)).unwrap();
    assert_eq!(list[0].id, "a");
    assert_eq!(list[0].title, LOAD_FAILED);
    assert_eq!(list[0].description, PROBLEM_LOAD_FAILED_DESCRIPTION);
    assert_eq!(list[1].title, "El Dólar");
}

#[test]
fn key_without_identifier_is_kept_without_request() {
    let fetcher = StubFetcher::default().with("/problemas", Ok(index(&["problemas"])));

    let list = block_on(fetch_directory::<Problem, _>(&fetcher, BASE)).unwrap();
    assert_eq!(list, [Problem::failed("problemas")]);
    assert_eq!(fetcher.requested(), [format!("{BASE}/problemas")]);
}

#[test]
fn empty_index_yields_empty_list() {
    let fetcher = StubFetcher::default().with("/partidos", Ok(index(&[])));
    let list = block_on(fetch_directory::<Candidate, _>(&fetcher, BASE)).unwrap();
    assert!(list.is_empty());
}

#[test]
fn detail_requests_use_derived_ids() {
    let fetcher = StubFetcher::default().with("/partidos", Ok(index(&["partidos/42"])));
    let _ = block_on(fetch_directory::<Candidate, _>(&fetcher, BASE));
    assert_eq!(fetcher.requested(), [format!("{BASE}/partidos"), format!("{BASE}/partidos/42")]);
}

// =============================================================
// fetch_directory: concurrency
// =============================================================

#[test]
fn gate_blocks_a_lone_detail_request() {
    let fetcher = GatedFetcher::new(StubFetcher::default(), "/partidos", 2);
    let url = format!("{BASE}/partidos/1");
    assert!(poll_bounded(fetcher.get_json(&url), 16).is_none());
}

#[test]
fn detail_requests_are_all_in_flight_together() {
    let stub = StubFetcher::default()
        .with("/partidos", Ok(index(&["partidos/1", "partidos/2", "partidos/3"])))
        .with("/partidos/1", Ok(detail(&candidate_record("Ana García", "Partido Verde"))))
        .with("/partidos/2", Ok(detail(&candidate_record("Carlos López", "Partido Rojo"))))
        .with("/partidos/3", Ok(detail(&candidate_record("María Rodríguez", "Partido Amarillo"))));
    let fetcher = GatedFetcher::new(stub, "/partidos", 3);

    let list = poll_bounded(fetch_directory::<Candidate, _>(&fetcher, BASE), 16)
        .expect("details were awaited one at a time")
        .unwrap();

    assert_eq!(fetcher.arrived.get(), 3);
    let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ana García", "Carlos López", "María Rodríguez"]);
}
