//! Stateless request builder and response interpreter for the todo API.
//!
//! # Design
//! `TodoClient` is the only component that constructs request URLs or reads
//! response bodies; view-models go through it for every remote operation.
//! It holds just the resolved collection URL and carries no mutable state.
//! Each operation is split into a `build_*` method producing an
//! `HttpRequest` and a `parse_*` method consuming an `HttpResponse`; the
//! host executes the round-trip in between. Validation that must fail fast
//! (blank title, missing id) happens in `build_*`, before any request value
//! exists.

use tracing::warn;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

/// Whether a `build_save` call turned into a create or an update. Carried to
/// `parse_saved` so the right success status is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Create,
    Update,
}

/// Stateless client for the todo REST resource.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Every operation is single-shot: one request, one
/// success value or one error, no retries.
#[derive(Debug, Clone)]
pub struct TodoClient {
    collection_url: String,
}

impl TodoClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            collection_url: format!("{}/todos", config.prefix()),
        }
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{id}", self.collection_url)
    }

    /// Request for the full collection: `GET {base}/todos`.
    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection_url.clone())
    }

    /// Request for one item: `GET {base}/todos/{id}`.
    pub fn build_get(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.item_url(id))
    }

    /// Create-or-update dispatch: `POST {base}/todos` for a never-persisted
    /// item, `PUT {base}/todos/{id}` otherwise. A blank title fails here,
    /// before any request exists.
    pub fn build_save(&self, todo: &Todo) -> Result<(SaveKind, HttpRequest), ApiError> {
        if todo.blank_title() {
            return Err(ApiError::Validation("title is required".to_string()));
        }
        let body = serde_json::to_string(todo)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(match todo.id {
            None => (
                SaveKind::Create,
                HttpRequest::json(HttpMethod::Post, self.collection_url.clone(), body),
            ),
            Some(id) => (
                SaveKind::Update,
                HttpRequest::json(HttpMethod::Put, self.item_url(id), body),
            ),
        })
    }

    /// `DELETE {base}/todos/{id}`.
    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.item_url(id))
    }

    /// Flip `completed` server-side: `PUT {base}/todos/{id}/toggle`. The
    /// body is an empty JSON object; the server ignores it.
    pub fn build_toggle(&self, id: u64) -> HttpRequest {
        HttpRequest::json(
            HttpMethod::Put,
            format!("{}/toggle", self.item_url(id)),
            "{}".to_string(),
        )
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_saved(&self, kind: SaveKind, response: HttpResponse) -> Result<Todo, ApiError> {
        let expected = match kind {
            SaveKind::Create => 201,
            SaveKind::Update => 200,
        };
        check_status(&response, expected)?;
        parse_json(&response)
    }

    pub fn parse_deleted(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_toggled(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    warn!(status = response.status, "todo API returned unexpected status");
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Deserialize an entity or collection body. A declared non-JSON content
/// type (the server served an error page with a 200) and a body that does
/// not decode both land in `UnexpectedContent`, never an empty result.
fn parse_json<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if response.declares_non_json() {
        warn!(
            content_type = response.content_type().unwrap_or_default(),
            "todo API returned a non-JSON payload"
        );
        return Err(ApiError::UnexpectedContent(format!(
            "expected JSON, got {}",
            response.content_type().unwrap_or("unknown content type")
        )));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::UnexpectedContent(e.to_string()))
}
