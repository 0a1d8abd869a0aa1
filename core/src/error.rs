//! Error types for the todo API client.
//!
//! # Design
//! One enum covers the whole failure taxonomy: local validation errors that
//! must never reach the network (`Validation`, `MissingId`), transport and
//! status failures (`Transport`, `NotFound`, `Http`), and response-shape
//! failures (`UnexpectedContent`) where the server answered with something
//! that is not the expected entity (an HTML error page, typically). The
//! shape case gets its own variant because callers must not coerce it into
//! an empty result.

use thiserror::Error;

/// Errors surfaced by `TodoClient` and the view-models.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Local validation failed; no request was issued.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation needs a server-assigned id the item does not have;
    /// no request was issued.
    #[error("todo has no id; it has never been saved")]
    MissingId,

    /// The server returned 404 — the requested todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be read as the expected entity or
    /// collection. Distinct from an empty result.
    #[error("unexpected response content: {0}")]
    UnexpectedContent(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never completed: connection refused, DNS failure, or any
    /// other I/O error reported by the host executing the round-trip.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// True for the failures that are caught before any request is built.
    pub fn is_local(&self) -> bool {
        matches!(self, ApiError::Validation(_) | ApiError::MissingId)
    }
}
