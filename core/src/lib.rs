//! Client core for the todo application.
//!
//! # Overview
//! Everything beneath the rendering layer of a todo web client: the entity,
//! the access service that is the sole point of contact with the remote
//! REST resource, and the three screen view-models (list, form, detail)
//! with their reconciliation logic. Builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO); the
//! embedding host executes the round-trips, keeping the core deterministic
//! and testable.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only the resolved base URL from
//!   `ApiConfig`, which settles the base-path question once for the whole
//!   crate.
//! - Mutations are two-phase: `begin_*` applies optimistic state and
//!   returns a `#[must_use]` pending token plus the request; `complete_*`
//!   consumes the token with the transport outcome and commits or reverts.
//! - Child screens report results as returned event values (`FormEvent`,
//!   `DetailEvent`) that the list folds into its mirror; no observer
//!   machinery.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod types;

pub use client::{SaveKind, TodoClient};
pub use config::ApiConfig;
pub use detail::{DetailEvent, DetailModel};
pub use error::ApiError;
pub use form::{FormEvent, FormHandoff, FormModel};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::{Confirmation, ListModel};
pub use types::Todo;
