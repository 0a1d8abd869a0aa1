//! Detail view-model: one todo, with in-place toggle and delete.
//!
//! # Design
//! A thinner variant of the list screen's single-item operations. The
//! parent passes the item in; quick actions run through the same two-phase
//! optimistic protocol and their results come back as `DetailEvent` values
//! for the parent to fold into its mirror. No collection state lives here.

use tracing::warn;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

/// Outcome of a detail-screen action, for the parent to reconcile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Updated(Todo),
    Deleted(u64),
}

/// Token for an optimistic toggle on the held item.
#[must_use = "complete_toggle must be called or the item stays unconfirmed"]
#[derive(Debug)]
pub struct PendingDetailToggle {
    previous: bool,
}

/// Token for a delete in flight.
#[must_use = "complete_delete must be called to learn the outcome"]
#[derive(Debug)]
pub struct PendingDetailDelete {
    id: u64,
}

/// The detail screen's state: the one item it displays.
#[derive(Debug)]
pub struct DetailModel {
    todo: Todo,
    loading: bool,
}

impl DetailModel {
    pub fn new(todo: Todo) -> Self {
        Self {
            todo,
            loading: false,
        }
    }

    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Optimistically flip the held item and return the toggle request.
    pub fn begin_toggle(
        &mut self,
        client: &TodoClient,
    ) -> Result<(PendingDetailToggle, HttpRequest), ApiError> {
        let id = self.todo.id.ok_or(ApiError::MissingId)?;
        let previous = self.todo.completed;
        self.todo.completed = !previous;
        self.loading = true;
        Ok((PendingDetailToggle { previous }, client.build_toggle(id)))
    }

    /// Settle the toggle: merge the server's item and report it upward, or
    /// revert the flip and return the error.
    pub fn complete_toggle(
        &mut self,
        client: &TodoClient,
        pending: PendingDetailToggle,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<DetailEvent, ApiError> {
        self.loading = false;
        match outcome.and_then(|response| client.parse_toggled(response)) {
            Ok(server) => {
                self.todo.merge_from(&server);
                Ok(DetailEvent::Updated(self.todo.clone()))
            }
            Err(err) => {
                warn!(error = %err, "detail toggle failed; reverting");
                self.todo.completed = pending.previous;
                Err(err)
            }
        }
    }

    /// Build the delete request for the held item.
    pub fn begin_delete(
        &mut self,
        client: &TodoClient,
    ) -> Result<(PendingDetailDelete, HttpRequest), ApiError> {
        let id = self.todo.id.ok_or(ApiError::MissingId)?;
        self.loading = true;
        Ok((PendingDetailDelete { id }, client.build_delete(id)))
    }

    /// Settle the delete; success tells the parent which id to drop.
    pub fn complete_delete(
        &mut self,
        client: &TodoClient,
        pending: PendingDetailDelete,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<DetailEvent, ApiError> {
        self.loading = false;
        outcome.and_then(|response| client.parse_deleted(response))?;
        Ok(DetailEvent::Deleted(pending.id))
    }
}
