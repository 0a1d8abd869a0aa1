//! List view-model: the local mirror of the todo collection.
//!
//! # Design
//! `ListModel` owns the last known server state and reconciles it after
//! every mutation. Mutations follow a two-phase protocol: `begin_*` applies
//! any optimistic local change and returns a `#[must_use]` pending token
//! plus the request to execute; `complete_*` consumes the token together
//! with the transport outcome and either commits the server's canonical
//! fields or rolls the optimistic change back. An item is never left in the
//! unconfirmed state; dropping a token without completing it is the only
//! way, and the compiler flags it.
//!
//! The `loading` flag is an advisory gate for the UI, set by `begin_*` and
//! cleared by `complete_*`. It is not a mutex; a double-submit racing the
//! flag fires two requests, which the protocol tolerates.

use tracing::warn;

use crate::client::TodoClient;
use crate::detail::DetailEvent;
use crate::error::ApiError;
use crate::form::{FormEvent, FormHandoff};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

/// Whether the user answered the delete prompt. `begin_remove` refuses to
/// build a request without an explicit answer, so the question cannot be
/// skipped by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Token for an optimistic toggle awaiting server confirmation.
#[must_use = "complete_toggle must be called or the item stays unconfirmed"]
#[derive(Debug)]
pub struct PendingToggle {
    id: u64,
    previous: bool,
}

/// Token for a confirmed delete awaiting the server. Captures the index and
/// id at selection time so completion removes the item the user pointed at,
/// not whatever occupies that slot later.
#[must_use = "complete_remove must be called to settle the mirror"]
#[derive(Debug)]
pub struct PendingRemove {
    id: u64,
    index: usize,
}

/// The collection screen's state: mirror plus loading gate.
#[derive(Debug, Default)]
pub struct ListModel {
    todos: Vec<Todo>,
    loading: bool,
}

impl ListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a full reload of the mirror.
    pub fn begin_load(&mut self, client: &TodoClient) -> HttpRequest {
        self.loading = true;
        client.build_list()
    }

    /// Finish a reload. On success the mirror is replaced with the server
    /// set; on any failure the previous mirror is left intact and the error
    /// is returned for display.
    pub fn complete_load(
        &mut self,
        client: &TodoClient,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<(), ApiError> {
        self.loading = false;
        match outcome.and_then(|response| client.parse_list(response)) {
            Ok(todos) => {
                self.todos = todos;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "loading todos failed; keeping previous mirror");
                Err(err)
            }
        }
    }

    /// Optimistically flip `completed` on the item at `index` and return the
    /// toggle request. Fails without touching anything if there is no item
    /// at `index` or it has never been persisted.
    pub fn begin_toggle(
        &mut self,
        client: &TodoClient,
        index: usize,
    ) -> Result<(PendingToggle, HttpRequest), ApiError> {
        let todo = self
            .todos
            .get_mut(index)
            .ok_or_else(|| ApiError::Validation("no todo at the selected position".to_string()))?;
        let id = todo.id.ok_or(ApiError::MissingId)?;
        let previous = todo.completed;
        todo.completed = !previous;
        self.loading = true;
        Ok((PendingToggle { id, previous }, client.build_toggle(id)))
    }

    /// Settle an optimistic toggle: merge the server's canonical fields on
    /// success, revert `completed` to its pre-toggle value on failure. The
    /// item is located by id so intervening mirror changes cannot misdirect
    /// the commit or the revert.
    pub fn complete_toggle(
        &mut self,
        client: &TodoClient,
        pending: PendingToggle,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<(), ApiError> {
        self.loading = false;
        match outcome.and_then(|response| client.parse_toggled(response)) {
            Ok(server) => {
                if let Some(todo) = self.find_mut(pending.id) {
                    todo.merge_from(&server);
                }
                Ok(())
            }
            Err(err) => {
                warn!(id = pending.id, error = %err, "toggle failed; reverting");
                if let Some(todo) = self.find_mut(pending.id) {
                    todo.completed = pending.previous;
                }
                Err(err)
            }
        }
    }

    /// Start removing the item at `index`, but only once the user has
    /// confirmed. A declined prompt is a no-op with no request.
    pub fn begin_remove(
        &mut self,
        client: &TodoClient,
        index: usize,
        confirmation: Confirmation,
    ) -> Result<Option<(PendingRemove, HttpRequest)>, ApiError> {
        if confirmation == Confirmation::Declined {
            return Ok(None);
        }
        let todo = self
            .todos
            .get(index)
            .ok_or_else(|| ApiError::Validation("no todo at the selected position".to_string()))?;
        let id = todo.id.ok_or(ApiError::MissingId)?;
        self.loading = true;
        Ok(Some((PendingRemove { id, index }, client.build_delete(id))))
    }

    /// Settle a remove. On success the entry the user selected leaves the
    /// mirror: at the captured index when it still holds the same item,
    /// otherwise located by id. Every other entry keeps its relative order.
    /// On failure the mirror is untouched.
    pub fn complete_remove(
        &mut self,
        client: &TodoClient,
        pending: PendingRemove,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<(), ApiError> {
        self.loading = false;
        outcome.and_then(|response| client.parse_deleted(response))?;
        let at_index = self
            .todos
            .get(pending.index)
            .is_some_and(|todo| todo.id == Some(pending.id));
        if at_index {
            self.todos.remove(pending.index);
        } else if let Some(position) = self.position(pending.id) {
            self.todos.remove(position);
        }
        Ok(())
    }

    /// Hand the item at `index` off to the form screen for editing. The
    /// handoff is a transient clone of the current field values; nothing is
    /// persisted.
    pub fn edit(&self, index: usize) -> Option<FormHandoff> {
        self.todos.get(index).cloned().map(FormHandoff::edit)
    }

    /// Fold a form result back into the mirror.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::Created(todo) => self.todos.push(todo),
            FormEvent::Updated(todo) => self.upsert(todo),
            FormEvent::Cancelled => {}
        }
    }

    /// Fold a detail-screen result back into the mirror.
    pub fn apply_detail(&mut self, event: DetailEvent) {
        match event {
            DetailEvent::Updated(todo) => self.upsert(todo),
            DetailEvent::Deleted(id) => self.todos.retain(|todo| todo.id != Some(id)),
        }
    }

    fn upsert(&mut self, todo: Todo) {
        match todo.id.and_then(|id| self.position(id)) {
            Some(position) => self.todos[position] = todo,
            None => self.todos.push(todo),
        }
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == Some(id))
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == Some(id))
    }
}
