//! Form view-model: validated input state for one todo.
//!
//! # Design
//! The form owns a single draft and commits it through the client's
//! create-or-update dispatch. Edit mode is an explicit flag carried in from
//! the `FormHandoff`, not inferred from id presence; an edit can start
//! before the item's full value has arrived. Results flow upward as
//! returned `FormEvent` values; the parent folds them into its mirror with
//! `ListModel::apply`. The form never navigates or renders; it only owns
//! state.

use crate::client::{SaveKind, TodoClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

/// Transient handoff from the list screen to the form screen. A clone of
/// the field values at navigation time; never persisted anywhere.
#[derive(Debug, Clone)]
pub struct FormHandoff {
    pub todo: Todo,
    pub edit_mode: bool,
}

impl FormHandoff {
    /// Handoff for the "new todo" navigation: empty draft, create mode.
    pub fn create() -> Self {
        Self {
            todo: Todo::new_empty(),
            edit_mode: false,
        }
    }

    /// Handoff for editing an existing item.
    pub fn edit(todo: Todo) -> Self {
        Self {
            todo,
            edit_mode: true,
        }
    }
}

/// Outcome of a form interaction, for the parent to reconcile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Created(Todo),
    Updated(Todo),
    Cancelled,
}

/// Token for a submit in flight. Records the dispatch decision and the mode
/// the form was in when the request was built.
#[must_use = "complete_submit must be called to settle the form"]
#[derive(Debug)]
pub struct PendingSubmit {
    kind: SaveKind,
    edit_mode: bool,
}

/// The create/edit screen's state.
#[derive(Debug)]
pub struct FormModel {
    draft: Todo,
    edit_mode: bool,
    touched: bool,
    loading: bool,
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormModel {
    /// Empty form in create mode.
    pub fn new() -> Self {
        Self {
            draft: Todo::new_empty(),
            edit_mode: false,
            touched: false,
            loading: false,
        }
    }

    /// Form initialized from a navigation handoff.
    pub fn from_handoff(handoff: FormHandoff) -> Self {
        Self {
            draft: handoff.todo,
            edit_mode: handoff.edit_mode,
            touched: false,
            loading: false,
        }
    }

    pub fn draft(&self) -> &Todo {
        &self.draft
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
        self.touched = true;
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
        self.touched = true;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.draft.completed = completed;
        self.touched = true;
    }

    /// Inline-error predicate for the title field: invalid and touched.
    pub fn title_invalid(&self) -> bool {
        self.touched && self.draft.blank_title()
    }

    /// Validate and build the save request. A blank title marks the fields
    /// touched (so inline errors show) and returns without any request:
    /// zero network calls for invalid input.
    pub fn begin_submit(
        &mut self,
        client: &TodoClient,
    ) -> Result<(PendingSubmit, HttpRequest), ApiError> {
        if self.draft.blank_title() {
            self.touched = true;
            return Err(ApiError::Validation("title is required".to_string()));
        }
        let (kind, request) = client.build_save(&self.draft)?;
        self.loading = true;
        Ok((
            PendingSubmit {
                kind,
                edit_mode: self.edit_mode,
            },
            request,
        ))
    }

    /// Settle a submit. Success resets the form to its empty create-mode
    /// state and returns the event for the parent; failure keeps the draft
    /// so the user can correct and resubmit.
    pub fn complete_submit(
        &mut self,
        client: &TodoClient,
        pending: PendingSubmit,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<FormEvent, ApiError> {
        self.loading = false;
        let todo = outcome.and_then(|response| client.parse_saved(pending.kind, response))?;
        self.reset();
        Ok(if pending.edit_mode {
            FormEvent::Updated(todo)
        } else {
            FormEvent::Created(todo)
        })
    }

    /// Abandon the form without any network call.
    pub fn cancel(&mut self) -> FormEvent {
        self.reset();
        FormEvent::Cancelled
    }

    fn reset(&mut self) {
        self.draft = Todo::new_empty();
        self.edit_mode = false;
        self.touched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> TodoClient {
        TodoClient::new(&ApiConfig::new("http://localhost:3000"))
    }

    fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("content-type".into(), "application/json".into())],
            body: body.to_string(),
        }
    }

    #[test]
    fn blank_title_submits_nothing_and_touches_fields() {
        let client = client();
        let mut form = FormModel::new();
        form.set_title("   ");
        let err = form.begin_submit(&client).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(form.title_invalid());
        assert!(!form.is_loading());
    }

    #[test]
    fn untouched_empty_form_shows_no_inline_error() {
        let form = FormModel::new();
        assert!(!form.title_invalid());
    }

    #[test]
    fn create_submit_emits_created_and_resets() {
        let client = client();
        let mut form = FormModel::new();
        form.set_title("Buy milk");
        form.set_description("two liters");
        let (pending, req) = form.begin_submit(&client).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/todos");
        assert!(form.is_loading());

        let event = form
            .complete_submit(
                &client,
                pending,
                Ok(json_response(
                    201,
                    r#"{"id":10,"title":"Buy milk","description":"two liters","completed":false}"#,
                )),
            )
            .unwrap();
        match event {
            FormEvent::Created(todo) => assert_eq!(todo.id, Some(10)),
            other => panic!("expected Created, got {other:?}"),
        }
        assert!(form.draft().title.is_empty(), "form reset after success");
        assert!(!form.is_edit_mode());
        assert!(!form.is_loading());
    }

    #[test]
    fn edit_submit_emits_updated() {
        let client = client();
        let mut todo = Todo::new_empty();
        todo.id = Some(4);
        todo.title = "Walk dog".to_string();
        let mut form = FormModel::from_handoff(FormHandoff::edit(todo));
        assert!(form.is_edit_mode());
        form.set_title("Walk dog twice");

        let (pending, req) = form.begin_submit(&client).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/todos/4");
        let event = form
            .complete_submit(
                &client,
                pending,
                Ok(json_response(
                    200,
                    r#"{"id":4,"title":"Walk dog twice","description":"","completed":false}"#,
                )),
            )
            .unwrap();
        assert!(matches!(event, FormEvent::Updated(_)));
        assert!(!form.is_edit_mode(), "reset back to create mode");
    }

    #[test]
    fn failed_submit_keeps_the_draft() {
        let client = client();
        let mut form = FormModel::new();
        form.set_title("Buy milk");
        let (pending, _req) = form.begin_submit(&client).unwrap();
        let err = form
            .complete_submit(&client, pending, Err(ApiError::Transport("down".into())))
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(form.draft().title, "Buy milk", "draft kept for correction");
        assert!(!form.is_loading());
    }

    #[test]
    fn cancel_resets_and_emits_without_network() {
        let mut todo = Todo::new_empty();
        todo.id = Some(4);
        todo.title = "Walk dog".to_string();
        let mut form = FormModel::from_handoff(FormHandoff::edit(todo));
        let event = form.cancel();
        assert_eq!(event, FormEvent::Cancelled);
        assert!(form.draft().title.is_empty());
        assert!(!form.is_edit_mode());
    }

    #[test]
    fn edit_mode_survives_a_draft_without_id() {
        // An edit can be entered before the full value has arrived; the mode
        // flag must not be inferred from id presence.
        let form = FormModel::from_handoff(FormHandoff {
            todo: Todo::new_empty(),
            edit_mode: true,
        });
        assert!(form.is_edit_mode());
    }
}
