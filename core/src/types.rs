//! Domain types for the todo API.
//!
//! # Design
//! `Todo` is the single entity the application manages and the only shape
//! that crosses the wire. Server-assigned fields (`id` and both timestamps)
//! are optional and skipped during serialization when absent, so the same
//! type serves as create payload, update payload, and response body. The
//! mock-server crate defines its own copy of the schema; integration tests
//! catch drift between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// An item with `id == None` has never been persisted. Everything shown in
/// the list or detail screens after a successful load/create/update carries
/// a server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Set by the server on create; never written by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Refreshed by the server on every mutation; never written by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Todo {
    /// The blank draft a form starts from: no id, empty fields, not completed.
    pub fn new_empty() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            completed: false,
            created_date: None,
            last_modified_date: None,
        }
    }

    /// True when the title would fail validation (empty or whitespace-only).
    pub fn blank_title(&self) -> bool {
        blank_title(&self.title)
    }

    /// Overwrite this item with a server response, server-owned fields
    /// included. Keeps the merge in one place for the view-models.
    pub fn merge_from(&mut self, server: &Todo) {
        self.id = server.id;
        self.title = server.title.clone();
        self.description = server.description.clone();
        self.completed = server.completed;
        self.created_date = server.created_date;
        self.last_modified_date = server.last_modified_date;
    }
}

/// Shared title check: trimmed emptiness, used by the client and the form.
pub fn blank_title(title: &str) -> bool {
    title.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_empty_has_no_server_fields() {
        let todo = Todo::new_empty();
        assert!(todo.id.is_none());
        assert!(todo.title.is_empty());
        assert!(todo.created_date.is_none());
        assert!(todo.last_modified_date.is_none());
        assert!(!todo.completed);
    }

    #[test]
    fn unsaved_todo_serializes_without_id_or_timestamps() {
        let mut todo = Todo::new_empty();
        todo.title = "Buy milk".to_string();
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("createdDate").is_none());
        assert!(json.get("lastModifiedDate").is_none());
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], "");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn server_response_deserializes_with_camel_case_dates() {
        let body = r#"{
            "id": 7,
            "title": "Water plants",
            "description": "balcony only",
            "completed": true,
            "createdDate": "2024-03-01T09:30:00Z",
            "lastModifiedDate": "2024-03-02T10:00:00Z"
        }"#;
        let todo: Todo = serde_json::from_str(body).unwrap();
        assert_eq!(todo.id, Some(7));
        assert!(todo.completed);
        assert!(todo.created_date.is_some());
        assert!(todo.last_modified_date.is_some());
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":1,"title":"Short","completed":false}"#).unwrap();
        assert_eq!(todo.description, "");
    }

    #[test]
    fn blank_title_rejects_whitespace_only() {
        assert!(blank_title(""));
        assert!(blank_title("   "));
        assert!(blank_title("\t\n"));
        assert!(!blank_title("a"));
        assert!(!blank_title("  a  "));
    }

    #[test]
    fn merge_from_takes_every_server_field() {
        let mut local = Todo::new_empty();
        local.title = "stale".to_string();
        let server = Todo {
            id: Some(3),
            title: "fresh".to_string(),
            description: "from server".to_string(),
            completed: true,
            created_date: None,
            last_modified_date: None,
        };
        local.merge_from(&server);
        assert_eq!(local.id, Some(3));
        assert_eq!(local.title, "fresh");
        assert_eq!(local.description, "from server");
        assert!(local.completed);
    }
}
