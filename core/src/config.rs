//! API endpoint configuration.
//!
//! # Design
//! The deployed variants of this application disagreed on where the todo
//! resource lived (`/todo/todos`, `/api/todos`, `/todo/api/todos`). The
//! client resolves that once: every request URL is derived from a single
//! `ApiConfig`, default base path `/api`, and nothing else in the crate is
//! allowed to spell out a path.

/// Where the todo REST resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
    base_path: String,
}

pub const DEFAULT_BASE_PATH: &str = "/api";

impl ApiConfig {
    /// Config for `origin` (e.g. `http://localhost:3000`) with the default
    /// `/api` base path. A trailing slash on the origin is tolerated.
    pub fn new(origin: &str) -> Self {
        Self::with_base_path(origin, DEFAULT_BASE_PATH)
    }

    /// Config with an explicit base path for deployments mounted elsewhere.
    /// The path is normalized to a single leading slash and no trailing one.
    pub fn with_base_path(origin: &str, base_path: &str) -> Self {
        let trimmed = base_path.trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            base_path,
        }
    }

    /// The URL prefix under which resource collections live.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.origin, self.base_path)
    }
}
