//! Task API Client
//!
//! Bindings to the remote REST API, organized by domain. The traits are the
//! seam the flows are written against; `HttpApi` is the browser
//! implementation.

mod http;
mod auth;
mod tasks;
#[cfg(test)]
pub mod fake;

use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::error::ClientResult;
use crate::models::{Task, TaskDraft, TaskSummary, User};
use crate::session::SessionStore;

// Re-export request/response types
pub use http::Envelope;
pub use auth::*;
pub use tasks::*;

/// Authentication endpoints
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, identifier: &str, password: &str) -> ClientResult<LoginResponse>;
    async fn register(&self, username: &str, email: &str, password: &str) -> ClientResult<Envelope>;
    async fn current_user(&self) -> ClientResult<User>;
    async fn logout(&self) -> ClientResult<()>;
}

/// Task endpoints
#[async_trait(?Send)]
pub trait TaskApi {
    async fn task_summary(&self) -> ClientResult<TaskSummary>;
    async fn list_tasks(&self, scope: &ListScope) -> ClientResult<Vec<Task>>;
    async fn get_task(&self, id: &str) -> ClientResult<Task>;
    async fn create_task(&self, draft: &TaskDraft) -> ClientResult<()>;
    /// The reply envelope is returned unchecked; callers decide whether
    /// `success` matters
    async fn update_task(&self, id: &str, draft: &TaskDraft) -> ClientResult<Envelope>;
    async fn set_task_status(&self, id: &str, completed: bool) -> ClientResult<()>;
    async fn delete_task(&self, id: &str) -> ClientResult<()>;
}

/// HTTP client over `gloo-net`.
///
/// Every request is sent with `credentials: include`; the bearer token is
/// read from the session store per request, so a login takes effect
/// immediately.
#[derive(Clone)]
pub struct HttpApi {
    config: Arc<ApiConfig>,
    session: Arc<dyn SessionStore>,
}

impl HttpApi {
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            config: Arc::new(config),
            session,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Get the API client from context
pub fn use_api() -> HttpApi {
    expect_context::<HttpApi>()
}
