//! Task Endpoints
//!
//! `/api/tasks/*` plus the task-count endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http::{read_envelope, read_json, segment, Envelope, Method};
use super::{HttpApi, TaskApi};
use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Task, TaskDraft, TaskFilter, TaskSummary};

/// What a list request is scoped to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScope {
    pub filter: TaskFilter,
    /// Needed only when the API lists through `/api/tasks/getTasks/:userId`
    pub user_id: Option<String>,
}

impl ListScope {
    pub fn new(filter: TaskFilter, user_id: Option<String>) -> Self {
        Self { filter, user_id }
    }
}

// ========================
// Request / Response Structs
// ========================

#[derive(Serialize)]
struct DraftArgs<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    due_date: Option<&'a str>,
}

impl<'a> From<&'a TaskDraft> for DraftArgs<'a> {
    fn from(draft: &'a TaskDraft) -> Self {
        Self {
            title: draft.title.trim(),
            description: &draft.description,
            due_date: draft.due_date.as_deref().filter(|d| !d.trim().is_empty()),
        }
    }
}

#[derive(Serialize)]
struct StatusArgs {
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    task: Option<Task>,
}

// ========================
// Paths
// ========================

/// List path for the configured API variant
pub fn list_path(config: &ApiConfig, scope: &ListScope) -> ClientResult<String> {
    let base = if config.list_by_user {
        let user_id = scope.user_id.as_deref().ok_or(ClientError::MissingUser)?;
        format!("/api/tasks/getTasks/{}", segment(user_id))
    } else {
        "/api/tasks".to_string()
    };
    Ok(match scope.filter.as_query() {
        Some(status) => format!("{}?status={}", base, status),
        None => base,
    })
}

/// `GET /api/tasks/:id` only counts with `success: true` and a task
fn task_from_reply(reply: TaskResponse) -> ClientResult<Task> {
    match reply.task {
        Some(task) if reply.success => Ok(task),
        _ => Err(ClientError::Rejected(reply.message)),
    }
}

fn task_path(id: &str) -> String {
    format!("/api/tasks/{}", segment(id))
}

fn status_path(id: &str) -> String {
    format!("/api/tasks/{}/status", segment(id))
}

// ========================
// Endpoints
// ========================

#[async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn task_summary(&self) -> ClientResult<TaskSummary> {
        let response = self.send(Method::Get, &self.config.stats_path).await?;
        read_json(response).await
    }

    async fn list_tasks(&self, scope: &ListScope) -> ClientResult<Vec<Task>> {
        let path = list_path(&self.config, scope)?;
        let response = self.send(Method::Get, &path).await?;
        let list: ListResponse = read_json(response).await?;
        Ok(list.tasks)
    }

    async fn get_task(&self, id: &str) -> ClientResult<Task> {
        let response = self.send(Method::Get, &task_path(id)).await?;
        let reply: TaskResponse = read_json(response).await?;
        task_from_reply(reply)
    }

    async fn create_task(&self, draft: &TaskDraft) -> ClientResult<()> {
        let response = self
            .send_json(Method::Post, "/api/tasks", &DraftArgs::from(draft))
            .await?;
        read_envelope(response).await.map(|_| ())
    }

    async fn update_task(&self, id: &str, draft: &TaskDraft) -> ClientResult<Envelope> {
        let response = self
            .send_json(Method::Put, &task_path(id), &DraftArgs::from(draft))
            .await?;
        read_envelope(response).await
    }

    async fn set_task_status(&self, id: &str, completed: bool) -> ClientResult<()> {
        self.send_json(Method::Patch, &status_path(id), &StatusArgs { completed })
            .await
            .map(|_| ())
    }

    async fn delete_task(&self, id: &str) -> ClientResult<()> {
        self.send(Method::Delete, &task_path(id)).await.map(|_| ())
    }
}
