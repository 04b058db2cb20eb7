//! Frontend Models
//!
//! Data structures matching the task API's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned task id (Mongo-style string, numeric ids are accepted)
pub type TaskId = String;

/// Signed-in user, display only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", alias = "userId", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl User {
    /// First letter of the username for the avatar bubble
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Task {
    pub fn due_label(&self) -> Option<String> {
        self.due_date.as_deref().map(format_date)
    }

    pub fn created_label(&self) -> Option<String> {
        self.created_at.as_deref().map(format_date)
    }
}

/// Task counts, fetched separately from the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    #[serde(rename = "totalTasks", default)]
    pub total: u32,
    #[serde(rename = "completedTasks", default)]
    pub completed: u32,
    #[serde(rename = "pendingTasks", default)]
    pub pending: u32,
}

/// Server-side status filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];

    /// `status` query value; `None` for no filtering
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            TaskFilter::All => None,
            TaskFilter::Completed => Some("completed"),
            TaskFilter::Pending => Some("pending"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::Pending => "Pending",
        }
    }
}

/// Create/edit form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.clone(),
        }
    }
}

/// "Mar 04, 2025" for RFC 3339 or plain dates; anything else is shown raw.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid id: {}", other))),
    }
}
