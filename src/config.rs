//! API Configuration
//!
//! Endpoint settings baked in at build time (`option_env!`), so a trunk
//! build picks them up from the environment it runs in.

/// Fallback base URL for local development
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
/// Fallback task-count endpoint
pub const DEFAULT_STATS_PATH: &str = "/api/stats";
/// Fallback log level for the console logger
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where and how to reach the task API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host (+ optional prefix), no trailing slash
    pub base_url: String,
    /// Path of the task-count endpoint (`/api/stats` or `/api/auth/count`)
    pub stats_path: String,
    /// List tasks through `/api/tasks/getTasks/:userId` instead of `/api/tasks`
    pub list_by_user: bool,
}

impl ApiConfig {
    pub fn new(base_url: &str, stats_path: &str, list_by_user: bool) -> Self {
        Self {
            base_url: normalize_base(base_url),
            stats_path: normalize_path(stats_path),
            list_by_user,
        }
    }

    /// Build-time configuration
    pub fn from_env() -> Self {
        Self::new(
            option_env!("TASK_API_BASE_URL").unwrap_or(DEFAULT_API_BASE),
            option_env!("TASK_API_STATS_PATH").unwrap_or(DEFAULT_STATS_PATH),
            option_env!("TASK_API_LIST_BY_USER").map(parse_flag).unwrap_or(false),
        )
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, normalize_path(path))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_STATS_PATH, false)
    }
}

/// Console log level (`TASK_UI_LOG`)
pub fn log_level() -> &'static str {
    option_env!("TASK_UI_LOG").unwrap_or(DEFAULT_LOG_LEVEL)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
