//! Client Errors
//!
//! Everything that can stop a user action: shallow validation, transport
//! failures and API rejections. None of these are retried.

/// Client-side error for a single user action
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Form input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("API returned {status}")]
    Api { status: u16, message: Option<String> },

    /// 2xx response carrying `success: false`
    #[error("request rejected")]
    Rejected(Option<String>),

    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The list endpoint needs a user id that has not been loaded yet
    #[error("current user not loaded")]
    MissingUser,
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Text for the error toast.
    ///
    /// Validation text is shown as-is; otherwise the server's own message
    /// wins over the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Api { message: Some(msg), .. } | ClientError::Rejected(Some(msg))
                if !msg.trim().is_empty() =>
            {
                msg.clone()
            }
            _ => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}
