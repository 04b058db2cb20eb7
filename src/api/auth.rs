//! Auth Endpoints
//!
//! `/api/auth/*`: login, register, current user, logout.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http::{read_envelope, read_json, Envelope, Method};
use super::{AuthApi, HttpApi};
use crate::error::{ClientError, ClientResult};
use crate::models::User;

// ========================
// Request / Response Structs
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmptyArgs {}

/// Login reply; `data` carries the token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(rename = "isNewUser", default)]
    pub is_new_user: bool,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

// ========================
// Endpoints
// ========================

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, identifier: &str, password: &str) -> ClientResult<LoginResponse> {
        let response = self
            .send_json(Method::Post, "/api/auth/login", &LoginArgs { identifier, password })
            .await?;
        read_json(response).await
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> ClientResult<Envelope> {
        let args = RegisterArgs { username, email, password };
        let response = self.send_json(Method::Post, "/api/auth/register", &args).await?;
        read_envelope(response).await?.into_result()
    }

    async fn current_user(&self) -> ClientResult<User> {
        let response = self.send(Method::Get, "/api/auth/me").await?;
        let me: MeResponse = read_json(response).await?;
        match me.user {
            Some(user) if me.success => Ok(user),
            _ => Err(ClientError::Rejected(me.message)),
        }
    }

    async fn logout(&self) -> ClientResult<()> {
        let response = self.send_json(Method::Post, "/api/auth/logout", &EmptyArgs {}).await?;
        read_envelope(response).await.map(|_| ())
    }
}
