//! Authentication Flows
//!
//! Login, signup and logout, written against `AuthApi` + `SessionStore` so
//! the screens stay thin and the flows run in tests without a browser.

use crate::api::AuthApi;
use crate::error::{ClientError, ClientResult};
use crate::routes;
use crate::session::SessionStore;
use crate::validation::{validate_login, validate_signup};

/// Successful auth action: toast `message`, then navigate to `redirect`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub redirect: &'static str,
    pub message: String,
}

/// Validate, post credentials, persist the token.
///
/// Validation failures return before any request is made.
pub async fn login<A: AuthApi + ?Sized>(
    api: &A,
    session: &dyn SessionStore,
    identifier: &str,
    password: &str,
) -> ClientResult<AuthSuccess> {
    validate_login(identifier, password)?;

    let reply = api.login(identifier.trim(), password).await?;
    let token = match reply.data {
        Some(token) if reply.success => token,
        _ => {
            tracing::warn!(target: "auth", identifier, "login rejected");
            return Err(ClientError::Rejected(reply.message));
        }
    };

    session.set(&token, reply.is_new_user);
    tracing::info!(target: "auth", identifier, new_user = reply.is_new_user, "logged in");

    Ok(AuthSuccess {
        redirect: routes::DASHBOARD,
        message: reply.message.unwrap_or_else(|| "Login successful".to_string()),
    })
}

/// Validate (including the email domain rule) and register.
pub async fn signup<A: AuthApi + ?Sized>(
    api: &A,
    username: &str,
    email: &str,
    password: &str,
) -> ClientResult<AuthSuccess> {
    validate_signup(username, email, password)?;

    let reply = api.register(username.trim(), email.trim(), password).await?;
    tracing::info!(target: "auth", username, "registered");

    Ok(AuthSuccess {
        redirect: routes::LOGIN,
        message: reply.message.unwrap_or_else(|| "Signup successful".to_string()),
    })
}

/// Best-effort server logout; the local session is cleared either way.
/// Returns the path to navigate to.
pub async fn logout<A: AuthApi + ?Sized>(api: &A, session: &dyn SessionStore) -> &'static str {
    if let Err(err) = api.logout().await {
        tracing::warn!(target: "auth", error = %err, "server logout failed, clearing session anyway");
    }
    session.clear();
    tracing::info!(target: "auth", "logged out");
    routes::LOGIN
}

/// Toast text for a failed login
pub fn login_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Rejected(_) => err.user_message("Login failed"),
        _ => err.user_message("Error logging in"),
    }
}

/// Toast text for a failed signup
pub fn signup_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Rejected(_) => err.user_message("Signup failed"),
        _ => err.user_message("Error signing up"),
    }
}
