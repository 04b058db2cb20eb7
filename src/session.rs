//! Session Store
//!
//! The bearer token issued at login, kept in `localStorage` so it survives
//! a reload. Components reach it through `SessionContext`; tests swap in
//! `MemorySessionStore`.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

/// localStorage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// localStorage key for the first-login flag
pub const NEW_USER_KEY: &str = "isNewUser";

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub is_new_user: bool,
}

/// Persistent session storage
pub trait SessionStore: Send + Sync {
    fn set(&self, token: &str, is_new_user: bool);
    fn get(&self) -> Option<Session>;
    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }
}

/// `window.localStorage` backed store
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            _ => {
                tracing::warn!("localStorage unavailable, session will not persist");
                None
            }
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn set(&self, token: &str, is_new_user: bool) {
        let Some(storage) = Self::storage() else { return };
        if storage.set_item(TOKEN_KEY, token).is_err()
            || storage.set_item(NEW_USER_KEY, if is_new_user { "true" } else { "false" }).is_err()
        {
            tracing::error!("failed to write session to localStorage");
        }
    }

    fn get(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let is_new_user = storage
            .get_item(NEW_USER_KEY)
            .ok()
            .flatten()
            .map(|v| v == "true")
            .unwrap_or(false);
        Some(Session { token, is_new_user })
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(NEW_USER_KEY);
        }
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            session: Mutex::new(Some(Session {
                token: token.to_string(),
                is_new_user: false,
            })),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, token: &str, is_new_user: bool) {
        if let Ok(mut session) = self.session.lock() {
            *session = Some(Session {
                token: token.to_string(),
                is_new_user,
            });
        }
    }

    fn get(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|s| s.clone())
    }

    fn clear(&self) {
        if let Ok(mut session) = self.session.lock() {
            *session = None;
        }
    }
}

/// Session handle provided via context.
///
/// Writes go to the backing store and to a signal, so the route guard and
/// the sidebar react to login/logout without re-reading storage.
#[derive(Clone)]
pub struct SessionContext {
    current: RwSignal<Option<Session>>,
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            current: RwSignal::new(store.get()),
            store,
        }
    }

    /// Reactive read
    pub fn session(&self) -> Option<Session> {
        self.current.get()
    }
}

impl SessionStore for SessionContext {
    fn set(&self, token: &str, is_new_user: bool) {
        self.store.set(token, is_new_user);
        self.current.set(Some(Session {
            token: token.to_string(),
            is_new_user,
        }));
    }

    fn get(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    fn clear(&self) {
        self.store.clear();
        self.current.set(None);
    }
}

/// Get the session handle from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
