//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{TaskSummary, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, loaded once by the dashboard shell
    pub current_user: Option<User>,
    /// Latest task counts
    pub summary: Option<TaskSummary>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
}

pub fn store_set_summary(store: &AppStore, summary: TaskSummary) {
    *store.summary().write() = Some(summary);
}

/// Drop everything tied to the signed-in user
pub fn store_reset(store: &AppStore) {
    *store.current_user().write() = None;
    *store.summary().write() = None;
}

/// Id of the signed-in user, if loaded
pub fn store_user_id(store: &AppStore) -> Option<String> {
    store.current_user().read().as_ref().map(|u| u.id.clone())
}
