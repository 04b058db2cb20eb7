//! Dashboard Shell
//!
//! Protected layout for everything under `/tasks`: sidebar on the left,
//! nested page in the outlet. Loads the current user once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_toast::use_toaster;

use crate::api::{use_api, AuthApi};
use crate::components::{RequireSession, Sidebar};
use crate::store::{store_set_user, use_app_store};

pub const MSG_PROFILE_FAILED: &str = "Failed to load profile";

#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <RequireSession>
            <DashboardShell />
        </RequireSession>
    }
}

#[component]
fn DashboardShell() -> impl IntoView {
    let api = use_api();
    let store = use_app_store();
    let toaster = use_toaster();

    spawn_local(async move {
        match api.current_user().await {
            Ok(user) => {
                tracing::debug!(target: "auth", user = %user.username, "current user loaded");
                store_set_user(&store, Some(user));
            }
            Err(err) => {
                tracing::warn!(
                    target: "auth",
                    error = %err,
                    unauthorized = err.is_unauthorized(),
                    "current user fetch failed"
                );
                toaster.error(err.user_message(MSG_PROFILE_FAILED));
            }
        }
    });

    view! {
        <div class="dashboard-layout">
            <Sidebar />
            <main class="dashboard-main">
                <Outlet />
            </main>
        </div>
    }
}
