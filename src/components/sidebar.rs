//! Sidebar Component
//!
//! Navigation links plus the collapsible profile menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_toast::use_toaster;

use crate::api::use_api;
use crate::auth;
use crate::routes;
use crate::session::use_session;
use crate::store::{store_reset, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let store = use_app_store();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (menu_open, set_menu_open) = signal(false);

    let username = move || {
        store
            .current_user()
            .read()
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| "Loading...".to_string())
    };
    let initial = move || {
        store
            .current_user()
            .read()
            .as_ref()
            .map(|u| u.initial())
            .unwrap_or_else(|| "U".to_string())
    };

    let on_logout = move |_: web_sys::MouseEvent| {
        set_menu_open.set(false);
        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let next = auth::logout(&api, &session).await;
            store_reset(&store);
            toaster.info("Logged out");
            navigate(next, Default::default());
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"TaskFlow"</div>

            <nav class="sidebar-nav">
                <A href=routes::DASHBOARD attr:class="sidebar-link">"Dashboard"</A>
                <A href=routes::MANAGE_TASKS attr:class="sidebar-link">"My Tasks"</A>
            </nav>

            <div class="sidebar-profile">
                <button
                    class="profile-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="avatar">{initial}</span>
                    <span class="profile-name">{username}</span>
                    <span class="profile-caret">{move || if menu_open.get() { "▲" } else { "▼" }}</span>
                </button>

                <Show when=move || menu_open.get()>
                    <div class="profile-menu">
                        <A href=routes::PROFILE attr:class="profile-menu-item">"View Profile"</A>
                        <button class="profile-menu-item logout" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </aside>
    }
}
