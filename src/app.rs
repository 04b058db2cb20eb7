//! Task Manager Frontend App
//!
//! Provides the shared handles and wires up the router.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use leptos_toast::{provide_toaster, ToastHost};
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::pages::{
    DashboardLayout, DashboardPage, EditTaskPage, LoginPage, ManageTasksPage, NotFoundPage,
    ProfilePage, SignupPage,
};
use crate::routes;
use crate::session::{BrowserSessionStore, SessionContext};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new(Arc::new(BrowserSessionStore));
    // The client reads the token through the same context the guard watches
    let api = HttpApi::new(ApiConfig::from_env(), Arc::new(session.clone()));
    tracing::info!(base_url = %api.config().base_url, "task api configured");

    // Provide context to all children
    provide_context(session);
    provide_context(api);
    provide_context(AppContext::new(signal(0u32)));
    provide_context(Store::new(AppState::default()));
    provide_toaster();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=routes::LOGIN /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <Redirect path=routes::DASHBOARD /> }
                />
                <ParentRoute path=path!("/tasks") view=DashboardLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=routes::DASHBOARD /> } />
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route path=path!("manage") view=ManageTasksPage />
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!(":id/edit") view=EditTaskPage />
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost />
    }
}
