//! Route Guard Component
//!
//! Renders its children only while a session exists.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::{guard, Access};
use crate::session::use_session;

/// Protected content wrapper
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match guard(session.session().as_ref()) {
        Access::Allow => children().into_any(),
        Access::Redirect(path) => {
            tracing::info!(target: "routes", to = path, "no session, redirecting");
            view! { <Redirect path=path /> }.into_any()
        }
    }
}
