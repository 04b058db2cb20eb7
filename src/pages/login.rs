//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_toast::use_toaster;

use crate::api::use_api;
use crate::auth;
use crate::routes;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (identifier, set_identifier) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        let identifier = identifier.get();
        let password = password.get();

        set_submitting.set(true);
        spawn_local(async move {
            match auth::login(&api, &session, &identifier, &password).await {
                Ok(done) => {
                    toaster.success(done.message);
                    navigate(done.redirect, Default::default());
                }
                Err(err) => toaster.error(auth::login_error_message(&err)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Log in to manage your tasks"</p>

                <label for="login-identifier">"Username or email"</label>
                <input
                    id="login-identifier"
                    type="text"
                    autocomplete="username"
                    prop:value=move || identifier.get()
                    on:input=move |ev| set_identifier.set(event_target_value(&ev))
                />

                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-switch">
                    "No account? " <A href=routes::SIGNUP>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
