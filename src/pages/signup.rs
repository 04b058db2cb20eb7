//! Signup Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_toast::use_toaster;

use crate::api::use_api;
use crate::auth;
use crate::routes;

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let navigate = navigate.clone();
        let (username, email, password) = (username.get(), email.get(), password.get());

        set_submitting.set(true);
        spawn_local(async move {
            match auth::signup(&api, &username, &email, &password).await {
                Ok(done) => {
                    toaster.success(done.message);
                    navigate(done.redirect, Default::default());
                }
                Err(err) => toaster.error(auth::signup_error_message(&err)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <p class="auth-subtitle">"Only @gmail.com or @*.in addresses"</p>

                <label for="signup-username">"Username"</label>
                <input
                    id="signup-username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />

                <label for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing up..." } else { "Sign up" }}
                </button>

                <p class="auth-switch">
                    "Already registered? " <A href=routes::LOGIN>"Log in"</A>
                </p>
            </form>
        </div>
    }
}
