//! Profile Page
//!
//! Read-only view of the user loaded by the dashboard shell, plus the
//! recent client log lines for bug reports.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();
    let (log_dump, set_log_dump) = signal::<Option<String>>(None);

    let show_logs = move |_: web_sys::MouseEvent| {
        let lines = console_logger::recent_lines();
        tracing::debug!(target: "profile", count = lines.len(), "recent log lines shown");
        set_log_dump.set(Some(console_logger::render_lines(&lines)));
    };

    view! {
        <div class="page profile-page">
            <h1>"Profile"</h1>
            {move || match store.current_user().get() {
                Some(user) => view! {
                    <div class="profile-card">
                        <span class="avatar avatar-large">{user.initial()}</span>
                        <dl>
                            <dt>"Username"</dt>
                            <dd>{user.username.clone()}</dd>
                            <dt>"Email"</dt>
                            <dd>{user.email.clone()}</dd>
                        </dl>
                    </div>
                }.into_any(),
                None => view! { <p class="board-status">"Loading profile..."</p> }.into_any(),
            }}

            <section class="diagnostics">
                <h3>"Diagnostics"</h3>
                <button class="btn btn-secondary" on:click=show_logs>"Show recent logs"</button>
                {move || log_dump.get().map(|dump| view! {
                    <textarea class="log-dump" readonly rows="12" prop:value=dump></textarea>
                })}
            </section>
        </div>
    }
}
