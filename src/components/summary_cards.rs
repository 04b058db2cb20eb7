//! Summary Cards Component
//!
//! Total / completed / pending counts on the dashboard. Re-fetched whenever
//! `AppContext::reload` is called after a task write.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::use_toaster;

use crate::api::use_api;
use crate::board::{fetch_summary, MSG_SUMMARY_FAILED};
use crate::context::use_app_context;
use crate::models::TaskSummary;
use crate::store::{store_set_summary, use_app_store, AppStateStoreFields};

#[component]
pub fn SummaryCards() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let store = use_app_store();
    let toaster = use_toaster();

    Effect::new(move |_| {
        let revision = ctx.revision.get();
        let api = api.clone();
        spawn_local(async move {
            match fetch_summary(&api).await {
                Ok(summary) => store_set_summary(&store, summary),
                Err(err) => {
                    tracing::warn!(target: "board", revision, error = %err, "summary fetch failed");
                    toaster.error(err.user_message(MSG_SUMMARY_FAILED));
                }
            }
        });
    });

    let count = move |f: fn(&TaskSummary) -> u32| {
        move || store.summary().read().as_ref().map(f).unwrap_or(0)
    };

    view! {
        <div class="summary-cards">
            <div class="summary-card total">
                <span class="summary-label">"Total Tasks"</span>
                <span class="summary-value">{count(|s| s.total)}</span>
            </div>
            <div class="summary-card completed">
                <span class="summary-label">"Completed"</span>
                <span class="summary-value">{count(|s| s.completed)}</span>
            </div>
            <div class="summary-card pending">
                <span class="summary-label">"Pending"</span>
                <span class="summary-value">{count(|s| s.pending)}</span>
            </div>
        </div>
    }
}
