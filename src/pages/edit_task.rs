//! Edit Task Page
//!
//! Standalone editor at `/tasks/:id/edit`. Loads the task, saves with PUT
//! and returns to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_toast::use_toaster;

use crate::api::use_api;
use crate::board::{self, load_task_error_message, update_task_error_message};
use crate::context::use_app_context;
use crate::models::TaskDraft;
use crate::routes;

#[component]
pub fn EditTaskPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let params = use_params_map();

    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let draft = RwSignal::new(TaskDraft::default());
    let (loading, set_loading) = signal(true);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let id = id.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match board::load_task(&api, &id).await {
                    Ok(task) => draft.set(TaskDraft::from_task(&task)),
                    Err(err) => {
                        tracing::warn!(target: "board", %id, error = %err, "task load failed");
                        toaster.error(load_task_error_message(&err));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let navigate = navigate.clone();
        let id = id.get_untracked();
        let current = draft.get_untracked();
        spawn_local(async move {
            match board::update_task(&api, &id, &current).await {
                Ok(()) => {
                    toaster.success("Task updated successfully");
                    ctx.reload();
                    navigate(routes::DASHBOARD, Default::default());
                }
                Err(err) => toaster.error(update_task_error_message(&err)),
            }
        });
    };

    view! {
        <div class="page edit-task-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="board-status">"Loading..."</p> }
            >
                <h2>"Edit Task"</h2>
                <form class="edit-task-form" on:submit=on_submit.clone()>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.title = value);
                        }
                    />
                    <textarea
                        rows="4"
                        placeholder="Description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.description = value);
                        }
                    ></textarea>
                    <button type="submit" class="btn btn-primary">"Update Task"</button>
                </form>
            </Show>
        </div>
    }
}
