//! Task Card Component
//!
//! A single task in the board grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::board::card_actions;
use crate::models::{Task, TaskId};
use crate::routes;

/// One task card
#[component]
pub fn TaskCard(
    task: Task,
    /// (id, current completion)
    #[prop(into)]
    on_toggle: Callback<(TaskId, bool)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let actions = card_actions(&task);
    let id = task.id.clone();
    let completed = task.completed;
    let due = task.due_label();
    let created = task.created_label();
    let edit_href = routes::edit_task(&task.id);

    let toggle_id = id.clone();
    let delete_id = id.clone();
    let edit_task = task.clone();

    view! {
        <div class={if completed { "task-card completed" } else { "task-card" }}>
            <div class="task-card-header">
                {if actions.show_edit {
                    view! {
                        <A href=edit_href attr:class="task-title">{task.title.clone()}</A>
                    }.into_any()
                } else {
                    view! { <span class="task-title">{task.title.clone()}</span> }.into_any()
                }}
                {actions.badge.map(|badge| view! { <span class="badge badge-success">{badge}</span> })}
            </div>

            {(!task.description.is_empty()).then(|| view! {
                <p class="task-description">{task.description.clone()}</p>
            })}

            <div class="task-meta">
                {due.map(|d| view! { <span class="task-due">"Due: " {d}</span> })}
                {created.map(|c| view! { <span class="task-created">"Created: " {c}</span> })}
            </div>

            <div class="task-actions">
                <button
                    class="btn btn-small"
                    on:click=move |_| on_toggle.run((toggle_id.clone(), completed))
                >
                    {actions.toggle_label}
                </button>
                {actions.show_edit.then(|| view! {
                    <button
                        class="btn btn-small btn-secondary"
                        on:click=move |_| on_edit.run(edit_task.clone())
                    >
                        "Edit"
                    </button>
                })}
                <button
                    class="btn btn-small btn-danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
