//! Task Modal Component
//!
//! Create/edit form shown over the board while `TaskBoard::modal` is open.

use leptos::prelude::*;

use crate::board::TaskBoard;

#[component]
pub fn TaskModalForm(board: RwSignal<TaskBoard>, #[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    let is_open = move || board.with(|b| b.modal.is_some());
    let heading = move || board.with(|b| b.modal.as_ref().map(|m| m.heading()).unwrap_or_default());
    let submit_label = move || board.with(|b| b.modal.as_ref().map(|m| m.submit_label()).unwrap_or_default());
    let field = move |f: fn(&crate::models::TaskDraft) -> String| {
        move || board.with(|b| b.modal.as_ref().map(|m| f(&m.draft)).unwrap_or_default())
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| board.update(|b| b.close_modal())>
                <form
                    class="modal task-modal"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <h3>{heading}</h3>

                    <label for="task-title">"Title"</label>
                    <input
                        id="task-title"
                        type="text"
                        placeholder="What needs doing?"
                        prop:value=field(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            board.update(|b| b.edit_draft(|d| d.title = value));
                        }
                    />

                    <label for="task-description">"Description"</label>
                    <textarea
                        id="task-description"
                        rows="4"
                        prop:value=field(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            board.update(|b| b.edit_draft(|d| d.description = value));
                        }
                    ></textarea>

                    <label for="task-due">"Due date"</label>
                    <input
                        id="task-due"
                        type="date"
                        prop:value=field(|d| d.due_date.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            board.update(|b| b.edit_draft(|d| {
                                d.due_date = (!value.is_empty()).then_some(value);
                            }));
                        }
                    />

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| board.update(|b| b.close_modal())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">{submit_label}</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
