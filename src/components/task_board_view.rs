//! Task Board View
//!
//! Filter tabs, task grid, create/edit modal and delete prompt, shared by
//! the dashboard and the "My Tasks" page. Every write goes through the
//! `board` actions and ends with the list they re-fetched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::use_toaster;

use crate::api::{use_api, ListScope};
use crate::board::{
    self, Refreshed, TaskBoard, MSG_DELETE_FAILED, MSG_FETCH_FAILED, MSG_SAVE_FAILED,
    MSG_STATUS_FAILED,
};
use crate::components::{DeleteConfirmDialog, FilterTabs, TaskCard, TaskModalForm};
use crate::context::use_app_context;
use crate::error::{ClientError, ClientResult};
use crate::models::{Task, TaskId};
use crate::store::{store_user_id, use_app_store};

#[component]
pub fn TaskBoardView(#[prop(into)] heading: String) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let store = use_app_store();
    let toaster = use_toaster();

    let board = RwSignal::new(TaskBoard::new());
    // Memos so a board write that leaves the filter alone does not re-fetch
    let filter = Memo::new(move |_| board.with(|b| b.filter));
    let user_id = Memo::new(move |_| store_user_id(&store));
    let list_by_user = api.config().list_by_user;

    let scope = move || ListScope::new(filter.get_untracked(), user_id.get_untracked());

    // Load on mount and whenever the filter (or the loaded user) changes
    {
        let api = api.clone();
        Effect::new(move |_| {
            let scope = ListScope::new(filter.get(), user_id.get());
            if list_by_user && scope.user_id.is_none() {
                tracing::debug!(target: "board", "waiting for current user before listing");
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let tasks = board::fetch_tasks(&api, &scope).await;
                if let Some(err) = board.try_update(|b| b.apply_list(tasks)).flatten() {
                    tracing::warn!(target: "board", error = %err, "task list fetch failed");
                    toaster.error(err.user_message(MSG_FETCH_FAILED));
                }
            });
        });
    }

    // A completed write is reported as such even if the re-fetch fails
    let report = move |message: &'static str, refetch_err: Option<ClientError>| {
        toaster.success(message);
        if let Some(err) = refetch_err {
            toaster.error(err.user_message(MSG_FETCH_FAILED));
        }
        ctx.reload();
    };

    let apply = move |result: ClientResult<Refreshed>, fallback: &'static str| match result {
        Ok(done) => {
            let refetch_err = board.try_update(|b| b.apply_list(done.tasks)).flatten();
            report(done.message, refetch_err);
            true
        }
        Err(err) => {
            toaster.error(err.user_message(fallback));
            false
        }
    };

    let on_toggle = {
        let api = api.clone();
        Callback::new(move |(id, current): (TaskId, bool)| {
            let api = api.clone();
            let scope = scope();
            spawn_local(async move {
                apply(board::toggle_complete(&api, &scope, &id, current).await, MSG_STATUS_FAILED);
            });
        })
    };

    let on_edit = Callback::new(move |task: Task| board.update(|b| b.open_edit(&task)));
    let on_delete = Callback::new(move |id: TaskId| board.update(|b| b.request_delete(&id)));

    let on_confirm_delete = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let Some(confirmed) = board.try_update(|b| b.confirm_delete()).flatten() else {
                return;
            };
            let api = api.clone();
            let scope = scope();
            spawn_local(async move {
                let deleted = apply(board::delete_task(&api, &scope, confirmed).await, MSG_DELETE_FAILED);
                board.update(|b| b.finish_delete(deleted));
            });
        })
    };
    let on_cancel_delete = Callback::new(move |_: ()| board.update(|b| b.cancel_delete()));

    let on_submit = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let Some(modal) = board.with_untracked(|b| b.modal.clone()) else {
                return;
            };
            let api = api.clone();
            let scope = scope();
            spawn_local(async move {
                match board::save_task(&api, &scope, &modal).await {
                    Ok(done) => {
                        let refetch_err = board.try_update(|b| b.finish_save(done.tasks)).flatten();
                        report(done.message, refetch_err);
                    }
                    Err(err) => {
                        if !err.is_validation() {
                            tracing::warn!(target: "board", error = %err, "task save failed");
                        }
                        toaster.error(err.user_message(MSG_SAVE_FAILED));
                    }
                }
            });
        })
    };

    let on_filter = move |next| {
        board.update(|b| {
            b.set_filter(next);
        });
    };

    view! {
        <section class="task-board">
            <div class="board-header">
                <h2>{heading}</h2>
                <button class="btn btn-primary" on:click=move |_| board.update(|b| b.open_create())>
                    "+ New Task"
                </button>
            </div>

            <FilterTabs current=filter on_change=on_filter />

            {move || {
                if board.with(|b| b.loading) {
                    view! { <p class="board-status">"Loading tasks..."</p> }.into_any()
                } else if board.with(|b| b.tasks.is_empty()) {
                    view! { <p class="board-status">"No tasks found"</p> }.into_any()
                } else {
                    view! {
                        <div class="task-grid">
                            <For
                                each=move || board.with(|b| b.tasks.clone())
                                // Key on the displayed fields so an edit re-renders the card
                                key=|task| (task.id.clone(), task.completed, task.title.clone(), task.description.clone(), task.due_date.clone())
                                children=move |task| {
                                    view! {
                                        <TaskCard
                                            task=task
                                            on_toggle=on_toggle
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}

            <TaskModalForm board=board on_submit=on_submit />
            <DeleteConfirmDialog
                open=Signal::derive(move || board.with(|b| b.pending_delete.is_some()))
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        </section>
    }
}
