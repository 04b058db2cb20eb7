//! Task Board
//!
//! State and actions behind the task views. `TaskBoard` is plain data with
//! pure transitions; the async actions talk to `TaskApi` and hand back the
//! freshly fetched list. There is no optimistic update: every write is
//! followed by exactly one list fetch, whose failure is reported on its own
//! and never turns a completed write into an error.

use crate::api::{ListScope, TaskApi};
use crate::error::{ClientError, ClientResult};
use crate::models::{Task, TaskDraft, TaskFilter, TaskId, TaskSummary};
use crate::validation::validate_draft;

/// Create/edit modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskModal {
    /// `None` = create mode
    pub editing: Option<TaskId>,
    pub draft: TaskDraft,
}

impl TaskModal {
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() { "Edit Task" } else { "Create Task" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Update" } else { "Add" }
    }
}

/// Proof that the user accepted the delete prompt.
///
/// Only `TaskBoard::confirm_delete` creates one, and `delete_task` requires
/// it, so a delete request cannot skip the confirmation step.
/// The prompt stays open until `TaskBoard::finish_delete` reports success.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfirmedDelete(TaskId);

impl ConfirmedDelete {
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// View state of a task list page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
    pub filter: TaskFilter,
    pub modal: Option<TaskModal>,
    pub pending_delete: Option<TaskId>,
    /// A confirmed delete is in flight
    pub deleting: bool,
    /// True until the first fetch settles
    pub loading: bool,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    // ========================
    // Modal
    // ========================

    pub fn open_create(&mut self) {
        self.modal = Some(TaskModal::default());
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.modal = Some(TaskModal {
            editing: Some(task.id.clone()),
            draft: TaskDraft::from_task(task),
        });
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Apply an edit to the open draft (no-op when closed)
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut TaskDraft)) {
        if let Some(modal) = self.modal.as_mut() {
            f(&mut modal.draft);
        }
    }

    // ========================
    // Two-phase delete
    // ========================

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// `None` without a pending prompt or while a delete is in flight
    pub fn confirm_delete(&mut self) -> Option<ConfirmedDelete> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.clone()?;
        self.deleting = true;
        Some(ConfirmedDelete(id))
    }

    /// Close the prompt on success; on failure keep it open for another try
    pub fn finish_delete(&mut self, succeeded: bool) {
        self.deleting = false;
        if succeeded {
            self.pending_delete = None;
        }
    }

    // ========================
    // List
    // ========================

    /// Wholesale replacement, never merged
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
    }

    /// Returns whether the filter changed (and a re-fetch is due)
    pub fn set_filter(&mut self, filter: TaskFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Take a list fetch result. On failure the current list is kept and
    /// the error is handed back for reporting.
    pub fn apply_list(&mut self, tasks: ClientResult<Vec<Task>>) -> Option<ClientError> {
        match tasks {
            Ok(tasks) => {
                self.replace_tasks(tasks);
                None
            }
            Err(err) => {
                self.loading = false;
                Some(err)
            }
        }
    }

    /// The save went through: close the modal whatever the re-fetch did
    pub fn finish_save(&mut self, tasks: ClientResult<Vec<Task>>) -> Option<ClientError> {
        self.close_modal();
        self.apply_list(tasks)
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// What a task card offers, derived from its completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardActions {
    pub badge: Option<&'static str>,
    pub toggle_label: &'static str,
    pub show_edit: bool,
}

pub fn card_actions(task: &Task) -> CardActions {
    if task.completed {
        CardActions {
            badge: Some("Completed"),
            toggle_label: "Undo",
            show_edit: false,
        }
    } else {
        CardActions {
            badge: None,
            toggle_label: "Complete",
            show_edit: true,
        }
    }
}

// ========================
// Actions
// ========================

/// A write that succeeded, with the outcome of the list fetch right after it
#[derive(Debug, Clone, PartialEq)]
pub struct Refreshed {
    pub tasks: ClientResult<Vec<Task>>,
    pub message: &'static str,
}

pub const MSG_FETCH_FAILED: &str = "Failed to fetch tasks";
pub const MSG_SAVE_FAILED: &str = "Something went wrong";
pub const MSG_STATUS_FAILED: &str = "Failed to update status";
pub const MSG_DELETE_FAILED: &str = "Failed to delete task";
pub const MSG_SUMMARY_FAILED: &str = "Failed to load task counts";
pub const MSG_LOAD_TASK_FAILED: &str = "Error loading task";
pub const MSG_UPDATE_FAILED: &str = "Update failed";
pub const MSG_TASK_NOT_FOUND: &str = "Task not found";
pub const MSG_UPDATE_REJECTED: &str = "Failed to update task";

pub async fn fetch_tasks<A: TaskApi + ?Sized>(api: &A, scope: &ListScope) -> ClientResult<Vec<Task>> {
    let tasks = api.list_tasks(scope).await?;
    tracing::debug!(target: "board", filter = ?scope.filter, count = tasks.len(), "tasks loaded");
    Ok(tasks)
}

async fn refetch<A: TaskApi + ?Sized>(api: &A, scope: &ListScope) -> ClientResult<Vec<Task>> {
    let tasks = fetch_tasks(api, scope).await;
    if let Err(err) = &tasks {
        tracing::warn!(target: "board", error = %err, "re-fetch after write failed");
    }
    tasks
}

pub async fn fetch_summary<A: TaskApi + ?Sized>(api: &A) -> ClientResult<TaskSummary> {
    api.task_summary().await
}

/// Create or update from the modal, then re-fetch once.
pub async fn save_task<A: TaskApi + ?Sized>(
    api: &A,
    scope: &ListScope,
    modal: &TaskModal,
) -> ClientResult<Refreshed> {
    validate_draft(&modal.draft)?;

    let message = match &modal.editing {
        Some(id) => {
            // The board does not look at `success` on modal saves
            api.update_task(id, &modal.draft).await?;
            tracing::info!(target: "board", %id, "task updated");
            "Task updated"
        }
        None => {
            api.create_task(&modal.draft).await?;
            tracing::info!(target: "board", "task created");
            "Task added"
        }
    };

    let tasks = refetch(api, scope).await;
    Ok(Refreshed { tasks, message })
}

/// Flip completion, then re-fetch once.
pub async fn toggle_complete<A: TaskApi + ?Sized>(
    api: &A,
    scope: &ListScope,
    id: &str,
    current: bool,
) -> ClientResult<Refreshed> {
    let completed = !current;
    api.set_task_status(id, completed).await?;
    tracing::info!(target: "board", id, completed, "status changed");

    let tasks = refetch(api, scope).await;
    Ok(Refreshed {
        tasks,
        message: if completed { "Marked as completed" } else { "Marked as incomplete" },
    })
}

/// Delete a confirmed task, then re-fetch once.
pub async fn delete_task<A: TaskApi + ?Sized>(
    api: &A,
    scope: &ListScope,
    confirmed: ConfirmedDelete,
) -> ClientResult<Refreshed> {
    api.delete_task(confirmed.id()).await?;
    tracing::info!(target: "board", id = confirmed.id(), "task deleted");

    let tasks = refetch(api, scope).await;
    Ok(Refreshed { tasks, message: "Task deleted" })
}

/// Edit page: load one task
pub async fn load_task<A: TaskApi + ?Sized>(api: &A, id: &str) -> ClientResult<Task> {
    api.get_task(id).await
}

/// Edit page: save one task (no list to refresh there). The reply must
/// carry `success: true`.
pub async fn update_task<A: TaskApi + ?Sized>(api: &A, id: &str, draft: &TaskDraft) -> ClientResult<()> {
    validate_draft(draft)?;
    api.update_task(id, draft).await?.into_result()?;
    tracing::info!(target: "board", id, "task updated from edit page");
    Ok(())
}

/// Toast text for a failed edit-page load
pub fn load_task_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Rejected(_) => MSG_TASK_NOT_FOUND.to_string(),
        _ => err.user_message(MSG_LOAD_TASK_FAILED),
    }
}

/// Toast text for a failed edit-page save
pub fn update_task_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Rejected(_) => MSG_UPDATE_REJECTED.to_string(),
        _ => err.user_message(MSG_UPDATE_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{task, Call, FakeApi};
    use crate::validation::MSG_TITLE_REQUIRED;

    fn scope() -> ListScope {
        ListScope::new(TaskFilter::All, None)
    }

    #[tokio::test]
    async fn test_create_refetches_once_and_closes_modal() {
        let api = FakeApi::default();
        let mut board = TaskBoard::new();
        board.open_create();
        board.edit_draft(|d| d.title = "Buy milk".into());

        let modal = board.modal.clone().unwrap();
        let saved = save_task(&api, &scope(), &modal).await.unwrap();
        assert!(board.finish_save(saved.tasks).is_none());

        assert_eq!(api.list_calls(), 1);
        assert_eq!(api.calls().last(), Some(&Call::List(TaskFilter::All)));
        assert!(board.modal.is_none());
        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.tasks[0].title, "Buy milk");
        assert_eq!(saved.message, "Task added");
    }

    #[tokio::test]
    async fn test_update_goes_through_put() {
        let api = FakeApi::with_tasks(vec![task("7", "Old", false)]);
        let mut board = TaskBoard::new();
        board.replace_tasks(api.tasks());
        let existing = board.find("7").cloned().unwrap();
        board.open_edit(&existing);
        board.edit_draft(|d| d.title = "New".into());

        let modal = board.modal.clone().unwrap();
        assert_eq!(modal.heading(), "Edit Task");
        let saved = save_task(&api, &scope(), &modal).await.unwrap();

        assert_eq!(api.calls()[0], Call::Update("7".into(), "New".into()));
        assert_eq!(api.list_calls(), 1);
        assert_eq!(saved.tasks.unwrap()[0].title, "New");
        assert_eq!(saved.message, "Task updated");
    }

    #[tokio::test]
    async fn test_blank_title_makes_no_request() {
        let api = FakeApi::default();
        let modal = TaskModal {
            editing: None,
            draft: TaskDraft { title: "   ".into(), ..Default::default() },
        };

        let err = save_task(&api, &scope(), &modal).await.unwrap_err();
        assert_eq!(err, ClientError::Validation(MSG_TITLE_REQUIRED.into()));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_modal_open() {
        let api = FakeApi::default();
        api.fail_with(Some(ClientError::Api { status: 500, message: None }));
        let mut board = TaskBoard::new();
        board.open_create();
        board.edit_draft(|d| d.title = "Buy milk".into());

        let modal = board.modal.clone().unwrap();
        let err = save_task(&api, &scope(), &modal).await.unwrap_err();

        assert_eq!(err.user_message(MSG_SAVE_FAILED), MSG_SAVE_FAILED);
        assert!(board.modal.is_some());
        assert_eq!(api.list_calls(), 0);
    }

    #[test]
    fn test_delete_needs_request_first() {
        let mut board = TaskBoard::new();
        assert!(board.confirm_delete().is_none());

        board.request_delete("1");
        board.cancel_delete();
        assert!(board.confirm_delete().is_none());

        board.request_delete("1");
        let confirmed = board.confirm_delete().unwrap();
        assert_eq!(confirmed.id(), "1");
        // In flight: a second confirm yields nothing
        assert!(board.confirm_delete().is_none());

        board.finish_delete(true);
        assert!(board.pending_delete.is_none());
        assert!(board.confirm_delete().is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_prompt_open() {
        let api = FakeApi::with_tasks(vec![task("1", "A", false)]);
        api.fail_with(Some(ClientError::Network("offline".into())));
        let mut board = TaskBoard::new();
        board.request_delete("1");

        let confirmed = board.confirm_delete().unwrap();
        let err = delete_task(&api, &scope(), confirmed).await.unwrap_err();
        board.finish_delete(false);

        assert_eq!(err.user_message(MSG_DELETE_FAILED), MSG_DELETE_FAILED);
        assert_eq!(board.pending_delete.as_deref(), Some("1"));

        api.fail_with(None);
        let retry = board.confirm_delete().unwrap();
        delete_task(&api, &scope(), retry).await.unwrap();
        board.finish_delete(true);
        assert!(board.pending_delete.is_none());
        assert!(api.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_delete_after_confirmation() {
        let api = FakeApi::with_tasks(vec![task("1", "A", false), task("2", "B", false)]);
        let mut board = TaskBoard::new();
        board.request_delete("1");
        assert!(api.calls().is_empty());

        let confirmed = board.confirm_delete().unwrap();
        let refreshed = delete_task(&api, &scope(), confirmed).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Delete("1".into()), Call::List(TaskFilter::All)]);
        let tasks = refreshed.tasks.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "2");
    }

    #[tokio::test]
    async fn test_toggle_flips_only_target_and_is_reversible() {
        let api = FakeApi::with_tasks(vec![task("1", "A", false), task("2", "B", true)]);
        let original = api.tasks();

        let first = toggle_complete(&api, &scope(), "1", false).await.unwrap();
        assert_eq!(first.message, "Marked as completed");
        let listed = first.tasks.unwrap();
        assert!(listed[0].completed);
        assert_eq!(listed[1], original[1]);

        let second = toggle_complete(&api, &scope(), "1", true).await.unwrap();
        assert_eq!(second.message, "Marked as incomplete");
        assert_eq!(second.tasks, Ok(original));
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_complete_example_hides_edit() {
        let api = FakeApi::with_tasks(vec![task("1", "A", false)]);
        let mut board = TaskBoard::new();
        board.replace_tasks(fetch_tasks(&api, &scope()).await.unwrap());

        let before = card_actions(&board.tasks[0]);
        assert_eq!(before.toggle_label, "Complete");
        assert!(before.show_edit);
        assert_eq!(before.badge, None);

        let current = board.tasks[0].completed;
        let refreshed = toggle_complete(&api, &scope(), "1", current).await.unwrap();
        assert!(board.apply_list(refreshed.tasks).is_none());

        assert!(api.calls().contains(&Call::SetStatus("1".into(), true)));
        let after = card_actions(&board.tasks[0]);
        assert_eq!(after.badge, Some("Completed"));
        assert!(!after.show_edit);
        assert_eq!(after.toggle_label, "Undo");
    }

    #[tokio::test]
    async fn test_filter_is_sent_to_server() {
        let api = FakeApi::with_tasks(vec![task("1", "A", false), task("2", "B", true)]);
        let mut board = TaskBoard::new();
        assert!(board.set_filter(TaskFilter::Completed));
        assert!(!board.set_filter(TaskFilter::Completed));

        let scope = ListScope::new(board.filter, None);
        let tasks = fetch_tasks(&api, &scope).await.unwrap();

        assert_eq!(api.calls(), vec![Call::List(TaskFilter::Completed)]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "2");
    }

    #[tokio::test]
    async fn test_fetch_failure_message() {
        let api = FakeApi::default();
        api.fail_with(Some(ClientError::Network("offline".into())));
        let err = fetch_tasks(&api, &scope()).await.unwrap_err();
        assert_eq!(err.user_message(MSG_FETCH_FAILED), MSG_FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let api = FakeApi::with_tasks(vec![task("1", "A", false), task("2", "B", true), task("3", "C", true)]);
        let summary = fetch_summary(&api).await.unwrap();
        assert_eq!(summary, TaskSummary { total: 3, completed: 2, pending: 1 });
    }

    #[tokio::test]
    async fn test_edit_page_load_and_update() {
        let api = FakeApi::with_tasks(vec![task("9", "Draft", false)]);

        let loaded = load_task(&api, "9").await.unwrap();
        let mut draft = TaskDraft::from_task(&loaded);
        draft.description = "with notes".into();
        update_task(&api, "9", &draft).await.unwrap();

        assert_eq!(api.tasks()[0].description, "with notes");

        let missing = load_task(&api, "404").await.unwrap_err();
        assert_eq!(missing.user_message(MSG_LOAD_TASK_FAILED), "Task not found");
    }

    #[tokio::test]
    async fn test_write_stands_when_refetch_fails() {
        let api = FakeApi::default();
        api.fail_lists_with(Some(ClientError::Network("offline".into())));
        let mut board = TaskBoard::new();
        board.open_create();
        board.edit_draft(|d| d.title = "Buy milk".into());

        let modal = board.modal.clone().unwrap();
        let saved = save_task(&api, &scope(), &modal).await.unwrap();
        assert_eq!(saved.message, "Task added");

        let err = board.finish_save(saved.tasks).unwrap();
        assert_eq!(err.user_message(MSG_FETCH_FAILED), MSG_FETCH_FAILED);
        assert!(board.modal.is_none());
        assert!(!board.loading);
        assert_eq!(api.tasks().len(), 1);

        // Status and delete writes also succeed on their own
        let toggled = toggle_complete(&api, &scope(), "101", false).await.unwrap();
        assert!(toggled.tasks.is_err());
        assert!(api.tasks()[0].completed);

        board.request_delete("101");
        let confirmed = board.confirm_delete().unwrap();
        let deleted = delete_task(&api, &scope(), confirmed).await.unwrap();
        assert!(deleted.tasks.is_err());
        assert!(api.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_edit_page_requires_success_flag() {
        let api = FakeApi::with_tasks(vec![task("9", "Draft", false)]);
        api.set_update_success(false);
        let draft = TaskDraft { title: "Renamed".into(), ..Default::default() };

        let err = update_task(&api, "9", &draft).await.unwrap_err();
        assert_eq!(update_task_error_message(&err), MSG_UPDATE_REJECTED);

        // The modal path ignores the flag
        let modal = TaskModal { editing: Some("9".into()), draft };
        let saved = save_task(&api, &scope(), &modal).await.unwrap();
        assert_eq!(saved.message, "Task updated");
    }

    #[test]
    fn test_edit_page_messages() {
        let rejected = ClientError::Rejected(Some("nope".into()));
        assert_eq!(load_task_error_message(&rejected), MSG_TASK_NOT_FOUND);
        assert_eq!(update_task_error_message(&rejected), MSG_UPDATE_REJECTED);

        let offline = ClientError::Network("offline".into());
        assert_eq!(load_task_error_message(&offline), MSG_LOAD_TASK_FAILED);
        assert_eq!(update_task_error_message(&offline), MSG_UPDATE_FAILED);

        let blank = ClientError::Validation("Title is required".into());
        assert_eq!(update_task_error_message(&blank), "Title is required");
    }

    #[test]
    fn test_new_board_is_loading_until_first_list() {
        let mut board = TaskBoard::new();
        assert!(board.loading);
        board.replace_tasks(Vec::new());
        assert!(!board.loading);
    }

    #[test]
    fn test_edit_draft_ignored_when_closed() {
        let mut board = TaskBoard::new();
        board.edit_draft(|d| d.title = "x".into());
        assert!(board.modal.is_none());
    }
}
