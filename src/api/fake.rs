//! In-memory API for tests.
//!
//! Keeps a task list, applies mutations to it the way the server would and
//! records every call so tests can assert on request counts and order.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{AuthApi, Envelope, ListScope, LoginResponse, TaskApi};
use crate::error::{ClientError, ClientResult};
use crate::models::{Task, TaskDraft, TaskFilter, TaskSummary, User};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login { identifier: String },
    Register { email: String },
    CurrentUser,
    Logout,
    Summary,
    List(TaskFilter),
    Get(String),
    Create(String),
    Update(String, String),
    SetStatus(String, bool),
    Delete(String),
}

pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    tasks: Mutex<Vec<Task>>,
    next_id: Mutex<u32>,
    login_reply: Mutex<ClientResult<LoginResponse>>,
    register_reply: Mutex<ClientResult<Envelope>>,
    logout_reply: Mutex<ClientResult<()>>,
    failure: Mutex<Option<ClientError>>,
    list_failure: Mutex<Option<ClientError>>,
    update_success: Mutex<bool>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            tasks: Mutex::new(Vec::new()),
            next_id: Mutex::new(100),
            login_reply: Mutex::new(Ok(LoginResponse {
                success: true,
                message: Some("Login successful".into()),
                data: Some("token-123".into()),
                is_new_user: false,
            })),
            register_reply: Mutex::new(Ok(Envelope { success: true, message: None })),
            logout_reply: Mutex::new(Ok(())),
            failure: Mutex::new(None),
            list_failure: Mutex::new(None),
            update_success: Mutex::new(true),
        }
    }
}

pub fn task(id: &str, title: &str, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        completed,
        due_date: None,
        created_at: None,
    }
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        *api.tasks.lock().unwrap() = tasks;
        api
    }

    pub fn set_login_reply(&self, reply: ClientResult<LoginResponse>) {
        *self.login_reply.lock().unwrap() = reply;
    }

    pub fn set_register_reply(&self, reply: ClientResult<Envelope>) {
        *self.register_reply.lock().unwrap() = reply;
    }

    pub fn set_logout_reply(&self, reply: ClientResult<()>) {
        *self.logout_reply.lock().unwrap() = reply;
    }

    /// Make every task endpoint fail with `err` until cleared
    pub fn fail_with(&self, err: Option<ClientError>) {
        *self.failure.lock().unwrap() = err;
    }

    /// Make only the list endpoint fail; writes still go through
    pub fn fail_lists_with(&self, err: Option<ClientError>) {
        *self.list_failure.lock().unwrap() = err;
    }

    /// `success` flag of the PUT reply
    pub fn set_update_success(&self, success: bool) {
        *self.update_success.lock().unwrap() = success;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    pub fn list_calls(&self) -> usize {
        self.count(|c| matches!(c, Call::List(_)))
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn with_task<R>(&self, id: &str, f: impl FnOnce(&mut Task) -> R) -> ClientResult<R> {
        let mut tasks = self.tasks.lock().unwrap();
        tasks
            .iter_mut()
            .find(|t| t.id == id)
            .map(f)
            .ok_or(ClientError::Api { status: 404, message: Some("Task not found".into()) })
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn login(&self, identifier: &str, _password: &str) -> ClientResult<LoginResponse> {
        self.calls.lock().unwrap().push(Call::Login { identifier: identifier.to_string() });
        self.login_reply.lock().unwrap().clone()
    }

    async fn register(&self, _username: &str, email: &str, _password: &str) -> ClientResult<Envelope> {
        self.calls.lock().unwrap().push(Call::Register { email: email.to_string() });
        self.register_reply.lock().unwrap().clone()
    }

    async fn current_user(&self) -> ClientResult<User> {
        self.record(Call::CurrentUser)?;
        Ok(User {
            id: "u1".into(),
            username: "asha".into(),
            email: "asha@gmail.com".into(),
        })
    }

    async fn logout(&self) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call::Logout);
        self.logout_reply.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn task_summary(&self) -> ClientResult<TaskSummary> {
        self.record(Call::Summary)?;
        let tasks = self.tasks.lock().unwrap();
        let completed = tasks.iter().filter(|t| t.completed).count() as u32;
        Ok(TaskSummary {
            total: tasks.len() as u32,
            completed,
            pending: tasks.len() as u32 - completed,
        })
    }

    async fn list_tasks(&self, scope: &ListScope) -> ClientResult<Vec<Task>> {
        self.record(Call::List(scope.filter))?;
        if let Some(err) = self.list_failure.lock().unwrap().clone() {
            return Err(err);
        }
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| match scope.filter {
                TaskFilter::All => true,
                TaskFilter::Completed => t.completed,
                TaskFilter::Pending => !t.completed,
            })
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: &str) -> ClientResult<Task> {
        self.record(Call::Get(id.to_string()))?;
        self.with_task(id, |t| t.clone())
    }

    async fn create_task(&self, draft: &TaskDraft) -> ClientResult<()> {
        self.record(Call::Create(draft.title.clone()))?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let mut created = task(&next_id.to_string(), draft.title.trim(), false);
        created.description = draft.description.clone();
        created.due_date = draft.due_date.clone();
        self.tasks.lock().unwrap().push(created);
        Ok(())
    }

    async fn update_task(&self, id: &str, draft: &TaskDraft) -> ClientResult<Envelope> {
        self.record(Call::Update(id.to_string(), draft.title.clone()))?;
        self.with_task(id, |t| {
            t.title = draft.title.trim().to_string();
            t.description = draft.description.clone();
        })?;
        Ok(Envelope {
            success: *self.update_success.lock().unwrap(),
            message: None,
        })
    }

    async fn set_task_status(&self, id: &str, completed: bool) -> ClientResult<()> {
        self.record(Call::SetStatus(id.to_string(), completed))?;
        self.with_task(id, |t| t.completed = completed)
    }

    async fn delete_task(&self, id: &str) -> ClientResult<()> {
        self.record(Call::Delete(id.to_string()))?;
        self.tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}
