//! Dashboard Controller
//!
//! Owns the authoritative task cache. A mutation is reflected locally only
//! after the server acknowledges it; failures leave the cache untouched.

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::domain::{Task, TaskDraft};
use crate::routes::Route;

use super::state::StateHandle;

const LOAD_FAILED: &str = "Failed to load tasks. Please try again.";
const CREATE_FAILED: &str = "Failed to create task. Please try again.";
const UPDATE_FAILED: &str = "Failed to update task. Please try again.";
const DELETE_FAILED: &str = "Failed to delete task. Please try again.";
const TOGGLE_FAILED: &str = "Failed to update task status. Please try again.";

/// Which task form is open
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    #[default]
    Hidden,
    Create,
    /// Editing a snapshot of this record
    Edit(Task),
}

impl FormMode {
    pub fn editing(&self) -> Option<&Task> {
        match self {
            FormMode::Edit(task) => Some(task),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub tasks: Vec<Task>,
    pub form: FormMode,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            form: FormMode::Hidden,
            loading: true,
            submitting: false,
            error: None,
        }
    }
}

impl DashboardState {
    pub fn open_create_form(&mut self) {
        self.form = FormMode::Create;
    }

    pub fn start_edit(&mut self, task: Task) {
        self.form = FormMode::Edit(task);
    }

    pub fn cancel_form(&mut self) {
        self.form = FormMode::Hidden;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn load_finished(&mut self, result: ApiResult<Vec<Task>>) {
        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
            }
            Err(e) => self.fail(&e, LOAD_FAILED),
        }
    }

    pub fn submit_started(&mut self) {
        self.submitting = true;
    }

    pub fn create_finished(&mut self, result: ApiResult<Task>) {
        self.submitting = false;
        match result {
            Ok(task) => {
                self.tasks.insert(0, task);
                self.form = FormMode::Hidden;
                self.error = None;
            }
            Err(e) => self.fail(&e, CREATE_FAILED),
        }
    }

    pub fn update_finished(&mut self, result: ApiResult<Task>) {
        self.submitting = false;
        match result {
            Ok(task) => {
                self.replace(task);
                self.form = FormMode::Hidden;
                self.error = None;
            }
            Err(e) => self.fail(&e, UPDATE_FAILED),
        }
    }

    pub fn toggle_finished(&mut self, result: ApiResult<Task>) {
        self.submitting = false;
        match result {
            Ok(task) => {
                self.replace(task);
                self.error = None;
            }
            Err(e) => self.fail(&e, TOGGLE_FAILED),
        }
    }

    pub fn delete_finished(&mut self, id: u32, result: ApiResult<()>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                self.error = None;
            }
            Err(e) => self.fail(&e, DELETE_FAILED),
        }
    }

    /// Replace the cached copy with the server's record, by id
    fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// 401s already redirected to login; no banner for them.
    fn fail(&mut self, error: &ApiError, message: &str) {
        if !error.is_unauthorized() {
            self.error = Some(message.to_string());
        }
    }
}

/// Async orchestration for the dashboard page
#[derive(Clone)]
pub struct Dashboard<H> {
    api: ApiClient,
    state: H,
}

impl<H: StateHandle<DashboardState>> Dashboard<H> {
    pub fn new(api: ApiClient, state: H) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Requires a session (else redirects to login), then loads tasks.
    /// Returns whether the page may render.
    pub async fn mount(&self) -> bool {
        if !self.api.session().is_present() {
            self.api.navigator().navigate(Route::Login);
            return false;
        }
        self.load().await;
        true
    }

    pub async fn load(&self) {
        self.state.modify(|s| s.load_started());
        let result = self.api.list_tasks().await;
        if let Err(e) = &result {
            log::error!("Error loading tasks: {}", e);
        }
        self.state.modify(|s| s.load_finished(result));
    }

    pub async fn create(&self, draft: TaskDraft) {
        self.state.modify(|s| s.submit_started());
        let result = self.api.create_task(&draft).await;
        if let Err(e) = &result {
            log::error!("Error creating task: {}", e);
        }
        self.state.modify(|s| s.create_finished(result));
    }

    /// Submit the edit form for the task currently being edited
    pub async fn update(&self, draft: TaskDraft) {
        let Some(editing) = self.state.with_state(|s| s.form.editing().cloned()) else {
            log::warn!("update submitted with no task being edited");
            return;
        };
        self.state.modify(|s| s.submit_started());
        let result = self.api.update_task(editing.id, &editing.apply_draft(&draft)).await;
        if let Err(e) = &result {
            log::error!("Error updating task {}: {}", editing.id, e);
        }
        self.state.modify(|s| s.update_finished(result));
    }

    /// Resubmits the cached record with only `completed` flipped
    pub async fn toggle(&self, id: u32, completed: bool) {
        let Some(task) = self.state.with_state(|s| s.find(id).cloned()) else {
            return;
        };
        self.state.modify(|s| s.submit_started());
        let result = self.api.update_task(id, &task.with_completed(completed)).await;
        if let Err(e) = &result {
            log::error!("Error updating task status {}: {}", id, e);
        }
        self.state.modify(|s| s.toggle_finished(result));
    }

    pub async fn delete(&self, id: u32) {
        self.state.modify(|s| s.submit_started());
        let result = self.api.delete_task(id).await;
        if let Err(e) = &result {
            log::error!("Error deleting task {}: {}", id, e);
        }
        self.state.modify(|s| s.delete_finished(id, result));
    }

    /// Local logout happens whatever the server says
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            log::error!("Logout error: {}", e);
        }
        self.api.session().remove();
        self.api.navigator().navigate(Route::Login);
    }
}
