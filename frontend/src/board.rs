//! View model for the create form and the task list.
//!
//! [`TaskBoard`] owns all UI state and is mutated only by user input and by
//! completed requests. Requests themselves are issued by the caller:
//! [`TaskBoard::begin_submit`] hands back the payload to send, and
//! [`TaskBoard::finish_submit`] takes the outcome.

use chrono::{Local, TimeZone};
use std::fmt;
use task_api::{ApiError, CreateTaskPayload, Task, TaskStatus};

use crate::form::{FieldErrors, FormField, TaskForm};

pub const CREATED_MESSAGE: &str = "Task created successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Something went wrong";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tasks";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks created yet.";

/// Placeholder for a task without a description.
pub const NO_DESCRIPTION: &str = "-";

/// Lifecycle of the create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Lifecycle of the list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What the task list area should show.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Rows(&'a [Task]),
}

/// One table row, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub title: &'a str,
    pub status: TaskStatus,
    pub due: String,
    pub description: &'a str,
}

impl<'a> TaskRow<'a> {
    /// Row with the due date/time in the viewer's zone.
    pub fn new(task: &'a Task) -> Self {
        Self::in_zone(task, &Local)
    }

    pub fn in_zone<Tz: TimeZone>(task: &'a Task, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            title: &task.title,
            status: task.status,
            due: task.format_due_in(tz),
            description: task.description().unwrap_or(NO_DESCRIPTION),
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskBoard {
    /// Bound directly to the form widgets; report edits through [`TaskBoard::field_edited`].
    pub form: TaskForm,
    field_errors: FieldErrors,
    submission: Submission,
    list: ListState,
    /// A create finished while a load was in flight; that load may predate it.
    reload_pending: bool,
    created_task: Option<Task>,
    tasks: Vec<Task>,
    success_message: Option<String>,
    error_message: Option<String>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------------

    /// Record that the user changed `field`: its inline error goes away and a
    /// finished submission returns to idle.
    pub fn field_edited(&mut self, field: FormField) {
        self.field_errors.clear(field);
        if matches!(self.submission, Submission::Succeeded | Submission::Failed) {
            self.submission = Submission::Idle;
        }
    }

    pub fn field_error(&self, field: FormField) -> Option<&'static str> {
        self.field_errors.get(field)
    }

    /// Validate the form and start a submission.
    ///
    /// Returns the payload to send, or `None` when validation failed or a
    /// submission is already in flight. Validation failures are stored as
    /// field errors.
    pub fn begin_submit(&mut self) -> Option<CreateTaskPayload> {
        if self.is_submitting() {
            return None;
        }

        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                log::debug!("Form rejected: {errors:?}");
                self.field_errors = errors;
                return None;
            }
        };

        self.field_errors = FieldErrors::default();
        self.submission = Submission::Submitting;
        self.error_message = None;
        self.success_message = None;
        self.created_task = None;
        Some(payload)
    }

    /// Apply the outcome of a create request.
    ///
    /// Returns `true` when the task list should be reloaded now. If a load is
    /// already in flight the reload is queued and issued by [`TaskBoard::finish_load`].
    pub fn finish_submit(&mut self, result: Result<Task, ApiError>) -> bool {
        match result {
            Ok(task) => {
                log::info!("Created task {}", task.id);
                self.created_task = Some(task);
                self.success_message = Some(CREATED_MESSAGE.to_string());
                self.form.reset();
                self.field_errors = FieldErrors::default();
                self.submission = Submission::Succeeded;
                if self.is_loading() {
                    self.reload_pending = true;
                    false
                } else {
                    true
                }
            }
            Err(e) => {
                self.error_message = Some(message_or(&e, CREATE_FAILED_MESSAGE));
                self.submission = Submission::Failed;
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------------

    /// Start loading the task list. Returns `false` if a load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.list = ListState::Loading;
        true
    }

    /// Apply the outcome of a list request. A failure keeps the rows already shown.
    ///
    /// Returns `true` when a queued reload must be sent; the list stays loading.
    pub fn finish_load(&mut self, result: Result<Vec<Task>, ApiError>) -> bool {
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.list = ListState::Loaded;
            }
            Err(e) => {
                self.error_message = Some(message_or(&e, LOAD_FAILED_MESSAGE));
                self.list = ListState::Failed;
            }
        }

        if std::mem::take(&mut self.reload_pending) {
            log::debug!("Reloading tasks created during the previous load");
            self.list = ListState::Loading;
            return true;
        }
        false
    }

    pub fn list_view(&self) -> ListView<'_> {
        if self.is_loading() {
            ListView::Loading
        } else if self.tasks.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(&self.tasks)
        }
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success_message = None;
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    pub fn list_state(&self) -> ListState {
        self.list
    }

    pub fn is_loading(&self) -> bool {
        self.list == ListState::Loading
    }

    pub fn created_task(&self) -> Option<&Task> {
        self.created_task.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }
}

fn message_or(error: &ApiError, fallback: &str) -> String {
    let message = error.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
