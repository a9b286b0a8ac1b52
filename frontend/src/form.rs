//! Form state and validation for creating a task.

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use std::collections::BTreeMap;
use task_api::{CreateTaskPayload, TaskStatus};

/// Fields of the create-task form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Status,
    DueDateTime,
}

/// A validator inspects the whole form and returns a message when its field is invalid.
pub type Validator = fn(&TaskForm) -> Option<&'static str>;

/// Validators run at submit time, one per validated field.
pub const VALIDATORS: [(FormField, Validator); 3] = [
    (FormField::Title, title_required),
    (FormField::Status, status_required),
    (FormField::DueDateTime, due_required),
];

fn title_required(form: &TaskForm) -> Option<&'static str> {
    form.title.trim().is_empty().then_some("Title is required")
}

fn status_required(form: &TaskForm) -> Option<&'static str> {
    form.status.is_none().then_some("Status is required")
}

fn due_required(form: &TaskForm) -> Option<&'static str> {
    form.due_date_time.is_none().then_some("Due date/time is required")
}

/// Inline messages for fields that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

/// Values currently entered in the create-task form.
///
/// `due_date_time` is wall-clock time in the viewer's zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: Option<TaskStatus>,
    pub due_date_time: Option<NaiveDateTime>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: Some(TaskStatus::Todo),
            due_date_time: None,
        }
    }
}

impl TaskForm {
    /// Run every validator against the current values.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for (field, validator) in VALIDATORS {
            if let Some(message) = validator(self) {
                errors.insert(field, message);
            }
        }
        errors
    }

    /// Validate and build the request payload, reading the due date/time as local time.
    pub fn to_payload(&self) -> Result<CreateTaskPayload, FieldErrors> {
        self.payload_in(&Local)
    }

    /// Validate and build the request payload, reading the due date/time in `tz`.
    pub fn payload_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<CreateTaskPayload, FieldErrors> {
        let mut errors = self.validate();

        let due = self
            .due_date_time
            .and_then(|naive| tz.from_local_datetime(&naive).earliest())
            .map(|due| due.with_timezone(&Utc));
        if due.is_none() && errors.get(FormField::DueDateTime).is_none() {
            errors.insert(FormField::DueDateTime, "Due date/time does not exist in this time zone");
        }

        match (self.status, errors.is_empty()) {
            (Some(status), true) => Ok(CreateTaskPayload::new(
                &self.title,
                &self.description,
                status,
                due,
            )),
            _ => Err(errors),
        }
    }

    /// Restore the initial values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn due() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn filled() -> TaskForm {
        TaskForm {
            title: "  Write report ".into(),
            description: "  Quarterly numbers\n".into(),
            status: Some(TaskStatus::InProgress),
            due_date_time: Some(due()),
        }
    }

    #[test]
    fn initial_form_has_todo_status_and_no_due_date() {
        let form = TaskForm::default();
        assert_eq!(form.status, Some(TaskStatus::Todo));
        assert_eq!(form.due_date_time, None);
        assert!(form.title.is_empty());
    }

    #[test]
    fn initial_form_fails_title_and_due_date() {
        let errors = TaskForm::default().validate();

        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(errors.get(FormField::DueDateTime), Some("Due date/time is required"));
        assert_eq!(errors.get(FormField::Status), None);
    }

    #[test]
    fn validators_are_independent() {
        let form = TaskForm {
            status: None,
            ..filled()
        };
        let errors = form.validate();

        assert_eq!(errors.fields().collect::<Vec<_>>(), [FormField::Status]);
        assert_eq!(errors.get(FormField::Status), Some("Status is required"));
    }

    #[test]
    fn whitespace_title_is_rejected() {
        for title in ["", " ", "\t\n  "] {
            let form = TaskForm {
                title: title.into(),
                ..filled()
            };
            let errors = form.payload_in(&Utc).unwrap_err();
            assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        }
    }

    #[test]
    fn payload_trims_and_converts_due_to_utc() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let payload = filled().payload_in(&plus_two).unwrap();

        assert_eq!(payload.title, "Write report");
        assert_eq!(payload.description.as_deref(), Some("Quarterly numbers"));
        assert_eq!(payload.status, TaskStatus::InProgress);
        assert_eq!(
            payload.due_date_time.unwrap().to_rfc3339(),
            "2025-03-01T07:30:00+00:00"
        );
    }

    #[test]
    fn blank_description_becomes_null() {
        let form = TaskForm {
            description: "   ".into(),
            ..filled()
        };
        assert_eq!(form.payload_in(&Utc).unwrap().description, None);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, TaskForm::default());
    }
}
