//! Task records exchanged with the tasks API.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Display format for due date/times.
pub const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shown in place of a due date/time the server sent in an unknown format.
pub const INVALID_DATE: &str = "Invalid Date";

/// Offset-less timestamp formats, tried in order after RFC 3339.
const LOCAL_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Every status, in selector order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Done => "Done",
        }
    }

    /// Human-readable label used by the status selector.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as returned by the server.
///
/// The client never mutates a task after receiving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier. Numeric ids are kept as their decimal text.
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    /// ISO-8601 timestamp, kept verbatim as sent by the server.
    pub due_date_time: String,
}

impl Task {
    /// Due date/time converted into `tz`.
    ///
    /// Timestamps carrying an offset are converted; offset-less timestamps are
    /// read as wall-clock time in `tz`.
    pub fn due_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        parse_timestamp(&self.due_date_time, tz)
    }

    /// Due date/time as `YYYY-MM-DD HH:mm` in `tz`.
    pub fn format_due_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self.due_in(tz) {
            Some(due) => due.format(DUE_FORMAT).to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    /// Due date/time as `YYYY-MM-DD HH:mm` in the viewer's time zone.
    pub fn format_due(&self) -> String {
        self.format_due_in(&Local)
    }

    /// Description, if the server sent a non-empty one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Request body for creating a task.
///
/// `description` and `due_date_time` serialize as explicit `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date_time: Option<DateTime<Utc>>,
}

impl CreateTaskPayload {
    /// Build a payload from raw form input.
    ///
    /// The title and description are trimmed; a blank description becomes `None`.
    pub fn new(
        title: &str,
        description: &str,
        status: TaskStatus,
        due_date_time: Option<DateTime<Utc>>,
    ) -> Self {
        let description = description.trim();
        Self {
            title: title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            status,
            due_date_time,
        }
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(fixed) = DateTime::parse_from_rfc3339(raw) {
        return Some(fixed.with_timezone(tz));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    tz.from_local_datetime(&naive).earliest()
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
