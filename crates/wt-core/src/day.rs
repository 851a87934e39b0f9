//! Workday and task records with validation.
//!
//! # Serialized form
//!
//! Workdays serialize to camelCase JSON for the persistence blob and the
//! report output: `id`, `date` (`YYYY-MM-DD`), `startedAt`/`endedAt`
//! (ISO 8601, `endedAt` null while the day is active),
//! `tasks[{occurredAt, text}]`, and `cachedHours` omitted when absent so
//! stored data without the cache field stays valid.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty (or trimmed to empty).
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// A validated workday identifier.
///
/// Opaque, unique, assigned at creation and stable for the record's lifetime.
/// Must be a non-empty string; freshly created days get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkdayId(String);

impl WorkdayId {
    /// Creates an ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "workday ID" });
        }
        Ok(Self(id))
    }

    /// Generates a fresh unique ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WorkdayId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkdayId> for String {
    fn from(id: WorkdayId) -> Self {
        id.0
    }
}

impl fmt::Display for WorkdayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WorkdayId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A timestamped task note, owned by its parent [`Workday`].
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// When the task was recorded.
    pub occurred_at: DateTime<Utc>,
    /// Non-empty, trimmed description.
    pub text: String,
}

impl Task {
    /// Creates a task after trimming and validating the description.
    pub fn new(occurred_at: DateTime<Utc>, text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::Empty { field: "task text" });
        }
        Ok(Self {
            occurred_at,
            text: text.to_string(),
        })
    }
}

/// A recorded workday.
///
/// Created by `start`, extended by `add_task` while active, closed exactly
/// once by `end`, and thereafter immutable except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workday {
    /// Opaque unique identifier.
    pub id: WorkdayId,
    /// The logical calendar day this record represents, independent of when
    /// `started_at` actually occurred.
    pub date: NaiveDate,
    /// Set once at creation, never mutated afterward.
    pub started_at: DateTime<Utc>,
    /// Absent while the day is active; set exactly once, never unset.
    pub ended_at: Option<DateTime<Utc>>,
    /// Append-only, insertion order = chronological order of addition.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Optional elapsed-hours snapshot taken at close time. Authoritative
    /// over recomputation when present; the aggregator can always recompute
    /// from `started_at`/`ended_at` alone when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_hours: Option<f64>,
}

impl Workday {
    /// Returns true while the day has no end time.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}
