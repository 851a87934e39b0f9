//! The workday log and its mutation operations.
//!
//! [`WorkdayLog`] is an explicit value-semantics state object: callers hold
//! it, pass it to operations, and hand it to the persistence collaborator
//! after each mutation. There is no shared singleton, and the "currently
//! active" day is derived by scanning for the open-ended record rather than
//! tracked in a separate field that could desynchronize after a delete.
//!
//! Every operation is atomic from the caller's perspective: all checks run
//! before any mutation, so a failed call leaves the log unchanged. Callers
//! supply `now` explicitly, which keeps the log deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::day::{Task, ValidationError, Workday, WorkdayId};
use crate::time::elapsed_hours;

/// Errors from workday log operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A second day was started while one is still active.
    #[error("a workday is already active; end it before starting another")]
    Conflict,

    /// Invalid input, e.g. task text that trims to empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A task was added against a day that is not the current active day.
    #[error("workday {0} is not the active day")]
    NotActive(WorkdayId),

    /// No workday with the given ID exists.
    #[error("no workday with id {0}")]
    NotFound(WorkdayId),

    /// The day was already ended; a closed day is never reopened.
    #[error("workday {0} has already ended")]
    AlreadyEnded(WorkdayId),
}

/// The in-memory collection of workday records.
///
/// Invariant: at most one workday is active (no `ended_at`) at any time.
/// New days are prepended, so iteration order is most-recent-first by
/// insertion; display ordering beyond that is a caller concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkdayLog {
    days: Vec<Workday>,
}

impl WorkdayLog {
    /// Builds a log from previously persisted days.
    #[must_use]
    pub const fn from_days(days: Vec<Workday>) -> Self {
        Self { days }
    }

    /// All days in insertion order (most recent first).
    #[must_use]
    pub fn days(&self) -> &[Workday] {
        &self.days
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// The single workday with an absent end time, if any.
    #[must_use]
    pub fn active_day(&self) -> Option<&Workday> {
        self.days.iter().find(|day| day.is_active())
    }

    /// Looks up a day by ID.
    #[must_use]
    pub fn get(&self, id: &WorkdayId) -> Option<&Workday> {
        self.days.iter().find(|day| &day.id == id)
    }

    /// Starts a new workday for the given calendar date.
    ///
    /// Fails with [`StoreError::Conflict`] while another day is active.
    /// The new day starts at `now` with no tasks and becomes the active day.
    pub fn start(&mut self, date: NaiveDate, now: DateTime<Utc>) -> Result<&Workday, StoreError> {
        if self.active_day().is_some() {
            return Err(StoreError::Conflict);
        }
        let day = Workday {
            id: WorkdayId::generate(),
            date,
            started_at: now,
            ended_at: None,
            tasks: Vec::new(),
            cached_hours: None,
        };
        self.days.insert(0, day);
        Ok(&self.days[0])
    }

    /// Appends a task note to the active day.
    ///
    /// Fails with [`StoreError::Validation`] when `text` trims to empty and
    /// with [`StoreError::NotActive`] when `id` does not refer to the
    /// current active day (including when no day is active).
    pub fn add_task(
        &mut self,
        id: &WorkdayId,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let task = Task::new(now, text)?;
        let index = self
            .days
            .iter()
            .position(|day| day.is_active() && &day.id == id)
            .ok_or_else(|| StoreError::NotActive(id.clone()))?;
        self.days[index].tasks.push(task);
        Ok(())
    }

    /// Ends the given day at `now`, snapshotting its elapsed hours.
    ///
    /// Fails with [`StoreError::NotFound`] for an unknown ID and
    /// [`StoreError::AlreadyEnded`] for a closed day; a second `end` never
    /// moves `ended_at`.
    pub fn end(&mut self, id: &WorkdayId, now: DateTime<Utc>) -> Result<&Workday, StoreError> {
        let index = self
            .days
            .iter()
            .position(|day| &day.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        if !self.days[index].is_active() {
            return Err(StoreError::AlreadyEnded(id.clone()));
        }
        let day = &mut self.days[index];
        day.ended_at = Some(now);
        day.cached_hours = Some(elapsed_hours(day.started_at, now));
        Ok(&self.days[index])
    }

    /// Removes the day with the given ID, active or closed.
    ///
    /// Idempotent: deleting a non-existent ID is a no-op. Returns whether a
    /// record was removed.
    pub fn delete(&mut self, id: &WorkdayId) -> bool {
        let before = self.days.len();
        self.days.retain(|day| &day.id != id);
        before != self.days.len()
    }
}
