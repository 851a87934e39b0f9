//! Core domain logic for the workday tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Workdays and tasks: the records the tracker keeps
//! - The workday log: mutation operations that preserve the active-day invariant
//! - Aggregation: deriving per-day and total elapsed hours
//! - Report assembly: snapshotting the log into an inert summary structure

pub mod aggregate;
pub mod day;
pub mod report;
pub mod store;
pub mod time;

pub use aggregate::{hours_for, total_hours};
pub use day::{Task, ValidationError, Workday, WorkdayId};
pub use report::{DaySummary, ReportSummary, TaskLine, build_summary};
pub use store::{StoreError, WorkdayLog};
pub use time::{elapsed_hours, format_clock_time};
