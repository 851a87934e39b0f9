//! Conversions between points-in-time, readable clock strings, and elapsed hours.

use chrono::{DateTime, Local, Utc};

/// Placeholder rendered for an absent point-in-time (e.g., an open day's end).
pub const CLOCK_PLACEHOLDER: &str = "-";

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Elapsed hours between two points-in-time, rounded to 2 decimal places.
///
/// Never negative: clock skew or bad input where `end < start` yields `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elapsed_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let ms = (end - start).num_milliseconds();
    if ms <= 0 {
        return 0.0;
    }
    (ms as f64 / MS_PER_HOUR * 100.0).round() / 100.0
}

/// Formats a point-in-time as a short local clock string (`HH:MM:SS`).
///
/// Absent inputs render as [`CLOCK_PLACEHOLDER`].
#[must_use]
pub fn format_clock_time(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(
        || CLOCK_PLACEHOLDER.to_string(),
        |t| t.with_timezone(&Local).format("%H:%M:%S").to_string(),
    )
}
