//! Derives per-day and all-days elapsed hours from the current log state.

use chrono::{DateTime, Utc};

use crate::day::Workday;
use crate::time::elapsed_hours;

/// Elapsed hours for a single day at the given point-in-time.
///
/// Closed days use the close-time `cached_hours` snapshot when present and
/// recompute from `started_at`/`ended_at` otherwise. Active days are always
/// computed against `now` — the value keeps moving while the day stays open,
/// so it must be derived at display time, never cached.
#[must_use]
pub fn hours_for(day: &Workday, now: DateTime<Utc>) -> f64 {
    match day.ended_at {
        Some(ended_at) => day
            .cached_hours
            .unwrap_or_else(|| elapsed_hours(day.started_at, ended_at)),
        None => elapsed_hours(day.started_at, now),
    }
}

/// Sum of [`hours_for`] over all days.
///
/// Each constituent term carries the per-day 2-decimal rounding
/// (sum-of-rounded, not round-of-sum) so the total stays consistent with the
/// per-day displayed figures.
#[must_use]
pub fn total_hours<'a, I>(days: I, now: DateTime<Utc>) -> f64
where
    I: IntoIterator<Item = &'a Workday>,
{
    days.into_iter().map(|day| hours_for(day, now)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WorkdayLog;
    use chrono::{NaiveDate, TimeZone};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, m, 0).unwrap()
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn active_day_hours_move_with_now() {
        let mut log = WorkdayLog::default();
        log.start(date(10), at(10, 9, 0)).unwrap();
        let day = log.active_day().unwrap();

        assert_eq!(hours_for(day, at(10, 9, 30)), 0.5);
        assert_eq!(hours_for(day, at(10, 12, 0)), 3.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn closed_day_prefers_cached_hours() {
        let mut log = WorkdayLog::default();
        let id = log.start(date(10), at(10, 9, 0)).unwrap().id.clone();
        log.end(&id, at(10, 17, 0)).unwrap();

        let day = log.get(&id).unwrap();
        assert_eq!(day.cached_hours, Some(8.0));
        // `now` is irrelevant once the day is closed
        assert_eq!(hours_for(day, at(11, 12, 0)), 8.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn closed_day_without_cache_recomputes() {
        let mut log = WorkdayLog::default();
        let id = log.start(date(10), at(10, 9, 0)).unwrap().id.clone();
        log.end(&id, at(10, 17, 0)).unwrap();

        // Simulate stored data written without the cache field
        let mut day = log.get(&id).unwrap().clone();
        day.cached_hours = None;
        assert_eq!(hours_for(&day, at(11, 12, 0)), 8.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn total_hours_sums_rounded_terms() {
        let mut log = WorkdayLog::default();
        let first = log.start(date(10), at(10, 9, 0)).unwrap().id.clone();
        log.end(&first, at(10, 12, 30)).unwrap(); // 3.50
        let second = log.start(date(11), at(11, 9, 0)).unwrap().id.clone();
        log.end(&second, at(11, 13, 15)).unwrap(); // 4.25

        assert_eq!(total_hours(log.days(), at(11, 14, 0)), 7.75);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn total_hours_empty_is_zero() {
        let log = WorkdayLog::default();
        assert_eq!(total_hours(log.days(), at(10, 9, 0)), 0.0);
    }
}
