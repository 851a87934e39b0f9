//! Report assembly: snapshotting the log into an inert summary structure.
//!
//! The summary is a value copy of the log at one point-in-time, ready to be
//! handed to the rendering/export collaborators. It carries no behavior.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::aggregate::hours_for;
use crate::day::Workday;

/// A task line within a day summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLine {
    pub time: DateTime<Utc>,
    pub text: String,
}

/// Summary of a single workday with its computed hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub hours: f64,
    pub tasks: Vec<TaskLine>,
}

/// The assembled report: ordered day summaries plus a grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub total_hours: f64,
    pub days: Vec<DaySummary>,
}

/// Builds a summary over the given days at `now`.
///
/// The input order is preserved verbatim: ordering policy is a caller
/// concern, and the assembler never re-sorts differently than the caller's
/// intended presentation order. Hour figures come from the aggregator, so
/// open days report their live elapsed hours.
#[must_use]
pub fn build_summary(days: &[Workday], now: DateTime<Utc>) -> ReportSummary {
    let summaries: Vec<DaySummary> = days
        .iter()
        .map(|day| DaySummary {
            date: day.date,
            started_at: day.started_at,
            ended_at: day.ended_at,
            hours: hours_for(day, now),
            tasks: day
                .tasks
                .iter()
                .map(|task| TaskLine {
                    time: task.occurred_at,
                    text: task.text.clone(),
                })
                .collect(),
        })
        .collect();
    let total_hours = summaries.iter().map(|day| day.hours).sum();

    ReportSummary {
        generated_at: now,
        total_hours,
        days: summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WorkdayLog;
    use chrono::TimeZone;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, m, 0).unwrap()
    }

    fn two_day_log() -> WorkdayLog {
        let mut log = WorkdayLog::default();
        let first = log.start(date(10), at(10, 9, 0)).unwrap().id.clone();
        log.add_task(&first, "write spec", at(10, 9, 15)).unwrap();
        log.add_task(&first, "review", at(10, 11, 0)).unwrap();
        log.end(&first, at(10, 17, 0)).unwrap();
        let second = log.start(date(11), at(11, 9, 0)).unwrap().id.clone();
        log.add_task(&second, "implement", at(11, 9, 30)).unwrap();
        log
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn summary_carries_hours_and_tasks() {
        let log = two_day_log();
        let summary = build_summary(log.days(), at(11, 13, 0));

        assert_eq!(summary.days.len(), 2);
        // Input order preserved: log is most-recent-first
        let open = &summary.days[0];
        let closed = &summary.days[1];

        assert_eq!(open.date, date(11));
        assert_eq!(open.ended_at, None);
        assert_eq!(open.hours, 4.0); // live against `now`

        assert_eq!(closed.date, date(10));
        assert_eq!(closed.hours, 8.0);
        assert_eq!(closed.tasks.len(), 2);
        assert_eq!(closed.tasks[0].text, "write spec");
        assert_eq!(closed.tasks[1].text, "review");

        assert_eq!(summary.total_hours, 12.0);
    }

    #[test]
    fn summary_preserves_caller_order() {
        let log = two_day_log();
        let mut reversed: Vec<Workday> = log.days().to_vec();
        reversed.reverse();

        let summary = build_summary(&reversed, at(11, 13, 0));
        assert_eq!(summary.days[0].date, date(10));
        assert_eq!(summary.days[1].date, date(11));
    }

    #[test]
    fn summary_serializes_with_wire_names() {
        let log = two_day_log();
        let summary = build_summary(log.days(), at(11, 13, 0));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["generatedAt"], "2024-01-11T13:00:00Z");
        assert!(json["totalHours"].is_number());
        assert_eq!(json["days"][1]["tasks"][0]["text"], "write spec");
        assert_eq!(json["days"][0]["endedAt"], serde_json::Value::Null);
    }
}
