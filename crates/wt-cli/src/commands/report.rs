//! Report command: render the work history with computed hours.
//!
//! The log keeps insertion order; this command applies the presentation
//! order (reverse-chronological by date, stable) before handing the days to
//! the assembler, which preserves it verbatim.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use wt_core::{ReportSummary, Workday, build_summary, format_clock_time};
use wt_db::Database;

use super::util::load_log;

/// Days in presentation order: reverse-chronological by date, ties keeping
/// insertion order (most recent first, as the store prepends).
pub fn presentation_order(days: &[Workday]) -> Vec<Workday> {
    let mut days = days.to_vec();
    days.sort_by(|a, b| b.date.cmp(&a.date));
    days
}

/// Formats the human-readable history output.
pub fn format_report(summary: &ReportSummary) -> String {
    let mut output = String::new();

    writeln!(output, "WORK HISTORY").unwrap();
    writeln!(output, "────────────").unwrap();

    if summary.days.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "No workdays recorded yet.").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Hint: run 'wt start' to begin a workday.").unwrap();
        return output;
    }

    for day in &summary.days {
        let marker = if day.ended_at.is_none() {
            "  (active)"
        } else {
            ""
        };
        writeln!(
            output,
            "{}  {} - {}  {:>6.2}h{marker}",
            day.date,
            format_clock_time(Some(day.started_at)),
            format_clock_time(day.ended_at),
            day.hours,
        )
        .unwrap();
        for task in &day.tasks {
            writeln!(
                output,
                "    {}  {}",
                format_clock_time(Some(task.time)),
                task.text
            )
            .unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Total hours (all days): {:.2}",
        summary.total_hours
    )
    .unwrap();

    output
}

/// Runs the report command.
pub fn run<W: Write>(db: &Database, writer: &mut W, json: bool, now: DateTime<Utc>) -> Result<()> {
    let log = load_log(db);
    let days = presentation_order(log.days());
    let summary = build_summary(&days, now);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_report(&summary))?;
    }

    Ok(())
}
