//! Status command: show the active workday.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use wt_core::{format_clock_time, hours_for};
use wt_db::Database;

use super::util::load_log;

pub fn run<W: Write>(db: &Database, writer: &mut W, now: DateTime<Utc>) -> Result<()> {
    let log = load_log(db);

    let Some(day) = log.active_day() else {
        writeln!(writer, "No active workday.")?;
        writeln!(writer, "Hint: run 'wt start' to begin one.")?;
        return Ok(());
    };

    writeln!(writer, "Active workday: {} (id {})", day.date, day.id)?;
    writeln!(writer, "Started: {}", format_clock_time(Some(day.started_at)))?;
    writeln!(writer, "Hours so far: {:.2}", hours_for(day, now))?;

    if day.tasks.is_empty() {
        writeln!(writer, "No tasks recorded yet.")?;
    } else {
        writeln!(writer, "Tasks:")?;
        for task in &day.tasks {
            writeln!(
                writer,
                "- {}  {}",
                format_clock_time(Some(task.occurred_at)),
                task.text
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use insta::assert_snapshot;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, h, m, 0).unwrap()
    }

    #[test]
    fn status_without_active_day_shows_hint() {
        let db = Database::open_in_memory().unwrap();
        let mut output = Vec::new();
        run(&db, &mut output, at(9, 0)).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        No active workday.
        Hint: run 'wt start' to begin one.
        ");
    }

    #[test]
    fn status_shows_active_day_with_tasks_and_running_hours() {
        let mut db = Database::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        crate::commands::start::run(&mut db, &mut Vec::new(), Some(date), at(9, 0)).unwrap();
        crate::commands::task::run(&mut db, &mut Vec::new(), "write spec", at(9, 15)).unwrap();

        let mut output = Vec::new();
        run(&db, &mut output, at(12, 0)).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Active workday: 2024-01-10"));
        assert!(output.contains("Hours so far: 3.00"));
        assert!(output.contains("write spec"));
    }
}
