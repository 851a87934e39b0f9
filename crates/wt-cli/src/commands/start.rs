//! Start command: open a new workday.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};

use wt_core::format_clock_time;
use wt_db::Database;

use super::util::{load_log, persist};

/// Starts a workday for `date` (today when omitted).
pub fn run<W: Write>(
    db: &mut Database,
    writer: &mut W,
    date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> Result<()> {
    let mut log = load_log(db);
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let day = log.start(date, now)?;
    let id = day.id.clone();
    let started = format_clock_time(Some(day.started_at));
    persist(db, &log);

    writeln!(writer, "Started workday {date} at {started} (id {id})")?;
    Ok(())
}
