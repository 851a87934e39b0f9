//! End command: close a workday.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};

use wt_core::{WorkdayId, format_clock_time, hours_for};
use wt_db::Database;

use super::util::{load_log, persist};

/// Ends the given day (the active day when `day` is omitted).
pub fn run<W: Write>(
    db: &mut Database,
    writer: &mut W,
    day: Option<&str>,
    now: DateTime<Utc>,
) -> Result<()> {
    let mut log = load_log(db);
    let id = match day {
        Some(raw) => WorkdayId::new(raw)?,
        None => match log.active_day() {
            Some(active) => active.id.clone(),
            None => bail!("no active workday to end"),
        },
    };

    let day = log.end(&id, now)?;
    let line = format!(
        "Ended workday {} at {}: {:.2}h",
        day.date,
        format_clock_time(day.ended_at),
        hours_for(day, now)
    );
    persist(db, &log);

    writeln!(writer, "{line}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use wt_core::StoreError;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, h, 0, 0).unwrap()
    }

    fn db_with_active_day() -> Database {
        let mut db = Database::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        crate::commands::start::run(&mut db, &mut Vec::new(), Some(date), at(9)).unwrap();
        db
    }

    #[test]
    fn end_closes_active_day_and_reports_hours() {
        let mut db = db_with_active_day();

        let mut output = Vec::new();
        run(&mut db, &mut output, None, at(17)).unwrap();

        let days = db.load().unwrap().unwrap();
        assert_eq!(days[0].ended_at, Some(at(17)));
        assert_eq!(days[0].cached_hours, Some(8.0));

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("8.00h"));
    }

    #[test]
    fn ending_twice_fails_with_already_ended() {
        let mut db = db_with_active_day();
        run(&mut db, &mut Vec::new(), None, at(17)).unwrap();

        let id = db.load().unwrap().unwrap()[0].id.clone();
        let err = run(&mut db, &mut Vec::new(), Some(id.as_str()), at(18)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::AlreadyEnded(id))
        );
        // ended_at unchanged by the rejected call
        assert_eq!(db.load().unwrap().unwrap()[0].ended_at, Some(at(17)));
    }

    #[test]
    fn ending_unknown_id_fails_with_not_found() {
        let mut db = Database::open_in_memory().unwrap();
        let err = run(&mut db, &mut Vec::new(), Some("missing"), at(17)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound(_))
        ));
    }
}
