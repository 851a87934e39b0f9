//! Task command: append a task note to the active workday.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};

use wt_core::format_clock_time;
use wt_db::Database;

use super::util::{load_log, persist};

pub fn run<W: Write>(
    db: &mut Database,
    writer: &mut W,
    text: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    let mut log = load_log(db);
    let Some(active) = log.active_day() else {
        bail!("no active workday; run 'wt start' first");
    };
    let id = active.id.clone();

    log.add_task(&id, text, now)?;
    persist(db, &log);

    writeln!(
        writer,
        "Added task at {}: {}",
        format_clock_time(Some(now)),
        text.trim()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use wt_core::{StoreError, ValidationError};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, h, m, 0).unwrap()
    }

    fn db_with_active_day() -> Database {
        let mut db = Database::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        crate::commands::start::run(&mut db, &mut Vec::new(), Some(date), at(9, 0)).unwrap();
        db
    }

    #[test]
    fn task_appends_to_active_day() {
        let mut db = db_with_active_day();

        run(&mut db, &mut Vec::new(), "write spec", at(9, 15)).unwrap();
        run(&mut db, &mut Vec::new(), "review", at(11, 0)).unwrap();

        let days = db.load().unwrap().unwrap();
        assert_eq!(days[0].tasks.len(), 2);
        assert_eq!(days[0].tasks[0].text, "write spec");
        assert_eq!(days[0].tasks[1].text, "review");
    }

    #[test]
    fn blank_task_is_rejected_without_mutation() {
        let mut db = db_with_active_day();

        let err = run(&mut db, &mut Vec::new(), "   ", at(9, 15)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::Validation(ValidationError::Empty {
                field: "task text"
            }))
        );
        assert!(db.load().unwrap().unwrap()[0].tasks.is_empty());
    }

    #[test]
    fn task_without_active_day_fails() {
        let mut db = Database::open_in_memory().unwrap();
        let err = run(&mut db, &mut Vec::new(), "note", at(9, 15)).unwrap_err();
        assert!(err.to_string().contains("no active workday"));
    }
}
