//! Delete command: remove a workday record.

use std::io::Write;

use anyhow::Result;

use wt_core::WorkdayId;
use wt_db::Database;

use super::util::{load_log, persist};

/// Deletes the day with the given ID. Idempotent: an unknown ID is a no-op.
pub fn run<W: Write>(db: &mut Database, writer: &mut W, day: &str) -> Result<()> {
    let mut log = load_log(db);
    let id = WorkdayId::new(day)?;

    if log.delete(&id) {
        persist(db, &log);
        writeln!(writer, "Deleted workday {id}")?;
    } else {
        writeln!(writer, "No workday with id {id}; nothing to delete")?;
    }
    Ok(())
}
