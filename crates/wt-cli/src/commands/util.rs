//! Shared load/persist glue between the commands and the storage collaborator.

use wt_core::WorkdayLog;
use wt_db::Database;

/// Loads the workday log from storage.
///
/// A missing blob or a read failure degrades to an empty log rather than
/// blocking startup; failures are reported, not propagated.
pub fn load_log(db: &Database) -> WorkdayLog {
    match db.load() {
        Ok(Some(days)) => WorkdayLog::from_days(days),
        Ok(None) => WorkdayLog::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load workday collection, starting empty");
            eprintln!("warning: could not read stored workdays ({e}); starting with an empty history");
            WorkdayLog::default()
        }
    }
}

/// Persists the log after a mutation, fire-and-forget.
///
/// A write failure is reported but never rolls back the in-memory mutation:
/// the operation that caused the save still counts as succeeded.
pub fn persist(db: &mut Database, log: &WorkdayLog) {
    if let Err(e) = db.save(log.days()) {
        tracing::warn!(error = %e, "failed to persist workday collection");
        eprintln!("warning: could not save workdays ({e}); changes apply to this session only");
    }
}
