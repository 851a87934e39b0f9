//! Export command: write the work summary document artifact.
//!
//! The summary snapshot taken here is a value copy, immune to later log
//! mutations. The artifact is written atomically (temp file + rename) so a
//! failure never leaves a partial document accessible.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use thiserror::Error;

use wt_core::{ReportSummary, build_summary, format_clock_time};
use wt_db::Database;

use super::report::presentation_order;
use super::util::load_log;

const DEFAULT_OUTPUT: &str = "work-summary.txt";

/// Export failures, surfaced to the user as a single message.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write summary document to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders the summary into the printable document form.
pub fn render_document(summary: &ReportSummary) -> String {
    let mut doc = String::new();

    writeln!(doc, "WORKTRACKER SUMMARY").unwrap();
    writeln!(doc, "───────────────────").unwrap();
    writeln!(doc, "Total hours (all days): {:.2}", summary.total_hours).unwrap();

    for day in &summary.days {
        writeln!(doc).unwrap();
        writeln!(doc, "{}", day.date).unwrap();
        writeln!(
            doc,
            "  Start: {}  End: {}  Hours: {:.2}",
            format_clock_time(Some(day.started_at)),
            format_clock_time(day.ended_at),
            day.hours
        )
        .unwrap();
        if !day.tasks.is_empty() {
            writeln!(doc, "  Tasks:").unwrap();
            for task in &day.tasks {
                writeln!(
                    doc,
                    "    {}  {}",
                    format_clock_time(Some(task.time)),
                    task.text
                )
                .unwrap();
            }
        }
    }

    doc
}

/// Writes the document atomically: temp file first, then rename.
///
/// On failure the temp file is removed, leaving no partial artifact.
fn write_document(path: &Path, document: &str) -> Result<(), ExportError> {
    let tmp_path = path.with_extension("tmp");

    let result = fs::write(&tmp_path, document).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(ExportError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Runs the export command.
pub fn run<W: Write>(
    db: &Database,
    writer: &mut W,
    output: Option<&Path>,
    now: DateTime<Utc>,
) -> Result<()> {
    let log = load_log(db);
    let days = presentation_order(log.days());
    let summary = build_summary(&days, now);

    let path = output.map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), Path::to_path_buf);
    let document = render_document(&summary);
    write_document(&path, &document)?;

    writeln!(writer, "Exported work summary to {}", path.display())?;
    Ok(())
}
