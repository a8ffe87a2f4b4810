//! CSV export of harvested votes.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::types::VoteEntry;

/// Fixed column names of the export.
pub const HEADERS: [&str; 5] = ["Column 1", "Column 2", "Column 3", "Column 4", "Column 5"];

/// One CSV row.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    /// `[identifier (tally)](link)`
    summary: String,
    status: &'static str,
    description: &'a str,
    bill_reference: &'a str,
    date: &'a str,
}

impl<'a> From<&'a VoteEntry> for ExportRow<'a> {
    fn from(entry: &'a VoteEntry) -> Self {
        Self {
            summary: entry.summary(),
            status: entry.status.as_str(),
            description: &entry.description,
            bill_reference: &entry.bill_reference,
            date: &entry.date,
        }
    }
}

/// Write the header and one row per entry, in order.
///
/// The header is written even when there are no entries.
pub fn export<W: Write>(entries: &[VoteEntry], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(HEADERS)?;
    for entry in entries {
        writer.serialize(ExportRow::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Export to a file, replacing it if it exists.
///
/// # Returns
/// Path of the written file
pub fn save_csv(entries: &[VoteEntry], path: &Path) -> Result<PathBuf> {
    let file = File::create(path)?;
    export(entries, file)?;
    tracing::info!(path = %path.display(), rows = entries.len(), "CSV written");
    Ok(path.to_path_buf())
}

/// Export to an in-memory string.
pub fn to_csv_string(entries: &[VoteEntry]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    export(entries, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
