// User Intake - CSV Exporter
// Serializes a record set to CSV with a stable, sorted union of expense
// category columns. Output is a pure function of the input set, so repeated
// exports of the same records are byte-identical.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::{UserRecord, FIXED_COLUMNS};

/// Default output filename when the caller does not supply one.
pub const DEFAULT_EXPORT_FILE: &str = "user_data.csv";

/// Header for a record set: the fixed columns followed by the
/// lexicographically ascending union of every expense category present.
pub fn export_header(records: &[UserRecord]) -> Vec<String> {
    // BTreeSet gives the sorted union directly.
    let categories: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.expenses.keys().map(String::as_str))
        .collect();

    FIXED_COLUMNS
        .iter()
        .copied()
        .chain(categories)
        .map(str::to_string)
        .collect()
}

/// Write the record set to `path` (default `user_data.csv`) as UTF-8 CSV:
/// header row, then one row per record, with an empty cell wherever a record
/// lacks a header category. Returns the absolute path of the written file.
pub fn export_csv(records: &[UserRecord], path: Option<&Path>) -> Result<PathBuf> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_EXPORT_FILE));
    let header = export_header(records);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&header)?;

    for record in records {
        let row = record.to_row();
        let cells: Vec<&str> = header
            .iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&cells)?;
    }

    writer.flush()?;
    Ok(std::fs::canonicalize(path)?)
}
