//! Student roster stored as a JSON array
//!
//! A flat list of `StudentRecord`s persisted to a single file. Loading
//! validates the stored shape before any record is handed out.

mod schema;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use schema::{MARK_COUNT, Violation, validate};

/// One student: name with initials, group number and five marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub group_number: String,
    pub performance: [i64; MARK_COUNT],
}

impl StudentRecord {
    pub fn new(
        name: impl Into<String>,
        group_number: impl Into<String>,
        performance: [i64; MARK_COUNT],
    ) -> Self {
        Self {
            name: name.into(),
            group_number: group_number.into(),
            performance,
        }
    }

    pub fn has_mark(&self, mark: i64) -> bool {
        self.performance.contains(&mark)
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}", describe_violation(.0))]
    Validation(Violation),
}

fn describe_violation(violation: &Violation) -> String {
    match violation.index {
        Some(i) => format!("validation failed for record {}: {}", i, violation.message),
        None => format!("validation failed: {}", violation.message),
    }
}

/// Load all records from `path`. A missing file is an empty roster.
pub fn load_all(path: &Path) -> Result<Vec<StudentRecord>, RosterError> {
    if !path.exists() {
        log::debug!("roster '{}' not found, starting empty", path.display());
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    validate(&value).map_err(RosterError::Validation)?;

    let records: Vec<StudentRecord> = serde_json::from_value(value)?;
    log::debug!("loaded {} records from '{}'", records.len(), path.display());
    Ok(records)
}

/// Persist all records to `path` as 4-space indented JSON, non-ASCII kept verbatim.
pub fn save_all(path: &Path, records: &[StudentRecord]) -> Result<(), RosterError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    buf.push(b'\n');

    let mut file = fs::File::create(path)?;
    file.write_all(&buf)?;
    Ok(())
}

/// Append `record` and restore alphabetical order by name.
///
/// The sort is stable, so records with equal names keep insertion order.
pub fn append_and_sort(
    mut records: Vec<StudentRecord>,
    record: StudentRecord,
) -> Vec<StudentRecord> {
    records.push(record);
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}

/// Records holding at least one occurrence of `mark`, in their stored order.
pub fn find_by_mark(records: &[StudentRecord], mark: i64) -> Vec<&StudentRecord> {
    records.iter().filter(|r| r.has_mark(mark)).collect()
}
