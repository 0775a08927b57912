use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::models::{SourceRow, TransactionRecord};
use crate::source::errors::SourceError;

/// Reads every data row of a point-of-sale CSV export.
///
/// The header must name all destination columns; their order in the file and
/// any extra columns do not matter. Values are read as-is, without trimming.
///
/// # Errors
/// Returns `SourceError` if the file cannot be opened, a required column is
/// absent, or a row cannot be deserialized.
pub fn read_rows(path: &Path) -> Result<Vec<SourceRow>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    check_required_columns(path, &headers)?;

    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        let mut row: SourceRow = record.deserialize(Some(&headers))?;
        row.line = record.position().map(|position| position.line()).unwrap_or_default();
        rows.push(row);
    }

    debug!("Read {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

fn check_required_columns(path: &Path, headers: &StringRecord) -> Result<(), SourceError> {
    for column in TransactionRecord::COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(SourceError::MissingColumn { path: path.to_path_buf(), column });
        }
    }

    Ok(())
}
