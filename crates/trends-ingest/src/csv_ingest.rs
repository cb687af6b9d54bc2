//! CSV reading with canonical headers and surrogate key assignment.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use trends_model::{EXPECTED_COLUMNS, NormalizedRecord, SourceRecord};

use crate::canonical::canonical_header;
use crate::error::{IngestError, Result};

/// Reads the transaction file into normalized records.
///
/// Headers are rewritten to their canonical names (alias-resolved) before
/// deserialization, the expected column set is verified, and each record gets
/// a zero-based `transaction_id` from its position in the input. Any failure
/// aborts with no partial output.
pub fn read_transactions(path: &Path) -> Result<Vec<NormalizedRecord>> {
    if !path.exists() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| malformed(path, source))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| malformed(path, source))?
        .iter()
        .map(canonical_header)
        .collect();
    for column in EXPECTED_COLUMNS {
        if !headers.iter().any(|header| header.as_str() == *column) {
            return Err(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    reader.set_headers(StringRecord::from(headers));

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<SourceRecord>().enumerate() {
        let source = row.map_err(|source| malformed(path, source))?;
        records.push(NormalizedRecord::new(idx as i64, source));
    }

    debug!(
        path = %path.display(),
        record_count = records.len(),
        "input normalized"
    );
    Ok(records)
}

fn malformed(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Malformed {
        path: path.to_path_buf(),
        source,
    }
}
