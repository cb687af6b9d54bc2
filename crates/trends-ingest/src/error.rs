use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading and normalizing the input file. All are fatal and
/// occur before any database work.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("{}: missing expected column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("{}: malformed input", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
