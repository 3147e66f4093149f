use std::path::PathBuf;

use thiserror::Error;

/// Structural failures while reading the contact export. These abort the run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("open csv {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("read header of {source_name}: {source}")]
    Header {
        source_name: String,
        #[source]
        source: csv::Error,
    },
    #[error("{0} has no header row")]
    MissingHeader(String),
    #[error("read record of {source_name} at line {line}: {source}")]
    Record {
        source_name: String,
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("record of {source_name} at line {line} has {found} fields, header has {expected}")]
    RecordLength {
        source_name: String,
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
