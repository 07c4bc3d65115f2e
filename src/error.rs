use thiserror::Error;

/// Top-level failures in the glue layer (file access, configuration).
///
/// Per-row problems in the input CSVs are not errors at this level; bad
/// rows are rejected or defaulted during parsing and the run continues.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single CSV row was rejected at ingestion.
///
/// Rejected rows never enter the analysis; they are logged and skipped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("row has {found} fields, expected at least {expected}")]
    TooFewFields { expected: usize, found: usize },

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}
