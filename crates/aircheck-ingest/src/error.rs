use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("no header row found in {path} (looked for a '{marker}' column)")]
    HeaderNotFound { path: PathBuf, marker: String },
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
    #[error("no usable spot rows in {path}")]
    Empty { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
