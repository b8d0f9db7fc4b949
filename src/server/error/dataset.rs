use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a reference file or statistical export.
///
/// Loaders log these and fall back to an empty result; they only escape when a caller asks for
/// the strict variant of a loader.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),
    #[error("Dataset file is empty: {0}")]
    Empty(PathBuf),
    #[error("Dataset file {file} is missing required column `{column}`")]
    MissingColumn { file: PathBuf, column: String },
    #[error("Dataset file {file}: cannot parse `{value}` in column `{column}` as a number")]
    InvalidNumber {
        file: PathBuf,
        column: String,
        value: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
