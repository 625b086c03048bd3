use std::path::PathBuf;

use thiserror::Error;

/// Error types that can occur while loading, transforming, splitting or writing a dataset
///
/// # Variants
///
/// - `FileNotFound` - the input file does not exist
/// - `ParseError` - the input is not well-formed CSV (ragged rows, bad UTF-8, missing header)
/// - `SchemaMismatch` - an expected column is absent, duplicated, or has the wrong type or length
/// - `KeyNotFound` - a categorical value is outside the label map
/// - `InputValidationError` - a parameter does not meet the expected range (e.g. `test_size`, `k`)
/// - `Io` - any other file system error while reading or writing
/// - `Json` - the configuration file could not be deserialized
#[derive(Debug, Error)]
pub enum DataError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("Key not found: '{0}' is not in the label map")]
    KeyNotFound(String),
    #[error("Input validation error: {0}")]
    InputValidationError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => DataError::Io(e),
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => {
                let line = pos.map(|p| p.line()).unwrap_or_default();
                DataError::ParseError(format!(
                    "record on line {} has {} fields, expected {}",
                    line, len, expected_len
                ))
            }
            csv::ErrorKind::Utf8 { pos, err } => {
                let line = pos.map(|p| p.line()).unwrap_or_default();
                DataError::ParseError(format!("invalid UTF-8 on line {}: {}", line, err))
            }
            other => DataError::ParseError(format!("{:?}", other)),
        }
    }
}

/// Shorthand for results carrying a [`DataError`]
pub type Result<T> = std::result::Result<T, DataError>;
