//! Error types for pd-output.

use pd_parcel::ParcelError;
use thiserror::Error;

/// Errors that can occur when writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

impl From<OutputError> for ParcelError {
    fn from(e: OutputError) -> Self {
        match e {
            OutputError::Io(io) => ParcelError::Io(io),
            OutputError::Csv(csv) => ParcelError::Sink(csv.to_string()),
        }
    }
}
