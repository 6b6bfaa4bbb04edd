use thiserror::Error;

/// Errors reported by a [`ParcelSink`][crate::ParcelSink].
#[derive(Debug, Error)]
pub enum ParcelError {
    #[error("parcel sink error: {0}")]
    Sink(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParcelResult<T> = Result<T, ParcelError>;
