use thiserror::Error;

/// The two user-facing failure conditions of a location producer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
