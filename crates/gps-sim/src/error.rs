use std::io;

use gps_core::GpsError;
use gps_source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulator configuration error: {0}")]
    Config(#[from] GpsError),

    #[error("update timer could not be scheduled: {0}")]
    TimerUnavailable(#[source] io::Error),

    #[error("simulator has already been started")]
    AlreadyStarted,
}

pub type SimResult<T> = Result<T, SimError>;

/// Seen through `LocationProducer`, every simulator failure means the source
/// cannot deliver samples.
impl From<SimError> for SourceError {
    fn from(e: SimError) -> Self {
        SourceError::Unavailable(e.to_string())
    }
}
