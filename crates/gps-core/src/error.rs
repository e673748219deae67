//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `GpsError` as one variant
//! via `#[from]` where configuration problems can surface.

use thiserror::Error;

/// The base error type for `gps-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GpsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gps-core`.
pub type GpsResult<T> = Result<T, GpsError>;
