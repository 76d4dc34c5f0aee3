//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Empty or whitespace-only input
    #[error("Empty coordinate")]
    Empty,

    /// Invalid DMS format
    #[error("Invalid DMS format: {0}")]
    InvalidDms(String),

    /// Invalid hemisphere letter
    #[error("Invalid hemisphere: {0} (expected N, S, E or W)")]
    InvalidHemisphere(String),

    /// Invalid coordinate values
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Error code for integration with muralmap-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Empty input
    Empty = 10000,
    /// Invalid DMS format
    InvalidDms = 10001,
    /// Invalid coordinate values
    InvalidCoordinate = 10002,
    /// Invalid hemisphere letter
    InvalidHemisphere = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::Empty => GeoErrorCode::Empty,
            GeoError::InvalidDms(_) => GeoErrorCode::InvalidDms,
            GeoError::InvalidHemisphere(_) => GeoErrorCode::InvalidHemisphere,
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
        }
    }
}
