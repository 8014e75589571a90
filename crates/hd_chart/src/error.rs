//! Error types for chart construction.

use hd_core::EphemerisError;
use thiserror::Error;

/// Errors from building activation sets.
///
/// Classification itself is total; only ephemeris access can fail.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the ephemeris collaborator.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// A longitude handed to the wheel was NaN or infinite.
    #[error("longitude must be finite, got {0}")]
    NonFiniteLongitude(f64),
}

/// Errors from loading a cross-description table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CrossTableError {
    #[error("cross table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cross table entry has gate {0} outside 1..=64")]
    InvalidGate(u8),
}
