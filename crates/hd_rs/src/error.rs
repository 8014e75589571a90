//! Top-level error type.

use hd_chart::{ChartError, CrossTableError};
use hd_core::EphemerisError;
use hd_search::{SearchError, UnresolvedReason};
use hd_time::TimeError;
use thiserror::Error;

/// Everything that can stop a chart computation.
///
/// There are no partial results: a request yields a full report or one of
/// these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HdError {
    /// Birth date, time or zone does not denote a real moment.
    #[error("invalid time input: {0}")]
    InvalidTimeInput(#[from] TimeError),
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// The design search left its safety bounds.
    #[error(
        "design epoch unresolved: {reason} after {iterations} iterations \
         (residual {residual_deg:.4} deg)"
    )]
    DesignEpochUnresolved {
        reason: UnresolvedReason,
        iterations: u32,
        residual_deg: f64,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("cross table: {0}")]
    CrossTable(#[from] CrossTableError),
    #[error("chart error: {0}")]
    Chart(ChartError),
    /// Search failure without a dedicated variant here.
    #[error("design search: {0}")]
    Search(#[source] SearchError),
}

impl From<SearchError> for HdError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidTimeInput(e) => Self::InvalidTimeInput(e),
            SearchError::Ephemeris(e) => Self::Ephemeris(e),
            SearchError::DesignEpochUnresolved {
                reason,
                iterations,
                residual_deg,
            } => Self::DesignEpochUnresolved {
                reason,
                iterations,
                residual_deg,
            },
            SearchError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            other => Self::Search(other),
        }
    }
}

impl From<ChartError> for HdError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::Ephemeris(e) => Self::Ephemeris(e),
            other => Self::Chart(other),
        }
    }
}
