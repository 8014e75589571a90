//! Error type for epoch resolution.

use std::fmt::{Display, Formatter};

use hd_core::EphemerisError;
use hd_time::TimeError;
use thiserror::Error;

/// Why the design search gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnresolvedReason {
    /// The guess drifted further back than `max_backward_days`.
    BackwardBound,
    /// `max_iterations` steps ran without reaching the tolerance.
    IterationLimit,
    /// The configured wall-clock deadline passed.
    Deadline,
}

impl Display for UnresolvedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::BackwardBound => "guess exceeded the backward bound",
            Self::IterationLimit => "iteration limit reached",
            Self::Deadline => "deadline passed",
        })
    }
}

/// Errors from [`resolve_epochs`](crate::resolve_epochs) and
/// [`design_jd`](crate::design_jd).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The birth date, time or zone does not denote a real moment.
    #[error("invalid time input: {0}")]
    InvalidTimeInput(#[from] TimeError),
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// The design search stopped outside its safety bounds.
    #[error(
        "design epoch unresolved: {reason} after {iterations} iterations \
         (residual {residual_deg:.4} deg)"
    )]
    DesignEpochUnresolved {
        reason: UnresolvedReason,
        iterations: u32,
        residual_deg: f64,
    },
    #[error("invalid search configuration: {0}")]
    InvalidConfig(&'static str),
}
