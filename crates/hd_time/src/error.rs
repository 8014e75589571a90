//! Error types for time input parsing and conversion.

use thiserror::Error;

/// Errors from turning a local wall-clock birth time into a universal instant.
///
/// Every variant is an "invalid time input" condition: the caller supplied a
/// date/time/zone combination that does not denote a real moment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date or time text could not be parsed.
    #[error("malformed {field}: {value:?}")]
    Malformed { field: &'static str, value: String },
    /// Zone is neither an IANA name nor a `±HH:MM` offset.
    #[error("unknown time zone: {0:?}")]
    UnknownZone(String),
    /// Local time falls in a transition gap (e.g. spring-forward).
    #[error("local time {0} does not exist in the given zone")]
    NonexistentLocalTime(String),
    /// A numeric field lies outside its calendar range.
    #[error("{0} out of range")]
    OutOfRange(&'static str),
}
