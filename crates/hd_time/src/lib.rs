//! Time handling for chart computation.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions
//! - Local wall-clock birth time → UTC resolution (IANA zones or fixed offsets)
//! - A ΔT approximation for UT → TT conversion
//! - `UtcTime`, the calendar form of a universal instant

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod local;
pub mod utc_time;

pub use delta_t::{decimal_year, delta_t_seconds, ut_to_tt_jd};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use local::{BirthInput, BirthZone, utc_time_from_chrono};
pub use utc_time::UtcTime;
