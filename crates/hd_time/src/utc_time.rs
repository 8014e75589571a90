//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the canonical universal-time representation handed to the
//! rest of the workspace. Julian Days produced here are on the UT scale.

use serde::Serialize;

use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a Julian Day on the UT scale.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a UT Julian Day back to a calendar time.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Round to whole seconds for display; JD round trips leave ~1e-5 s noise.
        let mut total = (self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second)
            .round() as u32;
        let (mut year, mut month, mut day) = (self.year, self.month, self.day);
        if total >= SECONDS_PER_DAY as u32 {
            total -= SECONDS_PER_DAY as u32;
            let (y, m, d) = jd_to_calendar(calendar_to_jd(year, month, day as f64) + 1.0);
            (year, month, day) = (y, m, d.round() as u32);
        }
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            year,
            month,
            day,
            total / 3600,
            total % 3600 / 60,
            total % 60
        )
    }
}
