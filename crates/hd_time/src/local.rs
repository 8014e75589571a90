//! Local wall-clock birth time → universal time.
//!
//! A birth is recorded as a civil date, a wall-clock time and a zone. The
//! zone is either an IANA name (`Europe/Berlin`), resolved through the tz
//! database including historical DST rules, or a fixed `±HH:MM` offset.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::utc_time::UtcTime;

/// Time zone of a recorded birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthZone {
    /// IANA zone with historical offset rules.
    Named(Tz),
    /// Constant offset from UTC.
    Fixed(FixedOffset),
}

impl BirthZone {
    /// The UTC zone.
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }
}

impl Display for BirthZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(tz) => write!(f, "{}", tz.name()),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for BirthZone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Ok(Self::utc());
        }
        if s.starts_with('+') || s.starts_with('-') {
            return parse_fixed_offset(s).map(Self::Fixed);
        }
        s.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| TimeError::UnknownZone(s.to_string()))
    }
}

/// Parse `+HH`, `+HH:MM` or `+HHMM` (and the `-` forms).
fn parse_fixed_offset(s: &str) -> Result<FixedOffset, TimeError> {
    let malformed = || TimeError::UnknownZone(s.to_string());
    let sign = if s.starts_with('-') { -1 } else { 1 };
    let body = &s[1..];
    let (hh, mm) = match body.split_once(':') {
        Some((h, m)) => (h, m),
        None if body.len() == 4 => body.split_at_checked(2).ok_or_else(malformed)?,
        None => (body, "0"),
    };
    let digits = |f: &str| !f.is_empty() && f.len() <= 2 && f.bytes().all(|b| b.is_ascii_digit());
    if !digits(hh) || !digits(mm) {
        return Err(malformed());
    }
    let hours: i32 = hh.parse().map_err(|_| malformed())?;
    let minutes: i32 = mm.parse().map_err(|_| malformed())?;
    if hours > 23 {
        return Err(TimeError::OutOfRange("zone offset hours"));
    }
    if minutes > 59 {
        return Err(TimeError::OutOfRange("zone offset minutes"));
    }
    let secs = sign * (hours * 3600 + minutes * 60);
    FixedOffset::east_opt(secs).ok_or(TimeError::OutOfRange("zone offset"))
}

/// A birth moment as recorded: civil date, wall-clock time, zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub zone: BirthZone,
}

impl BirthInput {
    pub fn new(date: NaiveDate, time: NaiveTime, zone: BirthZone) -> Self {
        Self { date, time, zone }
    }

    /// Parse `YYYY-MM-DD`, `HH:MM[:SS]` and a zone string.
    pub fn parse(date: &str, time: &str, zone: &str) -> Result<Self, TimeError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
            TimeError::Malformed {
                field: "date",
                value: date.to_string(),
            }
        })?;
        let time = parse_wall_clock(time)?;
        let zone = zone.parse()?;
        Ok(Self { date, time, zone })
    }

    /// Resolve the wall-clock reading to a UTC instant.
    ///
    /// A reading inside a DST gap is rejected. A reading inside a DST fold
    /// resolves to the earlier of the two instants.
    pub fn to_utc_datetime(&self) -> Result<DateTime<Utc>, TimeError> {
        let naive = NaiveDateTime::new(self.date, self.time);
        match self.zone {
            BirthZone::Named(tz) => resolve_local(&tz, &naive),
            BirthZone::Fixed(offset) => resolve_local(&offset, &naive),
        }
    }

    /// Resolve to the workspace's [`UtcTime`].
    pub fn to_utc(&self) -> Result<UtcTime, TimeError> {
        Ok(utc_time_from_chrono(&self.to_utc_datetime()?))
    }

    /// Primary instant as a UT Julian Day.
    pub fn jd_ut(&self) -> Result<f64, TimeError> {
        Ok(self.to_utc()?.to_jd_ut())
    }
}

fn parse_wall_clock(time: &str) -> Result<NaiveTime, TimeError> {
    let t = time.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| TimeError::Malformed {
            field: "time",
            value: time.to_string(),
        })
}

fn resolve_local<Z: TimeZone>(zone: &Z, naive: &NaiveDateTime) -> Result<DateTime<Utc>, TimeError> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => {
            tracing::warn!(local = %naive, "ambiguous local time, using the earlier instant");
            Ok(earlier.with_timezone(&Utc))
        }
        LocalResult::None => Err(TimeError::NonexistentLocalTime(naive.to_string())),
    }
}

/// Convert a chrono UTC timestamp into [`UtcTime`].
pub fn utc_time_from_chrono(dt: &DateTime<Utc>) -> UtcTime {
    UtcTime::new(
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_zone_applies_summer_offset() {
        let input = BirthInput::parse("1990-07-01", "14:00", "Europe/Berlin").unwrap();
        let utc = input.to_utc().unwrap();
        assert_eq!((utc.year, utc.month, utc.day), (1990, 7, 1));
        assert_eq!((utc.hour, utc.minute), (12, 0));
    }

    #[test]
    fn fixed_offset_with_minutes() {
        let input = BirthInput::parse("2001-03-15", "05:30:00", "+05:30").unwrap();
        let utc = input.to_utc().unwrap();
        assert_eq!((utc.day, utc.hour, utc.minute), (15, 0, 0));
    }

    #[test]
    fn negative_compact_offset_crosses_midnight() {
        let input = BirthInput::parse("2001-03-15", "20:00", "-0800").unwrap();
        let utc = input.to_utc().unwrap();
        assert_eq!((utc.day, utc.hour), (16, 4));
    }

    #[test]
    fn utc_alias() {
        let input = BirthInput::parse("2000-01-01", "12:00", "UTC").unwrap();
        assert_eq!(input.jd_ut().unwrap(), 2_451_545.0);
    }

    #[test]
    fn spring_forward_gap_is_rejected() {
        // US clocks jumped from 02:00 to 03:00 on 2021-03-14.
        let input = BirthInput::parse("2021-03-14", "02:30", "America/New_York").unwrap();
        assert!(matches!(
            input.to_utc(),
            Err(TimeError::NonexistentLocalTime(_))
        ));
    }

    #[test]
    fn fall_back_fold_uses_earlier_instant() {
        // 01:30 happened twice on 2021-11-07 in New York (EDT then EST).
        let input = BirthInput::parse("2021-11-07", "01:30", "America/New_York").unwrap();
        let utc = input.to_utc().unwrap();
        assert_eq!((utc.hour, utc.minute), (5, 30));
    }

    #[test]
    fn malformed_inputs() {
        assert!(matches!(
            BirthInput::parse("1990-13-01", "10:00", "UTC"),
            Err(TimeError::Malformed { field: "date", .. })
        ));
        assert!(matches!(
            BirthInput::parse("1990-01-01", "25:00", "UTC"),
            Err(TimeError::Malformed { field: "time", .. })
        ));
        assert!(matches!(
            BirthInput::parse("1990-01-01", "10:00", "Mars/Olympus"),
            Err(TimeError::UnknownZone(_))
        ));
        assert!(matches!(
            BirthInput::parse("1990-01-01", "10:00", "+05:75"),
            Err(TimeError::OutOfRange(_))
        ));
        assert!(matches!(
            BirthInput::parse("1990-01-01", "10:00", "+999999"),
            Err(TimeError::UnknownZone(_))
        ));
        assert!(matches!(
            BirthInput::parse("1990-01-01", "10:00", "+99"),
            Err(TimeError::OutOfRange("zone offset hours"))
        ));
        for zone in ["+1é1", "+é", "-1:é", "+", "+:30", "+1 :30", "+-5"] {
            assert!(
                matches!(
                    BirthInput::parse("1990-01-01", "10:00", zone),
                    Err(TimeError::UnknownZone(_))
                ),
                "{zone}"
            );
        }
    }

    #[test]
    fn offset_extremes_are_accepted() {
        let east = BirthInput::parse("2001-03-15", "12:00", "+14").unwrap();
        assert_eq!(east.to_utc().unwrap().hour, 22);
        let east = BirthInput::parse("2001-03-15", "12:00", "+23:59").unwrap();
        assert_eq!(east.to_utc().unwrap().hour, 12);
        let west = BirthInput::parse("2001-03-15", "12:00", "-2359").unwrap();
        assert_eq!(west.to_utc().unwrap().day, 16);
    }

    #[test]
    fn zone_display() {
        let zone: BirthZone = "Asia/Kolkata".parse().unwrap();
        assert_eq!(zone.to_string(), "Asia/Kolkata");
    }
}
