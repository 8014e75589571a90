//! ΔT = TT − UT approximation.
//!
//! Polynomial fits by Espenak & Meeus (NASA Five Millennium Canon), limited
//! to the ranges relevant for birth charts (1800–2150) with the long-term
//! parabola outside that span. Accuracy is a few seconds in the 20th
//! century, which is far below the angular resolution of the wheel.

use crate::julian::{SECONDS_PER_DAY, jd_to_calendar};

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < 1800.0 || y >= 2150.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 1860.0 {
        let t = y - 1800.0;
        return 13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7);
    }
    if y < 1900.0 {
        let t = y - 1860.0;
        return 7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0;
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        return -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4);
    }
    if y < 1941.0 {
        let t = y - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3);
    }
    if y < 1961.0 {
        let t = y - 1950.0;
        return 29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0;
    }
    if y < 1986.0 {
        let t = y - 1975.0;
        return 45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0;
    }
    if y < 2005.0 {
        let t = y - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5);
    }
    if y < 2050.0 {
        let t = y - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t.powi(2);
    }
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
}

/// Decimal year for a Julian Day (month midpoint convention).
pub fn decimal_year(jd: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd);
    year as f64 + (month as f64 - 0.5) / 12.0
}

/// Convert a UT Julian Day to a TT Julian Day.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_about_64_seconds() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_1975_about_45_seconds() {
        let dt = delta_t_seconds(1975.0);
        assert!((dt - 45.45).abs() < 0.01, "ΔT(1975) = {dt}");
    }

    #[test]
    fn continuous_at_segment_joins() {
        for &y in &[1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_seconds(y - 1e-6);
            let after = delta_t_seconds(y);
            assert!(
                (before - after).abs() < 1.0,
                "ΔT jump at {y}: {before} vs {after}"
            );
        }
    }

    #[test]
    fn tt_is_later_than_ut_in_modern_era() {
        let jd = 2_451_545.0;
        let tt = ut_to_tt_jd(jd);
        let secs = (tt - jd) * SECONDS_PER_DAY;
        assert!((secs - 63.8).abs() < 1.0, "ΔT = {secs}");
    }
}
