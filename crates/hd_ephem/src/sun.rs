//! Apparent geocentric longitude of the Sun.
//!
//! Low-accuracy solar theory from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 25: geometric mean longitude plus equation of center, corrected
//! for aberration and nutation. Accuracy about 0.01 degree.

use hd_core::normalize_360;

/// Apparent ecliptic longitude of the Sun in degrees [0, 360), referred to
/// the true equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let true_longitude = l0 + c;
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(true_longitude - 0.00569 - 0.00478 * omega.sin())
}
