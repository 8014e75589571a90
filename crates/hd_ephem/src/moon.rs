//! Apparent geocentric longitude of the Moon.
//!
//! Truncated ELP-2000/82 main problem as tabulated by Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 47: the 34 largest periodic terms of
//! Table 47.A plus the Venus, Jupiter and flattening additive terms.
//! Accuracy is a few hundredths of a degree.

use hd_core::normalize_360;

use crate::nutation::nutation_longitude_deg;

/// Periodic terms for longitude: `[D, M, M', F, Σl coefficient (1e-6 deg)]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 34] = [
    [0,  0,  1,  0, 6_288_774],
    [2,  0, -1,  0, 1_274_027],
    [2,  0,  0,  0,   658_314],
    [0,  0,  2,  0,   213_618],
    [0,  1,  0,  0,  -185_116],
    [0,  0,  0,  2,  -114_332],
    [2,  0, -2,  0,    58_793],
    [2, -1, -1,  0,    57_066],
    [2,  0,  1,  0,    53_322],
    [2, -1,  0,  0,    45_758],
    [0,  1, -1,  0,   -40_923],
    [1,  0,  0,  0,   -34_720],
    [0,  1,  1,  0,   -30_383],
    [2,  0,  0, -2,    15_327],
    [0,  0,  1,  2,   -12_528],
    [0,  0,  1, -2,    10_980],
    [4,  0, -1,  0,    10_675],
    [0,  0,  3,  0,    10_034],
    [4,  0, -2,  0,     8_548],
    [2,  1, -1,  0,    -7_888],
    [2,  1,  0,  0,    -6_766],
    [1,  0, -1,  0,    -5_163],
    [1,  1,  0,  0,     4_987],
    [2, -1,  1,  0,     4_036],
    [2,  0,  2,  0,     3_994],
    [4,  0,  0,  0,     3_861],
    [2,  0, -3,  0,     3_665],
    [0,  1, -2,  0,    -2_689],
    [2,  0, -1,  2,    -2_602],
    [2, -1, -2,  0,     2_390],
    [1,  0,  1,  0,    -2_348],
    [2, -2,  0,  0,     2_236],
    [0,  1,  2,  0,    -2_120],
    [0,  2,  0,  0,    -2_069],
];

/// Apparent ecliptic longitude of the Moon in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let mut sigma_l = 0.0_f64;
    for row in &LONGITUDE_TERMS {
        let arg = (row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * mp + row[3] as f64 * f)
            .to_radians();
        let eccentricity = match row[1].abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sigma_l += row[4] as f64 * eccentricity * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    normalize_360(lp + sigma_l / 1_000_000.0 + nutation_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_47a_moon() {
        // 1992 Apr 12.0 TD: apparent λ = 133.167265°
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let lon = moon_apparent_longitude_deg(t);
        assert!((lon - 133.167).abs() < 0.05, "λ = {lon}");
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        let day = 1.0 / 36_525.0;
        let a = moon_apparent_longitude_deg(0.2);
        let b = moon_apparent_longitude_deg(0.2 + day);
        let rate = normalize_360(b - a);
        assert!((11.5..15.5).contains(&rate), "rate = {rate}");
    }
}
