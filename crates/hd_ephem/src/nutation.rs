//! Delaunay fundamental arguments and truncated nutation in longitude.
//!
//! Fundamental arguments from IERS Conventions 2010, Table 5.2e. The
//! nutation series keeps the 13 largest IAU 2000B lunisolar terms in Δψ,
//! which reproduces the full model to about 0.1 arcsecond.

use std::f64::consts::TAU;

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Compute the five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[l, l', F, D, Ω]`:
/// - `l`  = mean anomaly of the Moon
/// - `l'` = mean anomaly of the Sun
/// - `F`  = mean argument of latitude of the Moon
/// - `D`  = mean elongation of the Moon from the Sun
/// - `Ω`  = mean longitude of the ascending node of the Moon
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Leading IAU 2000B terms for Δψ.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S_i, S'_i]`, amplitudes in 0.1 μas.
#[rustfmt::skip]
static DPSI_TERMS: [[i64; 7]; 13] = [
    //  nl  nl'  nF   nD   nΩ       S_i         S'_i
    [   0,   0,   0,   0,   1, -172064161,  -174666],
    [   0,   0,   2,  -2,   2,  -13170906,    -1675],
    [   0,   0,   2,   0,   2,   -2276413,     -234],
    [   0,   0,   0,   0,   2,    2074554,      207],
    [   0,   1,   0,   0,   0,    1475877,    -3633],
    [   0,   1,   2,  -2,   2,    -516821,     1226],
    [   1,   0,   0,   0,   0,     711159,       73],
    [   0,   0,   2,   0,   1,    -387298,     -367],
    [   1,   0,   2,   0,   2,    -301461,      -36],
    [   0,  -1,   2,  -2,   2,     215829,     -494],
    [   0,   0,   2,  -2,   1,     128227,      137],
    [  -1,   0,   2,   0,   2,     123457,       11],
    [  -1,   0,   0,   2,   0,     156994,       10],
];

/// Nutation in longitude Δψ in degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let mut dpsi = 0.0_f64;
    for row in &DPSI_TERMS {
        let arg = row[0] as f64 * args[0]
            + row[1] as f64 * args[1]
            + row[2] as f64 * args[2]
            + row[3] as f64 * args[3]
            + row[4] as f64 * args[4];
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
    }
    // 0.1 μas → arcsec → degrees
    dpsi * 1e-7 / 3600.0
}

/// IAU 2006 general precession in ecliptic longitude, in degrees.
///
/// Accumulated motion of the equinox since J2000.0; adding it to a J2000
/// ecliptic longitude gives the (mean) longitude referred to the equinox of
/// date.
pub fn general_precession_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec =
        5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5;
    arcsec / 3600.0
}
