//! Geocentric planetary longitudes from Keplerian mean elements.
//!
//! Elements and secular rates from Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL, Table 1, valid
//! 1800–2050). Positions are heliocentric in the J2000 ecliptic; the
//! geocentric direction is taken against the Earth–Moon barycenter, then
//! referred to the equinox of date by general precession and nutation.
//! Light-time and aberration are neglected; accuracy is a few arcminutes
//! for the inner planets and up to about half a degree for Saturn.

use hd_core::{Body, normalize_360};

use crate::nutation::{general_precession_deg, nutation_longitude_deg};

/// Bodies with an orbital element row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orbit {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Orbit {
    pub(crate) fn for_body(body: Body) -> Option<Self> {
        match body {
            Body::Mercury => Some(Self::Mercury),
            Body::Venus => Some(Self::Venus),
            Body::Mars => Some(Self::Mars),
            Body::Jupiter => Some(Self::Jupiter),
            Body::Saturn => Some(Self::Saturn),
            Body::Uranus => Some(Self::Uranus),
            Body::Neptune => Some(Self::Neptune),
            Body::Pluto => Some(Self::Pluto),
            Body::Sun | Body::Earth | Body::Moon => None,
        }
    }

    const fn row(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoonBarycenter => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
            Self::Uranus => 6,
            Self::Neptune => 7,
            Self::Pluto => 8,
        }
    }
}

/// `[a, e, I, L, ϖ, Ω]` at J2000 followed by their rates per century.
/// Units: au and degrees.
#[rustfmt::skip]
static ELEMENTS: [[f64; 12]; 9] = [
    // Mercury
    [ 0.38709927, 0.20563593,  7.00497902, 252.25032350,  77.45779628,  48.33076593,
      0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
    // Venus
    [ 0.72333566, 0.00677672,  3.39467605, 181.97909950, 131.60246718,  76.67984255,
      0.00000390,-0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
    // Earth-Moon barycenter
    [ 1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193,   0.0,
      0.00000562,-0.00004392, -0.01294668, 35999.37244981, 0.32327364,  0.0],
    // Mars
    [ 1.52371034, 0.09339410,  1.84969142,  -4.55343205, -23.94362959,  49.55953891,
      0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
    // Jupiter
    [ 5.20288700, 0.04838624,  1.30439695,  34.39644051,  14.72847983, 100.47390909,
     -0.00011607,-0.00013253, -0.00183714,  3034.74612775, 0.21252668,  0.20469106],
    // Saturn
    [ 9.53667594, 0.05386179,  2.48599187,  49.95424423,  92.59887831, 113.66242448,
     -0.00125060,-0.00050991,  0.00193609,  1222.49362201,-0.41897216, -0.28867794],
    // Uranus
    [19.18916464, 0.04725744,  0.77263783, 313.23810451, 170.95427630,  74.01692503,
     -0.00196176,-0.00004397, -0.00242939,   428.48202785, 0.40805281,  0.04240589],
    // Neptune
    [30.06992276, 0.00859048,  1.77004347, -55.12002969,  44.96476227, 131.78422574,
      0.00026291, 0.00005105,  0.00035372,   218.45945325,-0.32241464, -0.00508664],
    // Pluto
    [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684,
     -0.00031596, 0.00005170,  0.00004818,   145.20780515,-0.04062942, -0.01183482],
];

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
pub(crate) fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric position in the J2000 ecliptic frame, in au.
pub(crate) fn heliocentric_ecliptic(orbit: Orbit, t: f64) -> [f64; 3] {
    let el = &ELEMENTS[orbit.row()];
    let a = el[0] + el[6] * t;
    let e = el[1] + el[7] * t;
    let incl = (el[2] + el[8] * t).to_radians();
    let mean_longitude = el[3] + el[9] * t;
    let peri_longitude = el[4] + el[10] * t;
    let node = el[5] + el[11] * t;

    let arg_perihelion = (peri_longitude - node).to_radians();
    let mean_anomaly = normalize_pm180(mean_longitude - peri_longitude).to_radians();
    let ecc_anomaly = solve_kepler(mean_anomaly, e);

    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let node = node.to_radians();
    let (sw, cw) = arg_perihelion.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

fn normalize_pm180(deg: f64) -> f64 {
    let d = normalize_360(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Geocentric apparent longitude of a planet in degrees [0, 360), referred
/// to the true equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub(crate) fn planet_apparent_longitude_deg(orbit: Orbit, t: f64) -> f64 {
    let planet = heliocentric_ecliptic(orbit, t);
    let earth = heliocentric_ecliptic(Orbit::EarthMoonBarycenter, t);
    let dx = planet[0] - earth[0];
    let dy = planet[1] - earth[1];
    let lon_j2000 = dy.atan2(dx).to_degrees();
    normalize_360(lon_j2000 + general_precession_deg(t) + nutation_longitude_deg(t))
}
