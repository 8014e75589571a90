//! Core contract between the chart engine and an ephemeris.
//!
//! This crate defines the bodies the engine asks about, the [`Ephemeris`]
//! trait a position source implements, and its error type. It carries no
//! orbital mechanics itself; `hd_ephem` ships an approximate analytic
//! implementation and callers may plug in any other source.

use serde::Serialize;
use thiserror::Error;

/// Bodies read at each chart epoch.
///
/// Earth is part of the set because it carries an activation, but its
/// geocentric longitude is always the Sun's plus 180 degrees and it is never
/// queried from an ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Body {
    Sun,
    Earth,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies, Sun first.
pub const ALL_BODIES: [Body; 11] = [
    Body::Sun,
    Body::Earth,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Earth => 399,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
            Self::Uranus => 799,
            Self::Neptune => 899,
            Self::Pluto => 999,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            399 => Some(Self::Earth),
            301 => Some(Self::Moon),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            799 => Some(Self::Uranus),
            899 => Some(Self::Neptune),
            999 => Some(Self::Pluto),
            _ => None,
        }
    }

    /// Whether the body's longitude comes from an ephemeris query.
    pub const fn is_queried(self) -> bool {
        !matches!(self, Self::Earth)
    }
}

/// Something an ephemeris can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EphemerisTarget {
    /// Geocentric apparent ecliptic longitude of a body.
    Body(Body),
    /// Longitude of the Moon's true ascending node.
    TrueNode,
}

impl std::fmt::Display for EphemerisTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Body(body) => f.write_str(body.name()),
            Self::TrueNode => f.write_str("True Node"),
        }
    }
}

/// Ephemeris collaborator errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The source does not provide this target (Earth is never served).
    #[error("unsupported target: {0}")]
    UnsupportedTarget(EphemerisTarget),
    /// The requested epoch is NaN or infinite.
    #[error("epoch must be finite, got {0}")]
    NonFiniteEpoch(f64),
    /// The epoch lies outside the source's coverage.
    #[error("epoch out of range: JD {0}")]
    EpochOutOfRange(f64),
    /// Internal computation failure.
    #[error("ephemeris computation failed: {0}")]
    Computation(String),
}

/// Source of geocentric tropical ecliptic longitudes.
///
/// `jd_ut` is a Julian Day on the UT scale; implementations handle any time
/// scale conversion they need. Results are degrees in `[0, 360)`.
pub trait Ephemeris {
    fn longitude(&self, jd_ut: f64, target: EphemerisTarget) -> Result<f64, EphemerisError>;

    /// Shorthand for a body query.
    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        self.longitude(jd_ut, EphemerisTarget::Body(body))
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn longitude(&self, jd_ut: f64, target: EphemerisTarget) -> Result<f64, EphemerisError> {
        (**self).longitude(jd_ut, target)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn longitude(&self, jd_ut: f64, target: EphemerisTarget) -> Result<f64, EphemerisError> {
        (**self).longitude(jd_ut, target)
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed smallest difference `a - b` in (-180, 180] degrees.
pub fn signed_difference(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}
