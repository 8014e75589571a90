//! Activation sets: the thirteen points read at one epoch.
//!
//! Each epoch contributes the ten queried bodies, Earth (derived from the
//! Sun), and the true lunar node pair. Earth always carries the Sun's line;
//! its gate is kept as mapped.

use std::fmt::{Display, Formatter};

use hd_core::{Body, Ephemeris, EphemerisTarget, normalize_360};
use serde::Serialize;
use tracing::debug;

use crate::error::ChartError;
use crate::wheel::{Activation, try_gate_from_longitude};

/// A point carrying an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ActivationPoint {
    Sun,
    Earth,
    NorthNode,
    SouthNode,
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

/// Points in table order.
pub const ALL_POINTS: [ActivationPoint; 13] = [
    ActivationPoint::Sun,
    ActivationPoint::Earth,
    ActivationPoint::NorthNode,
    ActivationPoint::SouthNode,
    ActivationPoint::Moon,
    ActivationPoint::Mercury,
    ActivationPoint::Venus,
    ActivationPoint::Mars,
    ActivationPoint::Jupiter,
    ActivationPoint::Saturn,
    ActivationPoint::Uranus,
    ActivationPoint::Neptune,
    ActivationPoint::Pluto,
];

impl ActivationPoint {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
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

    /// Astronomical glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "\u{2609}",
            Self::Earth => "\u{2295}",
            Self::NorthNode => "\u{260A}",
            Self::SouthNode => "\u{260B}",
            Self::Moon => "\u{263D}",
            Self::Mercury => "\u{263F}",
            Self::Venus => "\u{2640}",
            Self::Mars => "\u{2642}",
            Self::Jupiter => "\u{2643}",
            Self::Saturn => "\u{2644}",
            Self::Uranus => "\u{2645}",
            Self::Neptune => "\u{2646}",
            Self::Pluto => "\u{2647}",
        }
    }

    /// The body behind this point, if it is one.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Earth => Some(Body::Earth),
            Self::NorthNode | Self::SouthNode => None,
            Self::Moon => Some(Body::Moon),
            Self::Mercury => Some(Body::Mercury),
            Self::Venus => Some(Body::Venus),
            Self::Mars => Some(Body::Mars),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Saturn => Some(Body::Saturn),
            Self::Uranus => Some(Body::Uranus),
            Self::Neptune => Some(Body::Neptune),
            Self::Pluto => Some(Body::Pluto),
        }
    }
}

impl Display for ActivationPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of an activation set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivationEntry {
    pub point: ActivationPoint,
    /// Tropical longitude the activation was mapped from.
    pub longitude_deg: f64,
    pub activation: Activation,
}

impl ActivationEntry {
    /// Entry whose longitude is the midpoint of the given gate and line.
    pub fn from_activation(point: ActivationPoint, activation: Activation) -> Self {
        Self {
            point,
            longitude_deg: activation.midpoint_longitude(),
            activation,
        }
    }
}

/// Ordered activations for one epoch.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ActivationSet {
    entries: Vec<ActivationEntry>,
}

impl ActivationSet {
    pub fn from_entries(entries: Vec<ActivationEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ActivationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, point: ActivationPoint) -> Option<&ActivationEntry> {
        self.entries.iter().find(|e| e.point == point)
    }

    pub fn activation(&self, point: ActivationPoint) -> Option<Activation> {
        self.get(point).map(|e| e.activation)
    }

    /// Gates activated by any point, with repeats.
    pub fn gates(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|e| e.activation.gate)
    }
}

impl FromIterator<ActivationEntry> for ActivationSet {
    fn from_iter<I: IntoIterator<Item = ActivationEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

/// Read all thirteen points at one epoch.
///
/// A NaN or infinite longitude from the ephemeris fails the whole set with
/// [`ChartError::NonFiniteLongitude`].
pub fn build_activation_set<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
) -> Result<ActivationSet, ChartError> {
    let sun = ephemeris.body_longitude(jd_ut, Body::Sun)?;
    let node = ephemeris.longitude(jd_ut, EphemerisTarget::TrueNode)?;

    let mut entries = Vec::with_capacity(ALL_POINTS.len());
    for point in ALL_POINTS {
        let longitude_deg = match point {
            ActivationPoint::Sun => sun,
            ActivationPoint::Earth => normalize_360(sun + 180.0),
            ActivationPoint::NorthNode => node,
            ActivationPoint::SouthNode => normalize_360(node + 180.0),
            other => match other.body() {
                Some(body) => ephemeris.body_longitude(jd_ut, body)?,
                None => continue,
            },
        };
        entries.push(ActivationEntry {
            point,
            longitude_deg,
            activation: try_gate_from_longitude(longitude_deg)?.activation,
        });
    }

    harmonize_earth(&mut entries);
    debug!(jd_ut, count = entries.len(), "built activation set");
    Ok(ActivationSet { entries })
}

/// Personality (primary) and Design (secondary) activation sets.
pub fn build_activation_sets<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    primary_jd: f64,
    design_jd: f64,
) -> Result<(ActivationSet, ActivationSet), ChartError> {
    let personality = build_activation_set(ephemeris, primary_jd)?;
    let design = build_activation_set(ephemeris, design_jd)?;
    Ok((personality, design))
}

fn harmonize_earth(entries: &mut [ActivationEntry]) {
    let sun_line = entries
        .iter()
        .find(|e| e.point == ActivationPoint::Sun)
        .map(|e| e.activation.line);
    if let Some(line) = sun_line {
        for entry in entries.iter_mut().filter(|e| e.point == ActivationPoint::Earth) {
            entry.activation.line = line;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::gate_from_longitude;
    use hd_core::EphemerisError;
    use std::cell::RefCell;

    /// Fixed longitudes per target, recording every query.
    struct Table {
        sun: f64,
        node: f64,
        queries: RefCell<Vec<EphemerisTarget>>,
    }

    impl Table {
        fn new(sun: f64, node: f64) -> Self {
            Self {
                sun,
                node,
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl Ephemeris for Table {
        fn longitude(&self, _jd: f64, target: EphemerisTarget) -> Result<f64, EphemerisError> {
            self.queries.borrow_mut().push(target);
            match target {
                EphemerisTarget::Body(Body::Sun) => Ok(self.sun),
                EphemerisTarget::Body(Body::Earth) => Err(EphemerisError::UnsupportedTarget(target)),
                EphemerisTarget::Body(b) => Ok(b.code() as f64 % 360.0),
                EphemerisTarget::TrueNode => Ok(self.node),
            }
        }
    }

    #[test]
    fn thirteen_entries_in_table_order() {
        let eph = Table::new(100.0, 40.0);
        let set = build_activation_set(&eph, 2_451_545.0).unwrap();
        let points: Vec<_> = set.iter().map(|e| e.point).collect();
        assert_eq!(points, ALL_POINTS.to_vec());
    }

    #[test]
    fn earth_is_never_queried() {
        let eph = Table::new(100.0, 40.0);
        build_activation_set(&eph, 2_451_545.0).unwrap();
        let queries = eph.queries.borrow();
        assert_eq!(queries.len(), 11);
        assert!(!queries.contains(&EphemerisTarget::Body(Body::Earth)));
    }

    #[test]
    fn opposites_are_derived() {
        let eph = Table::new(350.0, 10.0);
        let set = build_activation_set(&eph, 0.0).unwrap();
        assert!((set.get(ActivationPoint::Earth).unwrap().longitude_deg - 170.0).abs() < 1e-12);
        assert!((set.get(ActivationPoint::SouthNode).unwrap().longitude_deg - 190.0).abs() < 1e-12);
    }

    #[test]
    fn earth_takes_sun_line() {
        // Includes a Sun just below the 19/13 boundary.
        for sun in [0.0, 17.3, 123.456, 302.0 + 2.0 * 5.625 - 1e-7, 359.999] {
            let eph = Table::new(sun, 0.0);
            let set = build_activation_set(&eph, 0.0).unwrap();
            let s = set.activation(ActivationPoint::Sun).unwrap();
            let e = set.activation(ActivationPoint::Earth).unwrap();
            assert_eq!(s.line, e.line, "sun {sun}");
            assert_eq!(
                e.gate,
                gate_from_longitude(normalize_360(sun + 180.0)).gate(),
                "sun {sun}"
            );
        }
    }

    #[test]
    fn ephemeris_failure_propagates() {
        struct Broken;
        impl Ephemeris for Broken {
            fn longitude(&self, jd: f64, _t: EphemerisTarget) -> Result<f64, EphemerisError> {
                Err(EphemerisError::EpochOutOfRange(jd))
            }
        }
        let err = build_activation_sets(&Broken, 1.0, 2.0).unwrap_err();
        assert_eq!(err, ChartError::Ephemeris(EphemerisError::EpochOutOfRange(1.0)));
    }

    /// Serves finite longitudes except for one target.
    struct NonFinite {
        target: EphemerisTarget,
        value: f64,
    }

    impl Ephemeris for NonFinite {
        fn longitude(&self, _jd: f64, target: EphemerisTarget) -> Result<f64, EphemerisError> {
            Ok(if target == self.target { self.value } else { 123.0 })
        }
    }

    #[test]
    fn non_finite_longitude_is_rejected() {
        let cases = [
            (EphemerisTarget::Body(Body::Moon), f64::NAN),
            (EphemerisTarget::Body(Body::Pluto), f64::INFINITY),
            (EphemerisTarget::Body(Body::Sun), f64::NAN),
            (EphemerisTarget::TrueNode, f64::NEG_INFINITY),
        ];
        for (target, value) in cases {
            let eph = NonFinite { target, value };
            let err = build_activation_set(&eph, 2_451_545.0).unwrap_err();
            assert!(
                matches!(err, ChartError::NonFiniteLongitude(v) if !v.is_finite()),
                "{target}: {err:?}"
            );
        }
    }

    #[test]
    fn non_finite_design_epoch_fails_both_sets() {
        let eph = NonFinite {
            target: EphemerisTarget::Body(Body::Mars),
            value: f64::NAN,
        };
        assert!(matches!(
            build_activation_sets(&eph, 1.0, 2.0),
            Err(ChartError::NonFiniteLongitude(_))
        ));
    }

    #[test]
    fn from_activation_round_trips_through_wheel() {
        let a = Activation::new(20, 3).unwrap();
        let e = ActivationEntry::from_activation(ActivationPoint::Moon, a);
        assert_eq!(gate_from_longitude(e.longitude_deg).activation, a);
    }
}
