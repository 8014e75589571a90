//! Approximate analytic ephemeris.
//!
//! [`AnalyticEphemeris`] implements [`hd_core::Ephemeris`] from closed-form
//! theories so the chart engine can run without external data files:
//! - Sun: Meeus low-accuracy solar theory (~0.01°)
//! - Moon: truncated ELP-2000/82 main problem (~0.05°)
//! - Planets: JPL Keplerian mean elements, 1800–2050 (arcminutes to ~0.5°)
//! - True lunar node: mean node plus periodic terms
//!
//! Callers needing arc-second accuracy should supply a numerically
//! integrated ephemeris through the same trait.

pub mod lunar_nodes;
pub mod moon;
pub mod nutation;
pub(crate) mod planets;
pub mod sun;

use hd_core::{Body, Ephemeris, EphemerisError, EphemerisTarget};
use hd_time::{jd_to_centuries, ut_to_tt_jd};

pub use lunar_nodes::{mean_node_deg, true_node_deg};
pub use moon::moon_apparent_longitude_deg;
pub use nutation::{fundamental_arguments, general_precession_deg, nutation_longitude_deg};
pub use sun::sun_apparent_longitude_deg;

/// First UT Julian Day covered (1800-01-01 00:00).
pub const COVERAGE_START_JD: f64 = 2_378_496.5;

/// Last UT Julian Day covered (2050-12-31 24:00).
pub const COVERAGE_END_JD: f64 = 2_470_172.5;

/// Closed-form ephemeris over 1800–2050.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris {
    _private: (),
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Longitude at Julian centuries of TT, without range checks.
    pub fn longitude_at_centuries(&self, t: f64, target: EphemerisTarget) -> Option<f64> {
        match target {
            EphemerisTarget::TrueNode => Some(true_node_deg(t)),
            EphemerisTarget::Body(Body::Sun) => Some(sun_apparent_longitude_deg(t)),
            EphemerisTarget::Body(Body::Moon) => Some(moon_apparent_longitude_deg(t)),
            EphemerisTarget::Body(body) => planets::Orbit::for_body(body)
                .map(|orbit| planets::planet_apparent_longitude_deg(orbit, t)),
        }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn longitude(&self, jd_ut: f64, target: EphemerisTarget) -> Result<f64, EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::NonFiniteEpoch(jd_ut));
        }
        if !(COVERAGE_START_JD..=COVERAGE_END_JD).contains(&jd_ut) {
            return Err(EphemerisError::EpochOutOfRange(jd_ut));
        }
        let t = jd_to_centuries(ut_to_tt_jd(jd_ut));
        let lon = self
            .longitude_at_centuries(t, target)
            .ok_or(EphemerisError::UnsupportedTarget(target))?;
        if !lon.is_finite() {
            return Err(EphemerisError::Computation(format!(
                "{target} longitude is not finite at JD {jd_ut}"
            )));
        }
        tracing::trace!(%target, jd_ut, lon, "analytic longitude");
        Ok(lon)
    }
}
