//! Design search against the analytic ephemeris.

use hd_core::{Body, Ephemeris, signed_difference};
use hd_ephem::AnalyticEphemeris;
use hd_search::{
    DesignSearchConfig, SearchError, SearchStepping, SearchStop, resolve_epochs,
};
use hd_time::{BirthInput, TimeError};

#[test]
fn august_birth_converges_backward_only() {
    let eph = AnalyticEphemeris::new();
    let birth = BirthInput::parse("1990-08-15", "12:00", "Europe/Berlin").unwrap();
    let epochs = resolve_epochs(&eph, &birth, &DesignSearchConfig::default()).unwrap();

    assert_eq!(epochs.search.stop, SearchStop::Converged);
    assert!(epochs.search.iterations <= 4);
    let gap = epochs.personality_jd - epochs.design_jd;
    assert!((85.0..95.0).contains(&gap), "gap {gap}");

    let birth_sun = eph.body_longitude(epochs.personality_jd, Body::Sun).unwrap();
    let design_sun = eph.body_longitude(epochs.design_jd, Body::Sun).unwrap();
    let arc = signed_difference(birth_sun, design_sun);
    assert!((arc - 88.0).abs() < 0.01, "arc {arc}");

    // 12:00 CEST is 10:00 UT.
    assert_eq!(epochs.personality_utc.hour, 10);
}

#[test]
fn resolution_is_idempotent() {
    let eph = AnalyticEphemeris::new();
    let birth = BirthInput::parse("1985-10-03", "06:45", "America/New_York").unwrap();
    let config = DesignSearchConfig::default();
    let a = resolve_epochs(&eph, &birth, &config).unwrap();
    let b = resolve_epochs(&eph, &birth, &config).unwrap();
    assert_eq!(a.personality_jd.to_bits(), b.personality_jd.to_bits());
    assert_eq!(a.design_jd.to_bits(), b.design_jd.to_bits());
}

#[test]
fn march_birth_needs_signed_stepping() {
    let eph = AnalyticEphemeris::new();
    let birth = BirthInput::parse("2000-03-01", "00:00", "UTC").unwrap();

    let err = resolve_epochs(&eph, &birth, &DesignSearchConfig::default()).unwrap_err();
    assert!(matches!(err, SearchError::DesignEpochUnresolved { .. }), "{err}");

    let config = DesignSearchConfig::default().with_stepping(SearchStepping::Signed);
    let epochs = resolve_epochs(&eph, &birth, &config).unwrap();
    assert!(epochs.search.residual_deg.abs() < 0.01);
}

#[test]
fn dst_gap_is_invalid_time_input() {
    let eph = AnalyticEphemeris::new();
    let birth = BirthInput::parse("2021-03-14", "02:30", "America/New_York").unwrap();
    let err = resolve_epochs(&eph, &birth, &DesignSearchConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidTimeInput(TimeError::NonexistentLocalTime(_))
    ));
}
