//! End-to-end classification from scripted ephemeris positions.

use hd_chart::{
    ALL_POINTS, Activation, ActivationEntry, ActivationSet, Authority, Center, CenterStatus,
    ChartType, Definition, build_activation_sets, classify, gate_start_longitude,
};
use hd_core::{Body, Ephemeris, EphemerisError, EphemerisTarget};

/// Places each target at the middle of a chosen gate and line, per epoch.
struct Scripted {
    personality_jd: f64,
    personality: Vec<(EphemerisTarget, Activation)>,
    design: Vec<(EphemerisTarget, Activation)>,
    /// Gate and line for anything not listed.
    filler: Activation,
}

impl Ephemeris for Scripted {
    fn longitude(&self, jd: f64, target: EphemerisTarget) -> Result<f64, EphemerisError> {
        if target == EphemerisTarget::Body(Body::Earth) {
            return Err(EphemerisError::UnsupportedTarget(target));
        }
        let table = if jd == self.personality_jd {
            &self.personality
        } else {
            &self.design
        };
        let act = table
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, a)| *a)
            .unwrap_or(self.filler);
        Ok(act.midpoint_longitude())
    }
}

fn act(gate: u8, line: u8) -> Activation {
    Activation::new(gate, line).unwrap()
}

#[test]
fn manifesting_generator_scenario() {
    // Personality Sun on 34 puts Earth on 20 (opposite on the wheel).
    let sun = gate_start_longitude(34).unwrap();
    let earth_gate = hd_chart::gate_from_longitude(sun + 180.0).gate();
    assert_eq!(earth_gate, 20);

    let eph = Scripted {
        personality_jd: 2_451_545.0,
        personality: vec![(EphemerisTarget::Body(Body::Sun), act(34, 3))],
        design: vec![(EphemerisTarget::Body(Body::Sun), act(13, 5))],
        filler: act(41, 2),
    };
    let (p, d) = build_activation_sets(&eph, 2_451_545.0, 2_451_456.0).unwrap();
    assert_eq!(p.activation(hd_chart::ActivationPoint::Earth), Some(act(20, 3)));

    let facts = classify(&p, &d);
    assert_eq!(facts.chart_type, ChartType::ManifestingGenerator);
    assert_eq!(facts.authority, Authority::Sacral);
    assert_eq!(facts.definition, Definition::Single);
    assert_eq!(facts.profile.to_string(), "3/5");
    // Nodes on 41/31 plus the design Earth on 7 also complete 7-31.
    let keys: Vec<_> = facts.channels.iter().map(|c| c.key()).collect();
    assert_eq!(keys, ["7-31", "20-34"]);
    assert_eq!(facts.center_status(Center::Sacral), CenterStatus::Personality);
    assert_eq!(facts.center_status(Center::Throat), CenterStatus::Both);
    assert_eq!(facts.center_status(Center::G), CenterStatus::Both);
    assert_eq!(facts.cross_gates, Some([34, 20, 13, 7]));
}

#[test]
fn classification_ignores_entry_order() {
    let acts = [
        act(20, 1),
        act(34, 1),
        act(37, 2),
        act(40, 3),
        act(1, 4),
        act(8, 5),
        act(64, 6),
        act(47, 1),
        act(18, 2),
        act(58, 3),
        act(12, 4),
        act(22, 5),
        act(3, 6),
    ];
    let original: ActivationSet = ALL_POINTS
        .iter()
        .zip(acts)
        .map(|(&p, a)| ActivationEntry::from_activation(p, a))
        .collect();
    let design: ActivationSet = ALL_POINTS
        .iter()
        .zip([act(60, 1), act(56, 2), act(11, 3)])
        .map(|(&p, a)| ActivationEntry::from_activation(p, a))
        .collect();

    let expected = classify(&original, &design);

    let mut entries = original.entries().to_vec();
    for rotation in 1..entries.len() {
        entries.rotate_left(1);
        let mut reversed = entries.clone();
        reversed.reverse();
        for permuted in [entries.clone(), reversed] {
            let facts = classify(&ActivationSet::from_entries(permuted), &design);
            assert_eq!(facts, expected, "rotation {rotation}");
        }
    }
}

#[test]
fn reflector_invariant_from_scripted_ephemeris() {
    // Every point on gate 41 (or its opposite, 31): no channel.
    let eph = Scripted {
        personality_jd: 0.0,
        personality: vec![],
        design: vec![],
        filler: act(41, 1),
    };
    let (p, d) = build_activation_sets(&eph, 0.0, -89.0).unwrap();
    let facts = classify(&p, &d);
    assert_eq!(facts.chart_type, ChartType::Reflector);
    assert_eq!(facts.authority, Authority::Lunar);
    assert_eq!(facts.definition.label(), "None");
    assert_eq!(facts.strategy(), "Wait a Lunar Cycle");
    assert_eq!(facts.shadow_theme(), "Disappointment");
}
