//! Definition analysis: from two activation sets to chart facts.
//!
//! A channel is active when both of its gates appear in either set. Its two
//! centers are then defined and joined by an edge of the activation graph.
//! Everything else (type, authority, definition, profile) is read off that
//! graph and the Sun lines.
//!
//! Classification is a pure function of the *sets* of activations: entry
//! order inside an [`ActivationSet`] does not matter.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::activation::{ActivationPoint, ActivationSet};
use crate::center::{ALL_CENTERS, Center, MOTOR_CENTERS};
use crate::channel::{CHANNELS, Channel};

/// Which epoch activated a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GateSource {
    Personality,
    Design,
    Both,
}

impl GateSource {
    fn merge(self, other: Self) -> Self {
        if self == other { self } else { Self::Both }
    }
}

/// Fill classification of a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CenterStatus {
    /// No active channel touches the center.
    Open,
    /// Defined only through personality gates.
    Personality,
    /// Defined only through design gates.
    Design,
    /// Defined through gates of both epochs.
    Both,
}

impl CenterStatus {
    pub fn is_defined(self) -> bool {
        self != Self::Open
    }

    fn with(self, source: GateSource) -> Self {
        match (self, source) {
            (Self::Open, GateSource::Personality) => Self::Personality,
            (Self::Open, GateSource::Design) => Self::Design,
            (Self::Personality, GateSource::Personality) => Self::Personality,
            (Self::Design, GateSource::Design) => Self::Design,
            _ => Self::Both,
        }
    }
}

/// Energy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartType {
    Manifestor,
    Generator,
    ManifestingGenerator,
    Projector,
    Reflector,
}

impl ChartType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manifestor => "Manifestor",
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Projector => "Projector",
            Self::Reflector => "Reflector",
        }
    }

    pub const fn strategy(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "To Respond",
            Self::Manifestor => "To Inform",
            Self::Projector => "Wait for the Invitation",
            Self::Reflector => "Wait a Lunar Cycle",
        }
    }

    /// Not-self theme.
    pub const fn shadow_theme(self) -> &'static str {
        match self {
            Self::Generator => "Frustration",
            Self::ManifestingGenerator => "Frustration and Anger",
            Self::Manifestor => "Anger",
            Self::Projector => "Bitterness",
            Self::Reflector => "Disappointment",
        }
    }
}

impl Display for ChartType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inner authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    EgoHeart,
    SelfProjected,
    Lunar,
    Environment,
}

impl Authority {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional",
            Self::Sacral => "Sacral",
            Self::Splenic => "Splenic",
            Self::EgoHeart => "Ego/Heart",
            Self::SelfProjected => "Self-Projected",
            Self::Lunar => "Lunar",
            Self::Environment => "Environment (Mental)",
        }
    }
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the defined centers split into connected groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Definition {
    None,
    Single,
    Split,
    TripleSplit,
    QuadrupleSplit,
    MultipleSplits,
}

impl Definition {
    pub const fn from_component_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Single,
            2 => Self::Split,
            3 => Self::TripleSplit,
            4 => Self::QuadrupleSplit,
            _ => Self::MultipleSplits,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Single => "Single Definition",
            Self::Split => "Split Definition",
            Self::TripleSplit => "Triple Split Definition",
            Self::QuadrupleSplit => "Quadruple Split Definition",
            Self::MultipleSplits => "Multiple Splits Definition",
        }
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Personality and design Sun lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Lines { personality: u8, design: u8 },
    /// A Sun (and Earth) entry was missing from one of the sets.
    Undetermined,
}

impl Profile {
    pub fn from_sets(personality: &ActivationSet, design: &ActivationSet) -> Self {
        match (sun_line(personality), sun_line(design)) {
            (Some(personality), Some(design)) => Self::Lines {
                personality,
                design,
            },
            _ => Self::Undetermined,
        }
    }

    pub fn lines(self) -> Option<(u8, u8)> {
        match self {
            Self::Lines {
                personality,
                design,
            } => Some((personality, design)),
            Self::Undetermined => None,
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lines {
                personality,
                design,
            } => write!(f, "{personality}/{design}"),
            Self::Undetermined => f.write_str("TBD"),
        }
    }
}

impl Serialize for Profile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn sun_line(set: &ActivationSet) -> Option<u8> {
    set.activation(ActivationPoint::Sun)
        .or_else(|| set.activation(ActivationPoint::Earth))
        .map(|a| a.line)
}

/// Angle of the incarnation cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleCategory {
    #[serde(rename = "Right Angle")]
    RightAngle,
    #[serde(rename = "Juxtaposition")]
    Juxtaposition,
    #[serde(rename = "Left Angle")]
    LeftAngle,
}

impl AngleCategory {
    pub const fn from_lines(personality: u8, design: u8) -> Self {
        match (personality, design) {
            (4, 1) => Self::Juxtaposition,
            (p, _) if p >= 5 => Self::LeftAngle,
            _ => Self::RightAngle,
        }
    }

    pub fn from_profile(profile: Profile) -> Option<Self> {
        profile.lines().map(|(p, d)| Self::from_lines(p, d))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RightAngle => "Right Angle",
            Self::Juxtaposition => "Juxtaposition",
            Self::LeftAngle => "Left Angle",
        }
    }
}

impl Display for AngleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Undirected graph over defined centers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationGraph {
    adjacency: BTreeMap<Center, BTreeSet<Center>>,
}

impl ActivationGraph {
    pub fn from_channels<'a>(channels: impl IntoIterator<Item = &'a Channel>) -> Self {
        let mut adjacency: BTreeMap<Center, BTreeSet<Center>> = BTreeMap::new();
        for ch in channels {
            let (a, b) = ch.centers;
            adjacency.entry(a).or_default();
            adjacency.entry(b).or_default();
            if a != b {
                adjacency.entry(a).or_default().insert(b);
                adjacency.entry(b).or_default().insert(a);
            }
        }
        Self { adjacency }
    }

    pub fn contains(&self, center: Center) -> bool {
        self.adjacency.contains_key(&center)
    }

    pub fn centers(&self) -> impl Iterator<Item = Center> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Centers reachable from `start`, including itself when present.
    pub fn component_of(&self, start: Center) -> BTreeSet<Center> {
        let mut seen = BTreeSet::new();
        if !self.contains(start) {
            return seen;
        }
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(c) = queue.pop_front() {
            for &n in self.adjacency.get(&c).into_iter().flatten() {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    /// Whether any of `from` reaches `target`.
    pub fn reaches(&self, from: impl IntoIterator<Item = Center>, target: Center) -> bool {
        from.into_iter()
            .any(|c| self.component_of(c).contains(&target))
    }

    pub fn component_count(&self) -> usize {
        let mut seen = BTreeSet::new();
        let mut count = 0;
        for c in self.centers() {
            if !seen.contains(&c) {
                seen.extend(self.component_of(c));
                count += 1;
            }
        }
        count
    }
}

/// Everything derived from a pair of activation sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFacts {
    pub chart_type: ChartType,
    pub authority: Authority,
    pub definition: Definition,
    /// Connected groups of defined centers.
    pub component_count: usize,
    pub profile: Profile,
    /// `None` while the profile is undetermined.
    pub angle: Option<AngleCategory>,
    /// Personality Sun, personality Earth, design Sun, design Earth.
    pub cross_gates: Option<[u8; 4]>,
    /// Activated gates and who activated them.
    pub gates: BTreeMap<u8, GateSource>,
    /// Active channels in table order.
    pub channels: Vec<Channel>,
    /// Status per center, indexed by [`Center::index`].
    pub centers: [CenterStatus; 9],
    pub graph: ActivationGraph,
}

impl ChartFacts {
    pub fn strategy(&self) -> &'static str {
        self.chart_type.strategy()
    }

    pub fn shadow_theme(&self) -> &'static str {
        self.chart_type.shadow_theme()
    }

    pub fn gate_source(&self, gate: u8) -> Option<GateSource> {
        self.gates.get(&gate).copied()
    }

    pub fn center_status(&self, center: Center) -> CenterStatus {
        self.centers[center.index()]
    }

    pub fn is_defined(&self, center: Center) -> bool {
        self.center_status(center).is_defined()
    }

    pub fn defined_centers(&self) -> impl Iterator<Item = Center> + '_ {
        ALL_CENTERS.into_iter().filter(|&c| self.is_defined(c))
    }

    pub fn is_channel_active(&self, channel: &Channel) -> bool {
        self.channels.iter().any(|c| c.gates == channel.gates)
    }
}

/// Gates in either set, tagged with their source.
pub fn activated_gates(
    personality: &ActivationSet,
    design: &ActivationSet,
) -> BTreeMap<u8, GateSource> {
    let mut gates = BTreeMap::new();
    let tagged = personality
        .gates()
        .map(|g| (g, GateSource::Personality))
        .chain(design.gates().map(|g| (g, GateSource::Design)));
    for (gate, source) in tagged {
        gates
            .entry(gate)
            .and_modify(|s: &mut GateSource| *s = s.merge(source))
            .or_insert(source);
    }
    gates
}

/// Classify a chart.
pub fn classify(personality: &ActivationSet, design: &ActivationSet) -> ChartFacts {
    let gates = activated_gates(personality, design);

    let channels: Vec<Channel> = CHANNELS
        .iter()
        .filter(|ch| gates.contains_key(&ch.gates.0) && gates.contains_key(&ch.gates.1))
        .copied()
        .collect();

    let mut centers = [CenterStatus::Open; 9];
    for ch in &channels {
        // Both gates of an active channel color both of its centers.
        let sources = [ch.gates.0, ch.gates.1].map(|g| gates.get(&g).copied());
        for center in [ch.centers.0, ch.centers.1] {
            let status = &mut centers[center.index()];
            for source in sources.into_iter().flatten() {
                *status = status.with(source);
            }
        }
    }

    let graph = ActivationGraph::from_channels(&channels);
    debug_assert!(ALL_CENTERS
        .iter()
        .all(|&c| graph.contains(c) == centers[c.index()].is_defined()));

    let component_count = graph.component_count();
    let definition = Definition::from_component_count(component_count);
    let chart_type = chart_type(&graph);
    let authority = authority(&graph);
    let profile = Profile::from_sets(personality, design);
    let angle = AngleCategory::from_profile(profile);

    ChartFacts {
        chart_type,
        authority,
        definition,
        component_count,
        profile,
        angle,
        cross_gates: cross_gates(personality, design),
        gates,
        channels,
        centers,
        graph,
    }
}

fn chart_type(graph: &ActivationGraph) -> ChartType {
    if graph.is_empty() {
        return ChartType::Reflector;
    }
    let motor_to_throat = graph.reaches(
        MOTOR_CENTERS.into_iter().filter(|&m| graph.contains(m)),
        Center::Throat,
    );
    match (graph.contains(Center::Sacral), motor_to_throat) {
        (true, true) => ChartType::ManifestingGenerator,
        (true, false) => ChartType::Generator,
        (false, true) => ChartType::Manifestor,
        (false, false) => ChartType::Projector,
    }
}

fn authority(graph: &ActivationGraph) -> Authority {
    if graph.contains(Center::SolarPlexus) {
        Authority::Emotional
    } else if graph.contains(Center::Sacral) {
        Authority::Sacral
    } else if graph.contains(Center::Spleen) {
        Authority::Splenic
    } else if graph.contains(Center::Ego) {
        Authority::EgoHeart
    } else if graph.contains(Center::G) && graph.contains(Center::Throat) {
        Authority::SelfProjected
    } else if graph.is_empty() {
        Authority::Lunar
    } else {
        Authority::Environment
    }
}

fn cross_gates(personality: &ActivationSet, design: &ActivationSet) -> Option<[u8; 4]> {
    let gate = |set: &ActivationSet, point| set.activation(point).map(|a| a.gate);
    Some([
        gate(personality, ActivationPoint::Sun)?,
        gate(personality, ActivationPoint::Earth)?,
        gate(design, ActivationPoint::Sun)?,
        gate(design, ActivationPoint::Earth)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::{ALL_POINTS, ActivationEntry};
    use crate::wheel::Activation;

    /// Set of up to 13 activations; points are assigned in table order.
    fn set(acts: &[(u8, u8)]) -> ActivationSet {
        acts.iter()
            .zip(ALL_POINTS)
            .map(|(&(g, l), p)| ActivationEntry::from_activation(p, Activation::new(g, l).unwrap()))
            .collect()
    }

    #[test]
    fn no_channels_is_reflector() {
        // No two of these gates form a channel.
        let facts = classify(&set(&[(41, 1), (13, 2)]), &set(&[(3, 3), (64, 4)]));
        assert_eq!(facts.chart_type, ChartType::Reflector);
        assert_eq!(facts.authority, Authority::Lunar);
        assert_eq!(facts.definition, Definition::None);
        assert_eq!(facts.definition.label(), "None");
        assert!(facts.channels.is_empty());
        assert_eq!(facts.defined_centers().count(), 0);
    }

    #[test]
    fn sacral_to_throat_is_manifesting_generator() {
        let facts = classify(&set(&[(20, 1), (5, 3)]), &set(&[(34, 2), (41, 5)]));
        assert_eq!(facts.chart_type, ChartType::ManifestingGenerator);
        assert_eq!(facts.authority, Authority::Sacral);
        assert_eq!(facts.definition, Definition::Single);
        assert_eq!(facts.strategy(), "To Respond");
        assert_eq!(facts.shadow_theme(), "Frustration and Anger");
        assert_eq!(facts.channels.len(), 1);
        assert_eq!(facts.center_status(Center::Throat), CenterStatus::Both);
        assert_eq!(facts.center_status(Center::Sacral), CenterStatus::Both);
    }

    #[test]
    fn sacral_without_throat_is_generator() {
        // 3-60 Sacral-Root, 2-14 G-Sacral.
        let facts = classify(&set(&[(3, 1), (60, 1), (2, 2)]), &set(&[(14, 3)]));
        assert_eq!(facts.chart_type, ChartType::Generator);
        assert_eq!(facts.authority, Authority::Sacral);
        assert_eq!(facts.definition, Definition::Single);
        assert_eq!(facts.center_status(Center::Root), CenterStatus::Personality);
        assert_eq!(facts.center_status(Center::G), CenterStatus::Both);
    }

    #[test]
    fn ego_to_throat_is_manifestor() {
        // 21-45 Ego-Throat.
        let facts = classify(&set(&[(21, 4)]), &set(&[(45, 1)]));
        assert_eq!(facts.chart_type, ChartType::Manifestor);
        assert_eq!(facts.authority, Authority::EgoHeart);
        assert_eq!(facts.strategy(), "To Inform");
    }

    #[test]
    fn motor_reaches_throat_through_g() {
        // 37-40 SolarPlexus-Ego, 25-51 G-Ego, 1-8 G-Throat.
        let facts = classify(&set(&[(37, 1), (40, 1), (25, 1)]), &set(&[(51, 1), (1, 1), (8, 1)]));
        assert_eq!(facts.chart_type, ChartType::Manifestor);
        assert_eq!(facts.authority, Authority::Emotional);
        assert_eq!(facts.definition, Definition::Single);
    }

    #[test]
    fn g_to_throat_is_self_projected_projector() {
        let facts = classify(&set(&[(1, 1)]), &set(&[(8, 1)]));
        assert_eq!(facts.chart_type, ChartType::Projector);
        assert_eq!(facts.authority, Authority::SelfProjected);
        assert_eq!(facts.strategy(), "Wait for the Invitation");
    }

    #[test]
    fn head_to_ajna_is_mental_projector() {
        let facts = classify(&set(&[(64, 1), (47, 2)]), &set(&[]));
        assert_eq!(facts.chart_type, ChartType::Projector);
        assert_eq!(facts.authority, Authority::Environment);
        assert_eq!(facts.center_status(Center::Head), CenterStatus::Personality);
        assert_eq!(facts.center_status(Center::Throat), CenterStatus::Open);
    }

    #[test]
    fn splenic_authority() {
        // 18-58 Spleen-Root.
        let facts = classify(&set(&[(18, 1)]), &set(&[(58, 1)]));
        assert_eq!(facts.authority, Authority::Splenic);
        assert_eq!(facts.chart_type, ChartType::Projector);
    }

    #[test]
    fn connectivity_labels() {
        // Head-Ajna, G-Throat, Spleen-Root and SolarPlexus-Ego share no center.
        let facts = classify(&set(&[(64, 1), (47, 1)]), &set(&[(1, 1), (8, 1)]));
        assert_eq!(facts.definition, Definition::Split);
        let facts = classify(
            &set(&[(64, 1), (47, 1), (1, 1), (8, 1)]),
            &set(&[(18, 1), (58, 1)]),
        );
        assert_eq!(facts.definition, Definition::TripleSplit);
        assert_eq!(facts.definition.label(), "Triple Split Definition");
        let facts = classify(
            &set(&[(64, 1), (47, 1), (1, 1), (8, 1)]),
            &set(&[(18, 1), (58, 1), (37, 1), (40, 1)]),
        );
        assert_eq!(facts.definition, Definition::QuadrupleSplit);
        assert_eq!(facts.component_count, 4);
    }

    #[test]
    fn more_than_four_components() {
        assert_eq!(Definition::from_component_count(5), Definition::MultipleSplits);
        assert_eq!(Definition::from_component_count(7).label(), "Multiple Splits Definition");
    }

    #[test]
    fn channel_needs_both_gates() {
        let facts = classify(&set(&[(20, 1)]), &set(&[(20, 2)]));
        assert!(facts.channels.is_empty());
        assert_eq!(facts.gate_source(20), Some(GateSource::Both));
        assert_eq!(facts.gate_source(34), None);
    }

    #[test]
    fn profile_and_angle() {
        let facts = classify(&set(&[(1, 4)]), &set(&[(2, 1)]));
        assert_eq!(facts.profile.to_string(), "4/1");
        assert_eq!(facts.angle, Some(AngleCategory::Juxtaposition));
        assert_eq!(AngleCategory::from_lines(5, 1), AngleCategory::LeftAngle);
        assert_eq!(AngleCategory::from_lines(6, 3), AngleCategory::LeftAngle);
        assert_eq!(AngleCategory::from_lines(4, 6), AngleCategory::RightAngle);
        assert_eq!(AngleCategory::from_lines(1, 3), AngleCategory::RightAngle);
    }

    #[test]
    fn profile_falls_back_to_earth_then_tbd() {
        let earth_only = ActivationSet::from_entries(vec![ActivationEntry::from_activation(
            ActivationPoint::Earth,
            Activation::new(2, 5).unwrap(),
        )]);
        let facts = classify(&earth_only, &set(&[(1, 2)]));
        assert_eq!(facts.profile.to_string(), "5/2");
        assert_eq!(facts.cross_gates, None);

        let facts = classify(&ActivationSet::default(), &set(&[(1, 2)]));
        assert_eq!(facts.profile, Profile::Undetermined);
        assert_eq!(facts.profile.to_string(), "TBD");
        assert_eq!(facts.angle, None);
    }

    #[test]
    fn cross_gates_order() {
        let facts = classify(&set(&[(13, 1), (7, 1)]), &set(&[(1, 3), (2, 3)]));
        assert_eq!(facts.cross_gates, Some([13, 7, 1, 2]));
    }

    #[test]
    fn graph_reachability() {
        let channels: Vec<Channel> = [(21, 45), (1, 8)]
            .iter()
            .filter_map(|&(a, b)| crate::channel::channel_between(a, b).copied())
            .collect();
        let graph = ActivationGraph::from_channels(&channels);
        assert!(graph.reaches([Center::Ego], Center::Throat));
        assert!(graph.reaches([Center::G], Center::Ego));
        assert!(!graph.reaches([Center::Root], Center::Throat));
        assert_eq!(graph.component_count(), 1);
    }
}
