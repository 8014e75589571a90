//! The shared hub of gates 10, 20, 34 and 57.
//!
//! The six channels among these gates share one drawn spine running from
//! the 57 anchor to the 20 anchor. Gate 34 joins the spine at J1 (a fifth of
//! the way up) and gate 10 at J2 (halfway). A hub channel is drawn as the
//! arm from each gate's anchor to its junction plus, when the junctions
//! differ, the spine between them split at its midpoint.

use hd_chart::{Channel, ChartFacts, GateSource};

use crate::anchor::anchor_point;
use crate::diagram::Diagram;
use crate::geometry::Point;
use crate::render::stroke_segment;
use crate::style::DiagramStyle;

pub const HUB_GATES: [u8; 4] = [10, 20, 34, 57];

/// Spine fraction where 34 joins.
pub const J1_FRACTION: f64 = 0.20;
/// Spine fraction where 10 joins.
pub const J2_FRACTION: f64 = 0.50;

pub fn is_hub_channel(channel: &Channel) -> bool {
    HUB_GATES.contains(&channel.gates.0) && HUB_GATES.contains(&channel.gates.1)
}

/// Resolved hub points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HubLayout {
    pub a10: Point,
    pub a20: Point,
    pub a34: Point,
    pub a57: Point,
    pub j1: Point,
    pub j2: Point,
}

impl HubLayout {
    pub fn resolve() -> Option<Self> {
        let a57 = anchor_point(57)?;
        let a20 = anchor_point(20)?;
        Some(Self {
            a10: anchor_point(10)?,
            a20,
            a34: anchor_point(34)?,
            a57,
            j1: a57.lerp(a20, J1_FRACTION),
            j2: a57.lerp(a20, J2_FRACTION),
        })
    }

    /// Anchor and junction for a hub gate.
    fn arm(&self, gate: u8) -> Option<(Point, Point)> {
        match gate {
            57 => Some((self.a57, self.j1)),
            34 => Some((self.a34, self.j1)),
            10 => Some((self.a10, self.j2)),
            20 => Some((self.a20, self.j2)),
            _ => None,
        }
    }
}

pub(crate) fn draw_hub(diagram: &mut Diagram, facts: &ChartFacts, style: &DiagramStyle) {
    let Some(hub) = HubLayout::resolve() else {
        return;
    };

    diagram.line(hub.a57, hub.a20, &style.grid, style.grid_width);
    diagram.line(hub.a34, hub.j1, &style.grid, style.grid_width);
    diagram.line(hub.a10, hub.j2, &style.grid, style.grid_width);

    for channel in facts.channels.iter().filter(|c| is_hub_channel(c)) {
        let (ga, gb) = channel.gates;
        let (Some(sa), Some(sb)) = (facts.gate_source(ga), facts.gate_source(gb)) else {
            continue;
        };
        let (Some(arm_a), Some(arm_b)) = (hub.arm(ga), hub.arm(gb)) else {
            continue;
        };
        draw_route(diagram, style, (arm_a, sa), (arm_b, sb));
    }
}

fn draw_route(
    diagram: &mut Diagram,
    style: &DiagramStyle,
    ((anchor_a, junction_a), source_a): ((Point, Point), GateSource),
    ((anchor_b, junction_b), source_b): ((Point, Point), GateSource),
) {
    stroke_segment(diagram, style, anchor_a, junction_a, source_a);
    if junction_a != junction_b {
        let mid = junction_a.midpoint(junction_b);
        stroke_segment(diagram, style, junction_a, mid, source_a);
        stroke_segment(diagram, style, mid, junction_b, source_b);
    }
    stroke_segment(diagram, style, junction_b, anchor_b, source_b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_chart::CHANNELS;

    #[test]
    fn six_hub_channels() {
        let hub: Vec<_> = CHANNELS.iter().filter(|c| is_hub_channel(c)).collect();
        assert_eq!(hub.len(), 6);
        for ch in CHANNELS.iter().filter(|c| !is_hub_channel(c)) {
            assert!(!HUB_GATES.contains(&ch.gates.0) && !HUB_GATES.contains(&ch.gates.1));
        }
    }

    #[test]
    fn junctions_lie_on_spine() {
        let hub = HubLayout::resolve().unwrap();
        let spine = hub.a57.distance(hub.a20);
        assert!((hub.a57.distance(hub.j1) - 0.2 * spine).abs() < 1e-9);
        assert!((hub.a57.distance(hub.j2) - 0.5 * spine).abs() < 1e-9);
    }
}
