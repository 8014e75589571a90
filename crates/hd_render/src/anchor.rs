//! Where each gate sits on its center's outline.

use hd_chart::Center::{self, Ajna, Ego, G, Head, Root, Sacral, SolarPlexus, Spleen, Throat};
use hd_chart::center_of_gate;

use crate::geometry::{Point, shape};

/// Pixels a gate label moves from its anchor toward the shape centroid.
pub const LABEL_INSET_PX: f64 = 11.0;

/// Placement of a gate: a fraction along one side of its center, plus a
/// small pixel nudge for crowded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateAnchor {
    pub gate: u8,
    pub center: Center,
    pub side: usize,
    pub t: f64,
    pub nudge: (f64, f64),
}

const fn a(gate: u8, center: Center, side: usize, t: f64) -> GateAnchor {
    GateAnchor {
        gate,
        center,
        side,
        t,
        nudge: (0.0, 0.0),
    }
}

const fn n(gate: u8, center: Center, side: usize, t: f64, dx: f64, dy: f64) -> GateAnchor {
    GateAnchor {
        gate,
        center,
        side,
        t,
        nudge: (dx, dy),
    }
}

#[rustfmt::skip]
pub static ANCHORS: [GateAnchor; 64] = [
    a(63, Head, 1, 0.1667), a(61, Head, 1, 0.5), a(64, Head, 1, 0.8333),

    a(47, Ajna, 0, 0.1667), a(24, Ajna, 0, 0.5), a(4, Ajna, 0, 0.8333),
    a(17, Ajna, 2, 0.5), n(43, Ajna, 2, 0.05, 0.0, -3.0), a(11, Ajna, 1, 0.5),

    a(62, Throat, 0, 0.1875), a(23, Throat, 0, 0.5), a(56, Throat, 0, 0.8125),
    a(20, Throat, 3, 0.25), a(16, Throat, 3, 0.6),
    a(35, Throat, 1, 0.2), a(12, Throat, 1, 0.45), a(45, Throat, 1, 0.75),
    a(33, Throat, 2, 0.2), a(8, Throat, 2, 0.5), a(31, Throat, 2, 0.8),

    a(7, G, 3, 0.7), a(10, G, 3, 0.3),
    n(1, G, 0, 0.05, 0.0, 3.0), a(13, G, 0, 0.3), a(25, G, 0, 0.75),
    a(15, G, 2, 0.35), n(2, G, 2, 0.02, 0.0, -3.0),
    a(46, G, 1, 0.7),

    a(21, Ego, 0, 0.3), a(51, Ego, 2, 0.6), a(26, Ego, 2, 0.15), a(40, Ego, 1, 0.3),

    a(48, Spleen, 0, 0.15), a(57, Spleen, 0, 0.45), a(44, Spleen, 0, 0.8),
    a(50, Spleen, 1, 0.15), a(32, Spleen, 1, 0.4), a(28, Spleen, 1, 0.65),
    n(18, Spleen, 1, 0.9, 2.0, 0.0),

    n(6, SolarPlexus, 2, 0.15, 2.0, 0.0), a(37, SolarPlexus, 2, 0.45),
    a(22, SolarPlexus, 2, 0.7), a(36, SolarPlexus, 2, 0.9),
    a(30, SolarPlexus, 1, 0.1), a(55, SolarPlexus, 1, 0.35), a(49, SolarPlexus, 1, 0.6),

    a(5, Sacral, 0, 0.2), a(14, Sacral, 0, 0.5), a(29, Sacral, 0, 0.8),
    a(27, Sacral, 3, 0.3), a(34, Sacral, 3, 0.75),
    a(59, Sacral, 1, 0.45),
    a(9, Sacral, 2, 0.2), a(3, Sacral, 2, 0.5), a(42, Sacral, 2, 0.8),

    a(53, Root, 0, 0.2), a(60, Root, 0, 0.5), a(52, Root, 0, 0.8),
    a(58, Root, 3, 0.25), a(38, Root, 3, 0.5), a(54, Root, 3, 0.75),
    a(19, Root, 1, 0.25), a(39, Root, 1, 0.5), a(41, Root, 1, 0.75),
];

pub fn anchor(gate: u8) -> Option<&'static GateAnchor> {
    ANCHORS.iter().find(|a| a.gate == gate)
}

impl GateAnchor {
    /// Point on the outline where the gate's channels attach.
    pub fn point(&self) -> Option<Point> {
        let (from, to) = shape(self.center).side(self.side)?;
        Some(from.lerp(to, self.t).offset(self.nudge.0, self.nudge.1))
    }

    /// Center of the gate's label bubble, inset toward the centroid.
    pub fn label_point(&self) -> Option<Point> {
        let centroid = shape(self.center).centroid();
        Some(self.point()?.toward(centroid, LABEL_INSET_PX))
    }
}

/// Attachment point for a gate, `None` when the table has no usable entry.
pub fn anchor_point(gate: u8) -> Option<Point> {
    anchor(gate)?.point()
}

/// Debug check that the table agrees with gate ownership.
pub(crate) fn is_consistent(anchor: &GateAnchor) -> bool {
    center_of_gate(anchor.gate) == Some(anchor.center)
}
