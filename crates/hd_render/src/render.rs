//! Chart facts → diagram.
//!
//! Paint order: channel grid, active channel overlays, the hub, center
//! shapes, gate labels. Gates or channels without a usable anchor are
//! skipped.

use hd_chart::{ALL_CENTERS, CHANNELS, CenterStatus, ChartFacts, GateSource};
use tracing::debug;

use crate::anchor::{ANCHORS, anchor_point, is_consistent};
use crate::diagram::{Diagram, Primitive};
use crate::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH, Point, shape};
use crate::hub::{draw_hub, is_hub_channel};
use crate::style::DiagramStyle;

/// Render a classified chart.
pub fn render(facts: &ChartFacts, style: &DiagramStyle) -> Diagram {
    let mut diagram = Diagram::new(CANVAS_WIDTH, CANVAS_HEIGHT, style.background.as_str());
    draw_channels(&mut diagram, facts, style);
    draw_hub(&mut diagram, facts, style);
    draw_centers(&mut diagram, facts, style);
    draw_labels(&mut diagram, facts, style);
    debug!(
        primitives = diagram.primitives().len(),
        channels = facts.channels.len(),
        "rendered bodygraph"
    );
    diagram
}

/// Draw one colored channel segment for a gate source.
pub(crate) fn stroke_segment(
    diagram: &mut Diagram,
    style: &DiagramStyle,
    from: Point,
    to: Point,
    source: GateSource,
) {
    diagram.line(from, to, style.source_stroke(source), style.channel_width);
    if source == GateSource::Both {
        diagram.dashed_line(from, to, &style.personality, style.channel_width, &style.dash);
    }
}

fn draw_channels(diagram: &mut Diagram, facts: &ChartFacts, style: &DiagramStyle) {
    let drawable = || {
        CHANNELS
            .iter()
            .filter(|c| !is_hub_channel(c))
            .filter_map(|c| Some((c, anchor_point(c.gates.0)?, anchor_point(c.gates.1)?)))
    };

    for (_, a, b) in drawable() {
        diagram.line(a, b, &style.grid, style.grid_width);
    }

    for (channel, a, b) in drawable().filter(|(c, _, _)| facts.is_channel_active(c)) {
        let (Some(sa), Some(sb)) = (
            facts.gate_source(channel.gates.0),
            facts.gate_source(channel.gates.1),
        ) else {
            continue;
        };
        let mid = a.midpoint(b);
        stroke_segment(diagram, style, a, mid, sa);
        stroke_segment(diagram, style, mid, b, sb);
    }
}

fn draw_centers(diagram: &mut Diagram, facts: &ChartFacts, style: &DiagramStyle) {
    for center in ALL_CENTERS {
        let shape = shape(center);
        diagram.push(Primitive::Polygon {
            points: shape.vertices.to_vec(),
            fill: style.center_fill(facts.center_status(center)).to_string(),
            stroke: style.outline.clone(),
            stroke_width: 1.5,
        });
    }
}

fn draw_labels(diagram: &mut Diagram, facts: &ChartFacts, style: &DiagramStyle) {
    for anchor in &ANCHORS {
        debug_assert!(is_consistent(anchor), "anchor for gate {}", anchor.gate);
        let Some(at) = anchor.label_point() else {
            continue;
        };
        let (fill, stroke, text) = match facts.center_status(anchor.center) {
            CenterStatus::Open => (&style.open_fill, &style.outline, &style.label_text),
            CenterStatus::Personality => (&style.personality, &style.personality, &style.label_on_color),
            CenterStatus::Design => (&style.design, &style.design, &style.label_on_color),
            CenterStatus::Both => (&style.design, &style.personality, &style.label_on_color),
        };
        diagram.push(Primitive::Circle {
            center: at,
            radius: style.label_radius,
            fill: fill.clone(),
            stroke: stroke.clone(),
        });
        diagram.push(Primitive::Text {
            at,
            text: anchor.gate.to_string(),
            fill: text.clone(),
            size: style.font_size,
            font_family: style.font_family.clone(),
        });
    }
}
