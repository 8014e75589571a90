//! Colors and stroke widths.

use hd_chart::{CenterStatus, GateSource};

/// Palette for a rendered diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramStyle {
    pub background: String,
    /// Personality activations.
    pub personality: String,
    /// Design activations.
    pub design: String,
    /// Inactive channel grid.
    pub grid: String,
    pub outline: String,
    pub open_fill: String,
    pub personality_fill: String,
    pub design_fill: String,
    pub both_fill: String,
    pub label_text: String,
    pub label_on_color: String,
    pub grid_width: f64,
    pub channel_width: f64,
    pub dash: String,
    pub font_family: String,
    pub font_size: f64,
    pub label_radius: f64,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            background: "#ffffff".into(),
            personality: "#000000".into(),
            design: "#c62828".into(),
            grid: "#d6d6d6".into(),
            outline: "#5f5f5f".into(),
            open_fill: "#ffffff".into(),
            personality_fill: "#b7b7b7".into(),
            design_fill: "#f2b8b5".into(),
            both_fill: "#e2c27a".into(),
            label_text: "#333333".into(),
            label_on_color: "#ffffff".into(),
            grid_width: 5.0,
            channel_width: 5.0,
            dash: "4 3".into(),
            font_family: "Helvetica, Arial, sans-serif".into(),
            font_size: 8.0,
            label_radius: 7.0,
        }
    }
}

impl DiagramStyle {
    pub fn center_fill(&self, status: CenterStatus) -> &str {
        match status {
            CenterStatus::Open => &self.open_fill,
            CenterStatus::Personality => &self.personality_fill,
            CenterStatus::Design => &self.design_fill,
            CenterStatus::Both => &self.both_fill,
        }
    }

    /// Solid stroke for a source; `Both` draws design with a personality dash on top.
    pub fn source_stroke(&self, source: GateSource) -> &str {
        match source {
            GateSource::Personality => &self.personality,
            GateSource::Design | GateSource::Both => &self.design,
        }
    }
}
