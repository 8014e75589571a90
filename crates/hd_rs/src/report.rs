//! The engine output contract.

use hd_chart::{ActivationSet, AngleCategory, Center, ChartFacts, Cross};
use hd_search::ResolvedEpochs;
use serde::Serialize;

/// One row of an activation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationRow {
    pub point: &'static str,
    pub glyph: &'static str,
    pub longitude_deg: f64,
    pub gate: u8,
    pub line: u8,
    /// `gate.line`.
    pub activation: String,
}

impl ActivationRow {
    pub fn table(set: &ActivationSet) -> Vec<Self> {
        set.iter()
            .map(|e| Self {
                point: e.point.name(),
                glyph: e.point.glyph(),
                longitude_deg: e.longitude_deg,
                gate: e.activation.gate,
                line: e.activation.line,
                activation: e.activation.to_string(),
            })
            .collect()
    }
}

/// Rendered diagram and its canvas size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramOutput {
    pub width: f64,
    pub height: f64,
    pub svg: String,
}

/// Complete result of one chart computation.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub strategy: &'static str,
    pub authority: &'static str,
    pub definition: &'static str,
    pub profile: String,
    pub shadow_theme: &'static str,
    pub angle: Option<AngleCategory>,
    /// Looked-up description or the generated cross label; `"TBD"` while
    /// the profile is undetermined.
    pub cross_label: String,
    pub cross: Option<Cross>,
    pub defined_centers: Vec<Center>,
    /// Active channels as `a-b`.
    pub channels: Vec<String>,
    pub personality: Vec<ActivationRow>,
    pub design: Vec<ActivationRow>,
    pub epochs: ResolvedEpochs,
    pub diagram: DiagramOutput,
    /// Full classification for programmatic callers.
    #[serde(skip)]
    pub facts: ChartFacts,
}
