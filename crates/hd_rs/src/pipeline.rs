//! Birth record → chart report.

use hd_chart::{CrossLookup, build_activation_sets, classify, resolve_cross};
use hd_core::Ephemeris;
use hd_ephem::AnalyticEphemeris;
use hd_render::render;
use hd_search::{ResolvedEpochs, resolve_epochs};
use hd_time::BirthInput;
use tracing::{debug, info_span};

use crate::config::ChartConfig;
use crate::error::HdError;
use crate::report::{ActivationRow, ChartReport, DiagramOutput};

/// Compute a full chart: epochs, activations, classification, diagram.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &BirthInput,
    cross_lookup: Option<&dyn CrossLookup>,
    config: &ChartConfig,
) -> Result<ChartReport, HdError> {
    config.validate().map_err(HdError::InvalidConfig)?;
    let _span = info_span!("compute_chart", date = %birth.date, time = %birth.time).entered();
    let epochs = resolve_epochs(ephemeris, birth, &config.search)?;
    chart_from_epochs(ephemeris, epochs, cross_lookup, config)
}

/// Finish a chart for already-resolved epochs.
pub fn chart_from_epochs<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    epochs: ResolvedEpochs,
    cross_lookup: Option<&dyn CrossLookup>,
    config: &ChartConfig,
) -> Result<ChartReport, HdError> {
    let (personality, design) =
        build_activation_sets(ephemeris, epochs.personality_jd, epochs.design_jd)?;
    let facts = classify(&personality, &design);
    let cross = resolve_cross(&facts, cross_lookup);
    let diagram = render(&facts, &config.style);

    debug!(
        chart_type = facts.chart_type.name(),
        profile = %facts.profile,
        channels = facts.channels.len(),
        "chart classified"
    );

    Ok(ChartReport {
        chart_type: facts.chart_type.name(),
        strategy: facts.strategy(),
        authority: facts.authority.name(),
        definition: facts.definition.label(),
        profile: facts.profile.to_string(),
        shadow_theme: facts.shadow_theme(),
        angle: facts.angle,
        cross_label: cross
            .as_ref()
            .map_or_else(|| "TBD".to_string(), |c| c.label.clone()),
        cross,
        defined_centers: facts.defined_centers().collect(),
        channels: facts.channels.iter().map(|c| c.key()).collect(),
        personality: ActivationRow::table(&personality),
        design: ActivationRow::table(&design),
        epochs,
        diagram: DiagramOutput {
            width: diagram.width(),
            height: diagram.height(),
            svg: diagram.to_svg(),
        },
        facts,
    })
}

/// Chart from text inputs using the built-in analytic ephemeris and defaults.
pub fn chart_for_birth(date: &str, time: &str, zone: &str) -> Result<ChartReport, HdError> {
    let birth = BirthInput::parse(date, time, zone)?;
    compute_chart(
        &AnalyticEphemeris::new(),
        &birth,
        None,
        &ChartConfig::default(),
    )
}
