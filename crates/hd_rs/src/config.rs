//! Per-request configuration.

use hd_render::DiagramStyle;
use hd_search::DesignSearchConfig;

/// Knobs for [`compute_chart`](crate::compute_chart).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartConfig {
    pub search: DesignSearchConfig,
    pub style: DiagramStyle,
}

impl ChartConfig {
    pub fn new(search: DesignSearchConfig, style: DiagramStyle) -> Self {
        Self { search, style }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.search.validate()?;
        if !(self.style.channel_width.is_finite() && self.style.channel_width > 0.0) {
            return Err("style.channel_width must be positive");
        }
        if !(self.style.grid_width.is_finite() && self.style.grid_width > 0.0) {
            return Err("style.grid_width must be positive");
        }
        Ok(())
    }
}
