//! Types for the design epoch search.

use std::time::Duration;

use hd_time::UtcTime;
use serde::Serialize;

/// Direction rule for search steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SearchStepping {
    /// Always step earlier by `|residual| / rate`.
    #[default]
    BackwardOnly,
    /// Step by `residual / rate`, earlier or later.
    Signed,
}

/// Configuration for the design search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignSearchConfig {
    /// Solar arc between design and birth (default 88).
    pub arc_deg: f64,
    /// Mean solar motion used for the initial guess and step size (default 0.9856).
    pub mean_sun_rate_deg_per_day: f64,
    /// Convergence tolerance on the Sun residual (default 0.01).
    pub tolerance_deg: f64,
    /// Maximum steps (default 12).
    pub max_iterations: u32,
    /// Safety bound on how far before birth the guess may drift (default 365).
    pub max_backward_days: f64,
    /// Steps shorter than this stop the search (default 1e-6).
    pub min_step_days: f64,
    pub stepping: SearchStepping,
    /// Optional wall-clock budget for the whole search.
    pub deadline: Option<Duration>,
}

impl Default for DesignSearchConfig {
    fn default() -> Self {
        Self {
            arc_deg: 88.0,
            mean_sun_rate_deg_per_day: 0.9856,
            tolerance_deg: 0.01,
            max_iterations: 12,
            max_backward_days: 365.0,
            min_step_days: 1e-6,
            stepping: SearchStepping::BackwardOnly,
            deadline: None,
        }
    }
}

impl DesignSearchConfig {
    pub fn with_stepping(mut self, stepping: SearchStepping) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.arc_deg.is_finite() || self.arc_deg <= 0.0 || self.arc_deg >= 360.0 {
            return Err("arc_deg must be in (0, 360)");
        }
        if !self.mean_sun_rate_deg_per_day.is_finite() || self.mean_sun_rate_deg_per_day <= 0.0 {
            return Err("mean_sun_rate_deg_per_day must be positive");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.max_backward_days.is_finite() || self.max_backward_days <= 0.0 {
            return Err("max_backward_days must be positive");
        }
        if !self.min_step_days.is_finite() || self.min_step_days < 0.0 {
            return Err("min_step_days must be non-negative");
        }
        Ok(())
    }
}

/// How a successful search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchStop {
    /// Residual fell below the tolerance.
    Converged,
    /// The next step would have been shorter than `min_step_days`.
    NegligibleStep,
}

/// Outcome of the design search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignSearch {
    /// Design instant, JD UT.
    pub jd_ut: f64,
    /// Sun longitude the search aimed for.
    pub target_longitude_deg: f64,
    /// Ephemeris evaluations at a guess (the birth Sun query is not counted).
    pub iterations: u32,
    /// Signed Sun residual at `jd_ut`.
    pub residual_deg: f64,
    pub stop: SearchStop,
}

/// Personality and design epochs for one birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedEpochs {
    pub personality_jd: f64,
    pub personality_utc: UtcTime,
    pub design_jd: f64,
    pub design_utc: UtcTime,
    pub search: DesignSearch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DesignSearchConfig::default();
        assert_eq!(c.arc_deg, 88.0);
        assert_eq!(c.mean_sun_rate_deg_per_day, 0.9856);
        assert_eq!(c.tolerance_deg, 0.01);
        assert_eq!(c.max_iterations, 12);
        assert_eq!(c.max_backward_days, 365.0);
        assert_eq!(c.stepping, SearchStepping::BackwardOnly);
        assert!(c.deadline.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut c = DesignSearchConfig::default();
        c.max_iterations = 0;
        assert!(c.validate().is_err());

        let mut c = DesignSearchConfig::default();
        c.mean_sun_rate_deg_per_day = f64::NAN;
        assert!(c.validate().is_err());

        let mut c = DesignSearchConfig::default();
        c.arc_deg = 360.0;
        assert!(c.validate().is_err());

        let mut c = DesignSearchConfig::default();
        c.tolerance_deg = 0.0;
        assert!(c.validate().is_err());
    }
}
