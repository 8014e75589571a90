//! One-call bodygraph charts.
//!
//! ```rust,ignore
//! use hd_rs::*;
//!
//! let birth = BirthInput::parse("1990-08-15", "12:00", "Europe/Berlin")?;
//! let report = compute_chart(&AnalyticEphemeris::new(), &birth, None, &ChartConfig::default())?;
//! println!("{} {} ({})", report.chart_type, report.profile, report.authority);
//! ```
//!
//! Any [`Ephemeris`] implementation can replace the analytic backend.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::ChartConfig;
pub use error::HdError;
pub use pipeline::{chart_for_birth, chart_from_epochs, compute_chart};
pub use report::{ActivationRow, ChartReport, DiagramOutput};

pub use hd_chart::{
    Activation, ActivationPoint, ActivationSet, AngleCategory, Authority, Center, CenterStatus,
    ChartFacts, ChartType, Cross, CrossLookup, CrossTable, Definition, GateSource, Profile,
    gate_from_longitude,
};
pub use hd_core::{Body, Ephemeris, EphemerisError, EphemerisTarget};
pub use hd_ephem::AnalyticEphemeris;
pub use hd_render::{DiagramStyle, render};
pub use hd_search::{DesignSearchConfig, ResolvedEpochs, SearchStepping};
pub use hd_time::{BirthInput, BirthZone, UtcTime};
