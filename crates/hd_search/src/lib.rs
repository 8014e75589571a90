//! Epoch resolution for charts.
//!
//! This crate provides:
//! - Birth wall-clock time → personality instant (via `hd_time`)
//! - The iterative design search: the instant the Sun stood 88° earlier

pub mod design;
pub mod design_types;
pub mod error;

pub use design::{design_jd, resolve_epochs};
pub use design_types::{
    DesignSearch, DesignSearchConfig, ResolvedEpochs, SearchStepping, SearchStop,
};
pub use error::{SearchError, UnresolvedReason};
