//! Chart analysis: the gate wheel, activation sets, and definition.
//!
//! ```text
//! longitudes ──wheel──▶ ActivationSet ×2 ──classify──▶ ChartFacts ──▶ Cross
//! ```
//!
//! Everything here except [`build_activation_sets`] is pure and total.

pub mod activation;
pub mod center;
pub mod channel;
pub mod cross;
pub mod definition;
pub mod error;
pub mod wheel;

pub use activation::{
    ALL_POINTS, ActivationEntry, ActivationPoint, ActivationSet, build_activation_set,
    build_activation_sets,
};
pub use center::{ALL_CENTERS, Center, MOTOR_CENTERS, center_of_gate};
pub use channel::{CHANNELS, Channel, channel_between, channels_of_gate};
pub use cross::{Cross, CrossLookup, CrossTable, fallback_label, resolve_cross};
pub use definition::{
    ActivationGraph, AngleCategory, Authority, CenterStatus, ChartFacts, ChartType, Definition,
    GateSource, Profile, activated_gates, classify,
};
pub use error::{ChartError, CrossTableError};
pub use wheel::{
    Activation, GATE_ORDER, GATE_SPAN_DEG, GateInfo, LINE_SPAN_DEG, ParseActivationError,
    WHEEL_ANCHOR_DEG, gate_from_longitude, gate_start_longitude, try_gate_from_longitude,
};
