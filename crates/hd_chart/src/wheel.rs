//! The 64-gate wheel: ecliptic longitude → gate and line.
//!
//! The ecliptic is cut into 64 equal gates of 5°37'30" (5.625°), laid out
//! in a fixed non-sequential order that starts with gate 41 at 2° Aquarius
//! (302° tropical). Each gate holds 6 lines of 0°56'15" (0.9375°).
//!
//! Floors use a small tolerance so a longitude sitting on a boundary (up to
//! floating-point jitter) belongs to the arc that begins there. A line index
//! that reaches 6 rolls over to line 1 of the next gate on the wheel.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use hd_core::normalize_360;
use serde::{Serialize, Serializer};

use crate::error::ChartError;

/// Number of gates on the wheel.
pub const GATE_COUNT: usize = 64;

/// Lines per gate.
pub const LINES_PER_GATE: u8 = 6;

/// Span of one gate: 360/64 = 5.625 degrees.
pub const GATE_SPAN_DEG: f64 = 360.0 / GATE_COUNT as f64;

/// Span of one line: 5.625/6 = 0.9375 degrees.
pub const LINE_SPAN_DEG: f64 = GATE_SPAN_DEG / LINES_PER_GATE as f64;

/// Tropical longitude where the first gate of [`GATE_ORDER`] begins.
pub const WHEEL_ANCHOR_DEG: f64 = 302.0;

/// Tolerance, in index units, absorbed when flooring gate and line indices.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Gates in order of increasing longitude, starting at [`WHEEL_ANCHOR_DEG`].
#[rustfmt::skip]
pub const GATE_ORDER: [u8; GATE_COUNT] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42,  3,
    27, 24,  2, 23,  8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56,
    31, 33,  7,  4, 29, 59, 40, 64, 47,  6, 46, 18, 48, 57, 32, 50,
    28, 44,  1, 43, 14, 34,  9,  5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// A gate and line pair, written `gate.line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Activation {
    /// Gate number, 1..=64.
    pub gate: u8,
    /// Line number, 1..=6.
    pub line: u8,
}

impl Activation {
    /// Construct, returning `None` when either component is out of range.
    pub fn new(gate: u8, line: u8) -> Option<Self> {
        if (1..=64).contains(&gate) && (1..=LINES_PER_GATE).contains(&line) {
            Some(Self { gate, line })
        } else {
            None
        }
    }

    /// Longitude at the middle of this gate and line.
    pub fn midpoint_longitude(self) -> f64 {
        let start = gate_start_longitude(self.gate).unwrap_or(WHEEL_ANCHOR_DEG);
        normalize_360(start + (self.line as f64 - 0.5) * LINE_SPAN_DEG)
    }
}

impl Display for Activation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.gate, self.line)
    }
}

impl Serialize for Activation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error parsing `gate.line` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid activation {0:?}, expected gate.line with gate 1-64 and line 1-6")]
pub struct ParseActivationError(String);

impl FromStr for Activation {
    type Err = ParseActivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseActivationError(s.to_string());
        let (gate, line) = s.trim().split_once('.').ok_or_else(err)?;
        let gate: u8 = gate.parse().map_err(|_| err())?;
        let line: u8 = line.parse().map_err(|_| err())?;
        Self::new(gate, line).ok_or_else(err)
    }
}

/// Result of a wheel lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateInfo {
    /// Gate and line.
    pub activation: Activation,
    /// Position of the gate in [`GATE_ORDER`], 0..64.
    pub gate_rank: u8,
    /// Longitude in [0, 360) where the gate begins.
    pub start_longitude: f64,
    /// Decimal degrees travelled inside the gate [0.0, 5.625).
    pub degrees_in_gate: f64,
}

impl GateInfo {
    pub fn gate(&self) -> u8 {
        self.activation.gate
    }

    pub fn line(&self) -> u8 {
        self.activation.line
    }
}

/// Map a tropical ecliptic longitude onto the wheel.
///
/// Total over finite input: every longitude yields exactly one gate with a
/// line in 1..=6. Non-finite input yields an unspecified but in-range
/// result; use [`try_gate_from_longitude`] to reject it.
pub fn gate_from_longitude(lon_deg: f64) -> GateInfo {
    let offset = normalize_360(lon_deg - WHEEL_ANCHOR_DEG);
    let mut rank = ((offset / GATE_SPAN_DEG + BOUNDARY_EPSILON).floor() as usize).min(GATE_COUNT);
    let mut degrees_in_gate = (offset - rank as f64 * GATE_SPAN_DEG).max(0.0);
    if rank == GATE_COUNT {
        rank = 0;
        degrees_in_gate = 0.0;
    }

    let mut line_index = (degrees_in_gate / LINE_SPAN_DEG + BOUNDARY_EPSILON).floor() as usize;
    if line_index >= LINES_PER_GATE as usize {
        rank = (rank + 1) % GATE_COUNT;
        line_index = 0;
        degrees_in_gate = 0.0;
    }

    GateInfo {
        activation: Activation {
            gate: GATE_ORDER[rank],
            line: line_index as u8 + 1,
        },
        gate_rank: rank as u8,
        start_longitude: normalize_360(WHEEL_ANCHOR_DEG + rank as f64 * GATE_SPAN_DEG),
        degrees_in_gate,
    }
}

/// [`gate_from_longitude`] that rejects NaN and infinities.
pub fn try_gate_from_longitude(lon_deg: f64) -> Result<GateInfo, ChartError> {
    if lon_deg.is_finite() {
        Ok(gate_from_longitude(lon_deg))
    } else {
        Err(ChartError::NonFiniteLongitude(lon_deg))
    }
}

/// Longitude in [0, 360) where a gate begins, or `None` for an invalid gate.
pub fn gate_start_longitude(gate: u8) -> Option<f64> {
    GATE_ORDER
        .iter()
        .position(|&g| g == gate)
        .map(|rank| normalize_360(WHEEL_ANCHOR_DEG + rank as f64 * GATE_SPAN_DEG))
}
