//! Incarnation cross naming.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::definition::{AngleCategory, ChartFacts};
use crate::error::CrossTableError;

/// Source of cross descriptions keyed by angle and the four cross gates.
///
/// Gates are ordered personality Sun, personality Earth, design Sun, design
/// Earth. A missing entry is a normal outcome.
pub trait CrossLookup {
    fn lookup(&self, angle: AngleCategory, gates: [u8; 4]) -> Option<String>;
}

impl<L: CrossLookup + ?Sized> CrossLookup for &L {
    fn lookup(&self, angle: AngleCategory, gates: [u8; 4]) -> Option<String> {
        (**self).lookup(angle, gates)
    }
}

/// In-memory cross table.
#[derive(Debug, Clone, Default)]
pub struct CrossTable {
    entries: HashMap<(AngleCategory, [u8; 4]), String>,
}

#[derive(Deserialize)]
struct CrossRecord {
    angle: AngleCategory,
    gates: [u8; 4],
    description: String,
}

impl CrossTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, angle: AngleCategory, gates: [u8; 4], description: impl Into<String>) {
        self.entries.insert((angle, gates), description.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load from a JSON array of `{"angle", "gates", "description"}` records.
    ///
    /// `angle` is one of `"Right Angle"`, `"Juxtaposition"`, `"Left Angle"`.
    /// Later records replace earlier ones with the same key.
    pub fn from_json(json: &str) -> Result<Self, CrossTableError> {
        let records: Vec<CrossRecord> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for r in records {
            if let Some(&bad) = r.gates.iter().find(|g| !(1..=64).contains(*g)) {
                return Err(CrossTableError::InvalidGate(bad));
            }
            table.insert(r.angle, r.gates, r.description);
        }
        Ok(table)
    }
}

impl CrossLookup for CrossTable {
    fn lookup(&self, angle: AngleCategory, gates: [u8; 4]) -> Option<String> {
        self.entries.get(&(angle, gates)).cloned()
    }
}

/// Resolved cross for a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cross {
    pub angle: AngleCategory,
    pub gates: [u8; 4],
    pub label: String,
    /// Text from the lookup, when it had an entry.
    pub description: Option<String>,
}

/// Generated label, e.g. `"Right Angle Cross (13/7 | 1/2)"`.
pub fn fallback_label(angle: AngleCategory, gates: [u8; 4]) -> String {
    let [a, b, c, d] = gates;
    format!("{angle} Cross ({a}/{b} | {c}/{d})")
}

/// Name the cross of a classified chart.
///
/// Returns `None` when the profile or the Sun/Earth gates are undetermined.
pub fn resolve_cross(facts: &ChartFacts, lookup: Option<&dyn CrossLookup>) -> Option<Cross> {
    let angle = facts.angle?;
    let gates = facts.cross_gates?;
    let description = lookup.and_then(|l| l.lookup(angle, gates));
    let label = description
        .clone()
        .unwrap_or_else(|| fallback_label(angle, gates));
    Some(Cross {
        angle,
        gates,
        label,
        description,
    })
}
