//! Pack result representation.

use crate::placement::PlacedBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// All successfully placed box instances, in placement order.
    pub placements: Vec<PlacedBox>,

    /// Packed volume divided by container volume (0.0 - 1.0).
    pub efficiency: f64,

    /// Caller-facing capacity placeholder. No exact capacity upper bound is
    /// computed; this is always `None`, distinguishable from a real value.
    pub total_capacity: Option<usize>,

    /// Computation time in milliseconds. Informational only; not part of
    /// the deterministic placement contract.
    pub computation_time_ms: u64,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            efficiency: 0.0,
            total_capacity: None,
            computation_time_ms: 0,
        }
    }

    /// Returns the number of placed box instances.
    pub fn count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if at least one box was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Returns the total volume of all placed boxes.
    pub fn packed_volume(&self) -> f64 {
        self.placements.iter().map(PlacedBox::volume).sum()
    }

    /// Returns efficiency as a percentage string.
    pub fn efficiency_percent(&self) -> String {
        format!("{:.1}%", self.efficiency * 100.0)
    }
}

impl Default for PackResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat summary of a pack result, for metrics display.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Number of placed box instances.
    pub count: usize,
    /// Efficiency percentage.
    pub efficiency_percent: f64,
    /// Capacity placeholder (always `None`).
    pub total_capacity: Option<usize>,
    /// Computation time in milliseconds.
    pub time_ms: u64,
}

impl From<&PackResult> for PackSummary {
    fn from(result: &PackResult) -> Self {
        Self {
            count: result.count(),
            efficiency_percent: result.efficiency * 100.0,
            total_capacity: result.total_capacity,
            time_ms: result.computation_time_ms,
        }
    }
}
