//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a packing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackConfig {
    /// Whether the six axis-aligned orientations may be tried for each box.
    /// When false only the box's given orientation is used.
    pub allow_rotation: bool,

    /// Hard cap on units placed for a single box type. Bounds unlimited
    /// quantity requests so a pathological input cannot run unbounded.
    pub max_units_per_type: usize,

    /// Overall unit budget across all box types. When reached, packing
    /// stops as if placement had failed, not as an error.
    pub max_total_units: usize,

    /// Thickness of the slice probed directly beneath a candidate point
    /// when checking the support rule. A heuristic approximation of
    /// "resting on", not exact contact geometry.
    pub support_epsilon: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            max_units_per_type: 10_000,
            max_total_units: 100_000,
            support_epsilon: 0.1,
        }
    }
}

impl PackConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation policy.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    /// Sets the per-type unit cap.
    pub fn with_max_units_per_type(mut self, cap: usize) -> Self {
        self.max_units_per_type = cap;
        self
    }

    /// Sets the overall unit budget.
    pub fn with_max_total_units(mut self, budget: usize) -> Self {
        self.max_total_units = budget;
        self
    }

    /// Sets the support slice epsilon.
    pub fn with_support_epsilon(mut self, epsilon: f64) -> Self {
        self.support_epsilon = epsilon;
        self
    }
}
