//! Quantity sentinel for box type requests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Requested number of units for a box type.
///
/// The form layer encodes "pack as many as fit" as a raw quantity of zero;
/// internally that sentinel is represented as an explicit variant so it can
/// never be confused with a real count. An `Unlimited` request is still
/// bounded by the engine's per-type hard cap during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quantity {
    /// Place exactly this many units (fewer if they stop fitting).
    Limited(usize),
    /// Place units until one fails to fit, subject to the engine cap.
    Unlimited,
}

impl Quantity {
    /// Maps the form layer's raw quantity to the tagged representation.
    /// Zero is the "pack as many as fit" sentinel.
    pub fn from_raw(raw: usize) -> Self {
        if raw == 0 {
            Quantity::Unlimited
        } else {
            Quantity::Limited(raw)
        }
    }

    /// Returns the number of placement attempts this request allows,
    /// with `cap` bounding unlimited requests.
    pub fn effective(&self, cap: usize) -> usize {
        match *self {
            Quantity::Limited(n) => n,
            Quantity::Unlimited => cap,
        }
    }

    /// Returns true for the "pack as many as fit" request.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Quantity::Unlimited)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Limited(1)
    }
}
