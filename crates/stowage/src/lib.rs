//! # Stowage
//!
//! Deterministic 3D container-loading engine.
//!
//! Given one rectangular container and an ordered list of box types, the
//! engine computes a non-overlapping placement of boxes that maximizes
//! packed volume under a simplified stacking rule: a box above floor level
//! must rest on a box of the same type.
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage::{pack, BoxType, Quantity};
//!
//! let types = vec![
//!     BoxType::new(50.0, 50.0, 50.0).with_quantity(Quantity::Limited(4)),
//!     BoxType::new(30.0, 30.0, 30.0).with_quantity(Quantity::Unlimited),
//! ];
//!
//! let result = pack(200.0, 100.0, 100.0, &types, true);
//! println!("{} boxes, {}", result.count(), result.efficiency_percent());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for inputs and results

/// Core types and traits.
pub use stowage_core as core;

/// The 3D packing engine.
pub use stowage_d3 as d3;

// Re-export commonly used types at root level
pub use stowage_core::{PackConfig, PackResult, PackSummary, PlacedBox, Quantity, Solver};
pub use stowage_d3::{pack, BoxType, Container, Packer3D};
