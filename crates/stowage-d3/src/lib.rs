//! # Stowage 3D
//!
//! Deterministic 3D container-loading engine.
//!
//! Given one rectangular container and an ordered list of box types, the
//! engine computes a non-overlapping placement of boxes via a point-driven
//! greedy first-fit heuristic. Placement is fully deterministic: identical
//! inputs always produce identical placement lists.

pub mod container;
pub mod geometry;
pub mod packer;
pub mod point;

// Re-exports
pub use container::Container;
pub use geometry::BoxType;
pub use packer::{pack, Packer3D};
pub use point::{CandidateSet, PointOrder};
pub use stowage_core::{PackConfig, PackResult, PackSummary, PlacedBox, Quantity, Solver};
