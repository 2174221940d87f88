//! # Stowage Core
//!
//! Core types and traits for the Stowage container-loading engine.
//!
//! This crate provides the foundational pieces shared by the packing
//! engines: the error type, the quantity sentinel, engine configuration,
//! placement records and the solve result.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod placement;
pub mod quantity;
pub mod result;
pub mod solver;

// Re-exports
pub use config::PackConfig;
pub use error::{Error, Result};
pub use placement::PlacedBox;
pub use quantity::Quantity;
pub use result::{PackResult, PackSummary};
pub use solver::Solver;
