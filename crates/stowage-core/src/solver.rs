//! Solver trait.

use crate::result::PackResult;
use crate::Result;

/// Trait for packing solvers.
///
/// A solver consumes an ordered slice of geometry specifications and a
/// boundary and produces a flat placement list. Implementations hold no
/// state across calls; a `&self` receiver is enough for concurrent reuse.
pub trait Solver {
    /// The geometry specification type this solver handles.
    type Geometry;
    /// The boundary (container) type this solver handles.
    type Boundary;

    /// Solves the packing problem. Geometry order is part of the contract:
    /// earlier entries claim space before later entries see it.
    fn solve(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
    ) -> Result<PackResult>;
}
