//! Candidate point set.
//!
//! A candidate point is a container-relative coordinate where a new box's
//! minimum corner may be tried. The set is a working frontier: it grows as
//! boxes are placed (one new point beyond each placed box along x, y and z)
//! and is re-sorted before every single-unit placement attempt so the
//! frontier always reflects the latest state.

use crate::container::Container;
use nalgebra::Vector3;

/// Ordering applied to the candidate point list before each placement
/// attempt. The choice depends on how many box types are in the overall
/// request, not on the type currently being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOrder {
    /// y, then x, then z ascending. Fills the floor in horizontal layers
    /// before stacking; used when a single box type is packed.
    LayerFirst,
    /// x, then z, then y ascending. Builds vertical, spatially contiguous
    /// columns per horizontal slot, keeping each type's footprint compact so
    /// later types get clean remaining volume; used for two or more types.
    ColumnFirst,
}

impl PointOrder {
    /// Selects the ordering for a request with `type_count` box types.
    pub fn for_request(type_count: usize) -> Self {
        if type_count <= 1 {
            PointOrder::LayerFirst
        } else {
            PointOrder::ColumnFirst
        }
    }
}

/// Working set of candidate placement points.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    points: Vec<Vector3<f64>>,
}

impl CandidateSet {
    /// Creates a new set seeded with the origin.
    pub fn new() -> Self {
        Self {
            points: vec![Vector3::new(0.0, 0.0, 0.0)],
        }
    }

    /// Returns the number of candidate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no candidate points remain.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in their current order.
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Sorts the full point list by the given ordering. `total_cmp` keeps
    /// the comparison a total order, so sorting is deterministic.
    pub fn sort(&mut self, order: PointOrder) {
        match order {
            PointOrder::LayerFirst => self.points.sort_by(|a, b| {
                a.y.total_cmp(&b.y)
                    .then_with(|| a.x.total_cmp(&b.x))
                    .then_with(|| a.z.total_cmp(&b.z))
            }),
            PointOrder::ColumnFirst => self.points.sort_by(|a, b| {
                a.x.total_cmp(&b.x)
                    .then_with(|| a.z.total_cmp(&b.z))
                    .then_with(|| a.y.total_cmp(&b.y))
            }),
        }
    }

    /// Removes the consumed point at `index`.
    pub fn remove(&mut self, index: usize) {
        self.points.remove(index);
    }

    /// Adds a point if it lies strictly inside the container and is not
    /// already present. Deduplication is by exact coordinate match.
    pub fn insert(&mut self, point: Vector3<f64>, container: &Container) {
        if !container.contains_point_strictly(&point) {
            return;
        }
        if self.points.iter().any(|p| p == &point) {
            return;
        }
        self.points.push(point);
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}
