//! Placed box records and their geometry predicates.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box instance placed inside the container.
///
/// Immutable once created; `position` is the box's minimum corner and
/// `dimensions` are the chosen orientation's dimensions, which may differ
/// from the originating box type's when rotation is allowed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// Unique, monotonically assigned identifier within one pack run.
    pub id: u64,

    /// Index of the box type that produced this instance.
    pub type_index: usize,

    /// Minimum corner (x, y, z); y is the vertical axis.
    pub position: Vector3<f64>,

    /// Oriented dimensions (width, height, depth).
    pub dimensions: Vector3<f64>,

    /// Color tag carried through to the render layer.
    pub color: String,
}

impl PlacedBox {
    /// Returns the maximum corner of the box.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.position + self.dimensions
    }

    /// Returns the height of the box's top face.
    pub fn top(&self) -> f64 {
        self.position.y + self.dimensions.y
    }

    /// Returns the volume of the box.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Checks whether an axis-aligned region intersects this box.
    ///
    /// Open-interval semantics: faces that exactly touch do not count as
    /// intersecting.
    pub fn intersects_region(&self, position: &Vector3<f64>, dimensions: &Vector3<f64>) -> bool {
        let max = self.max_corner();
        position.x < max.x
            && position.x + dimensions.x > self.position.x
            && position.y < max.y
            && position.y + dimensions.y > self.position.y
            && position.z < max.z
            && position.z + dimensions.z > self.position.z
    }

    /// Checks whether this box overlaps another placed box.
    pub fn overlaps(&self, other: &PlacedBox) -> bool {
        self.intersects_region(&other.position, &other.dimensions)
    }

    /// Checks whether a rectangle in the x-z plane overlaps this box's
    /// footprint. Open-interval semantics, as for volumes.
    pub fn footprint_overlaps(&self, x: f64, z: f64, width: f64, depth: f64) -> bool {
        let max = self.max_corner();
        x < max.x
            && x + width > self.position.x
            && z < max.z
            && z + depth > self.position.z
    }
}
