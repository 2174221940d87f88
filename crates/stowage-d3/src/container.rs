//! Container (boundary) type.

use nalgebra::Vector3;
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular container for loading.
///
/// Axis-aligned with its origin at one corner, extending to
/// `(width, height, depth)`. The y axis is vertical, matching the render
/// layer's coordinate system: x is width, y is height, z is depth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Dimensions (width, height, depth).
    dimensions: Vector3<f64>,
}

impl Container {
    /// Creates a new container with the given dimensions.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, height, depth),
        }
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the width (x extent).
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height (y extent).
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the depth (z extent).
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the container volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Validates the container dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidContainer(
                "All dimensions must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Checks whether a region with its minimum corner at `position` and
    /// the given dimensions lies fully within the container. Exact touch
    /// against a wall is allowed.
    pub fn holds_region(&self, position: &Vector3<f64>, dimensions: &Vector3<f64>) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.z >= 0.0
            && position.x + dimensions.x <= self.dimensions.x
            && position.y + dimensions.y <= self.dimensions.y
            && position.z + dimensions.z <= self.dimensions.z
    }

    /// Checks whether a point lies strictly inside the container. Points on
    /// the far walls are excluded since no box can start there.
    pub fn contains_point_strictly(&self, point: &Vector3<f64>) -> bool {
        point.x >= 0.0
            && point.x < self.dimensions.x
            && point.y >= 0.0
            && point.y < self.dimensions.y
            && point.z >= 0.0
            && point.z < self.dimensions.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_container_volume() {
        let container = Container::new(100.0, 80.0, 50.0);
        assert_relative_eq!(container.volume(), 400_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_validation() {
        assert!(Container::new(100.0, 80.0, 50.0).validate().is_ok());
        assert!(Container::new(-100.0, 80.0, 50.0).validate().is_err());
        assert!(Container::new(100.0, 0.0, 50.0).validate().is_err());
    }

    #[test]
    fn test_holds_region() {
        let container = Container::new(100.0, 100.0, 100.0);
        let dims = Vector3::new(50.0, 50.0, 50.0);

        assert!(container.holds_region(&Vector3::new(0.0, 0.0, 0.0), &dims));
        // Exact fit against the far walls is allowed.
        assert!(container.holds_region(&Vector3::new(50.0, 50.0, 50.0), &dims));
        assert!(!container.holds_region(&Vector3::new(60.0, 0.0, 0.0), &dims));
    }

    #[test]
    fn test_contains_point_strictly() {
        let container = Container::new(100.0, 100.0, 100.0);

        assert!(container.contains_point_strictly(&Vector3::new(0.0, 0.0, 0.0)));
        assert!(container.contains_point_strictly(&Vector3::new(99.9, 0.0, 0.0)));
        assert!(!container.contains_point_strictly(&Vector3::new(100.0, 0.0, 0.0)));
    }
}
