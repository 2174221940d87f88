//! Box type specifications and orientation enumeration.

use nalgebra::Vector3;
use stowage_core::{Error, Quantity, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default color tag applied by the render layer.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// The six axis-aligned orientations as dimension index permutations, in
/// the fixed enumeration order: (w,h,d), (w,d,h), (h,w,d), (h,d,w),
/// (d,w,h), (d,h,w). The order is part of the placement contract: it breaks
/// ties when several orientations fit at the same point.
const ORIENTATIONS: [(usize, usize, usize); 6] = [
    (0, 1, 2),
    (0, 2, 1),
    (1, 0, 2),
    (1, 2, 0),
    (2, 0, 1),
    (2, 1, 0),
];

/// A box type to pack.
///
/// Priority is positional: types are processed strictly in the order the
/// caller supplies them, and earlier types claim candidate points before
/// later types see them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxType {
    /// Dimensions (width, height, depth); y is the vertical axis.
    dimensions: Vector3<f64>,

    /// Number of units to place.
    quantity: Quantity,

    /// Color tag carried through to placed instances.
    color: String,
}

impl BoxType {
    /// Creates a new box type with the given dimensions and a default
    /// quantity of one unit.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, height, depth),
            quantity: Quantity::default(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Sets the quantity to place.
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the color tag.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the requested quantity.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the color tag.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the volume of one unit.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Validates the box type dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidBoxType(
                "All dimensions must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Returns the oriented dimensions to try for this type, in enumeration
    /// order. One orientation (as given) when rotation is disallowed, the
    /// six axis-aligned permutations otherwise.
    pub fn orientations(&self, allow_rotation: bool) -> Vec<Vector3<f64>> {
        if !allow_rotation {
            return vec![self.dimensions];
        }

        ORIENTATIONS
            .iter()
            .map(|&(x, y, z)| {
                Vector3::new(self.dimensions[x], self.dimensions[y], self.dimensions[z])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_volume() {
        let spec = BoxType::new(10.0, 20.0, 30.0);
        assert_relative_eq!(spec.volume(), 6000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_defaults() {
        let spec = BoxType::new(10.0, 20.0, 30.0);
        assert_eq!(spec.quantity(), Quantity::Limited(1));
        assert_eq!(spec.color(), DEFAULT_COLOR);
    }

    #[test]
    fn test_orientation_count() {
        let spec = BoxType::new(10.0, 20.0, 30.0);
        assert_eq!(spec.orientations(false).len(), 1);
        assert_eq!(spec.orientations(true).len(), 6);
    }

    #[test]
    fn test_orientation_enumeration_order() {
        let spec = BoxType::new(1.0, 2.0, 3.0);
        let orientations = spec.orientations(true);

        // (w,h,d), (w,d,h), (h,w,d), (h,d,w), (d,w,h), (d,h,w)
        assert_eq!(orientations[0], Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(orientations[1], Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(orientations[2], Vector3::new(2.0, 1.0, 3.0));
        assert_eq!(orientations[3], Vector3::new(2.0, 3.0, 1.0));
        assert_eq!(orientations[4], Vector3::new(3.0, 1.0, 2.0));
        assert_eq!(orientations[5], Vector3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_validation() {
        assert!(BoxType::new(10.0, 20.0, 30.0).validate().is_ok());
        assert!(BoxType::new(-10.0, 20.0, 30.0).validate().is_err());
        assert!(BoxType::new(10.0, 0.0, 30.0).validate().is_err());
    }
}
