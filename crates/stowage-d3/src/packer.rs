//! Point-driven greedy packing engine.

use crate::container::Container;
use crate::geometry::BoxType;
use crate::point::{CandidateSet, PointOrder};
use nalgebra::Vector3;
use stowage_core::solver::Solver;
use stowage_core::{PackConfig, PackResult, PlacedBox, Result};

use std::time::Instant;

/// Deterministic 3D container-loading engine.
///
/// Stateless across calls: all working data (candidate point set, placed
/// list, counters) is local to one `pack` invocation, so a single packer
/// can be shared by concurrent callers without coordination.
pub struct Packer3D {
    config: PackConfig,
}

impl Packer3D {
    /// Creates a new packer with the given configuration.
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(PackConfig::default())
    }

    /// Returns the packer configuration.
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Packs the given box types into the container.
    ///
    /// Types are processed strictly in input order; each type places units
    /// one at a time until a unit fails to fit, which ends that type's loop.
    /// Never fails: degenerate dimensions simply place zero units.
    pub fn pack(&self, types: &[BoxType], container: &Container) -> PackResult {
        let start = Instant::now();
        let mut result = PackResult::new();

        if container.validate().is_err() {
            result.computation_time_ms = start.elapsed().as_millis() as u64;
            return result;
        }

        let order = PointOrder::for_request(types.len());
        let mut points = CandidateSet::new();
        let mut placed: Vec<PlacedBox> = Vec::new();
        let mut next_id: u64 = 0;

        'types: for (type_index, spec) in types.iter().enumerate() {
            if spec.validate().is_err() {
                log::debug!("box type {} has degenerate dimensions, skipped", type_index);
                continue;
            }

            let budget = spec.quantity().effective(self.config.max_units_per_type);
            if spec.quantity().is_unlimited() {
                log::debug!(
                    "box type {} is unbounded, capped at {} units",
                    type_index,
                    budget
                );
            }

            for _ in 0..budget {
                if placed.len() >= self.config.max_total_units {
                    log::warn!(
                        "overall unit budget of {} reached, packing stopped",
                        self.config.max_total_units
                    );
                    break 'types;
                }

                // The frontier must reflect the latest state before every
                // single-unit attempt, not once per type.
                points.sort(order);

                let Some((point_index, dims)) =
                    self.find_placement(&points, spec, type_index, container, &placed)
                else {
                    // First failed unit ends this type's quota; remaining
                    // units are not retried at other points.
                    break;
                };

                let position = points.points()[point_index];
                points.remove(point_index);

                // One new candidate beyond the box along each principal axis.
                points.insert(
                    Vector3::new(position.x + dims.x, position.y, position.z),
                    container,
                );
                points.insert(
                    Vector3::new(position.x, position.y + dims.y, position.z),
                    container,
                );
                points.insert(
                    Vector3::new(position.x, position.y, position.z + dims.z),
                    container,
                );

                placed.push(PlacedBox {
                    id: next_id,
                    type_index,
                    position,
                    dimensions: dims,
                    color: spec.color().to_string(),
                });
                next_id += 1;
            }
        }

        let packed_volume: f64 = placed.iter().map(PlacedBox::volume).sum();
        let container_volume = container.volume();

        result.placements = placed;
        result.efficiency = if container_volume > 0.0 {
            packed_volume / container_volume
        } else {
            0.0
        };
        result.computation_time_ms = start.elapsed().as_millis() as u64;
        result
    }

    /// Finds the first (point, orientation) pair that passes all checks, in
    /// the current point order and the fixed orientation order. Returns the
    /// point index and the chosen oriented dimensions.
    fn find_placement(
        &self,
        points: &CandidateSet,
        spec: &BoxType,
        type_index: usize,
        container: &Container,
        placed: &[PlacedBox],
    ) -> Option<(usize, Vector3<f64>)> {
        let orientations = spec.orientations(self.config.allow_rotation);

        for (point_index, point) in points.points().iter().enumerate() {
            for &dims in &orientations {
                if !container.holds_region(point, &dims) {
                    continue;
                }
                if placed.iter().any(|b| b.intersects_region(point, &dims)) {
                    continue;
                }
                if !self.is_supported(placed, point, &dims, type_index) {
                    continue;
                }
                return Some((point_index, dims));
            }
        }

        None
    }

    /// Support rule: a candidate at floor level is always supported. Above
    /// the floor, every placed box whose x-z footprint overlaps the
    /// candidate footprint and which occupies the thin slice directly
    /// beneath the candidate y must share the type index, and at least one
    /// such box must exist. A single foreign-type box beneath disqualifies
    /// the placement even if same-type support is also present.
    fn is_supported(
        &self,
        placed: &[PlacedBox],
        point: &Vector3<f64>,
        dims: &Vector3<f64>,
        type_index: usize,
    ) -> bool {
        if point.y <= 0.0 {
            return true;
        }

        let slice_bottom = point.y - self.config.support_epsilon;
        let mut supported = false;

        for b in placed {
            if !b.footprint_overlaps(point.x, point.z, dims.x, dims.z) {
                continue;
            }
            // The box must reach into the epsilon slice beneath the
            // candidate to count as touching its bottom face.
            if b.position.y < point.y && b.top() > slice_bottom {
                if b.type_index != type_index {
                    return false;
                }
                supported = true;
            }
        }

        supported
    }
}

impl Solver for Packer3D {
    type Geometry = BoxType;
    type Boundary = Container;

    fn solve(&self, geometries: &[BoxType], boundary: &Container) -> Result<PackResult> {
        Ok(self.pack(geometries, boundary))
    }
}

/// Engine entry point for the presentation layer.
///
/// Takes the container dimensions, the ordered box type list and the
/// rotation flag, and returns the placement list plus summary statistics.
/// Inputs are expected to be already validated and defaulted by the caller;
/// non-positive dimensions are treated as placeable nowhere rather than as
/// errors.
pub fn pack(
    container_width: f64,
    container_height: f64,
    container_depth: f64,
    types: &[BoxType],
    allow_rotation: bool,
) -> PackResult {
    let container = Container::new(container_width, container_height, container_depth);
    let packer = Packer3D::new(PackConfig::default().with_rotation(allow_rotation));
    packer.pack(types, &container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stowage_core::Quantity;

    #[test]
    fn test_single_box_at_origin() {
        let types = vec![BoxType::new(60.0, 60.0, 60.0)];
        let container = Container::new(100.0, 100.0, 100.0);
        let packer = Packer3D::new(PackConfig::default().with_rotation(false));

        let result = packer.pack(&types, &container);

        assert_eq!(result.count(), 1);
        assert_eq!(result.placements[0].position, Vector3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(result.efficiency, 0.216, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_enables_fit() {
        // Fits only after swapping width and height.
        let types = vec![BoxType::new(30.0, 80.0, 30.0)];
        let container = Container::new(100.0, 50.0, 100.0);

        let fixed = Packer3D::new(PackConfig::default().with_rotation(false));
        assert_eq!(fixed.pack(&types, &container).count(), 0);

        let rotated = Packer3D::new(PackConfig::default().with_rotation(true));
        let result = rotated.pack(&types, &container);
        assert_eq!(result.count(), 1);
        // Second orientation (w,d,h) is the first that fits.
        assert_eq!(
            result.placements[0].dimensions,
            Vector3::new(30.0, 30.0, 80.0)
        );
    }

    #[test]
    fn test_oversized_box_places_nothing() {
        let types = vec![BoxType::new(200.0, 200.0, 200.0)];
        let container = Container::new(100.0, 100.0, 100.0);
        let packer = Packer3D::default_config();

        let result = packer.pack(&types, &container);

        assert_eq!(result.count(), 0);
        assert_eq!(result.efficiency, 0.0);
    }

    #[test]
    fn test_degenerate_container_places_nothing() {
        let types = vec![BoxType::new(10.0, 10.0, 10.0)];
        let container = Container::new(0.0, 100.0, 100.0);
        let packer = Packer3D::default_config();

        let result = packer.pack(&types, &container);

        assert_eq!(result.count(), 0);
        assert_eq!(result.efficiency, 0.0);
    }

    #[test]
    fn test_degenerate_type_skipped() {
        let types = vec![
            BoxType::new(-10.0, 10.0, 10.0),
            BoxType::new(10.0, 10.0, 10.0).with_quantity(Quantity::Limited(2)),
        ];
        let container = Container::new(100.0, 100.0, 100.0);
        let packer = Packer3D::default_config();

        let result = packer.pack(&types, &container);

        assert_eq!(result.count(), 2);
        assert!(result.placements.iter().all(|b| b.type_index == 1));
    }

    #[test]
    fn test_ids_are_monotonic() {
        let types = vec![BoxType::new(25.0, 25.0, 25.0).with_quantity(Quantity::Limited(8))];
        let container = Container::new(100.0, 100.0, 100.0);
        let packer = Packer3D::default_config();

        let result = packer.pack(&types, &container);

        assert_eq!(result.count(), 8);
        for (i, b) in result.placements.iter().enumerate() {
            assert_eq!(b.id, i as u64);
        }
    }

    #[test]
    fn test_total_unit_budget_stops_packing() {
        let types = vec![BoxType::new(10.0, 10.0, 10.0).with_quantity(Quantity::Unlimited)];
        let container = Container::new(100.0, 100.0, 100.0);
        let packer = Packer3D::new(PackConfig::default().with_max_total_units(5));

        let result = packer.pack(&types, &container);

        assert_eq!(result.count(), 5);
    }

    #[test]
    fn test_entry_point_matches_solver() {
        let types = vec![BoxType::new(30.0, 30.0, 30.0).with_quantity(Quantity::Limited(3))];

        let from_fn = pack(100.0, 100.0, 100.0, &types, true);
        let from_packer =
            Packer3D::new(PackConfig::default().with_rotation(true))
                .pack(&types, &Container::new(100.0, 100.0, 100.0));

        assert_eq!(from_fn.placements, from_packer.placements);
        assert_eq!(from_fn.total_capacity, None);
    }
}
