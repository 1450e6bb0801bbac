//! # Tolerances
//!
//! The BSP engine compares distances and areas against tolerances scaled
//! by the operands' extent, so a boolean gives the same result whether the
//! layers are measured in metres or millimetres.

use crate::mesh::Mesh;
use config::constants::{DEGENERATE_AREA_EPSILON, PLANE_EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec3;

/// Absolute tolerances for one boolean operation.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shell_mesh::ops::boolean::Tolerance;
/// use shell_mesh::primitives::create_cuboid;
///
/// let small = create_cuboid(DVec3::splat(0.01), true).unwrap();
/// let large = create_cuboid(DVec3::splat(10.0), true).unwrap();
///
/// let ratio = Tolerance::between(&large, &large).plane / Tolerance::between(&small, &small).plane;
/// assert!((ratio - 1000.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Half-thickness of a splitting plane.
    pub plane: f64,
    /// Vertices closer than this are welded.
    pub merge: f64,
    /// Triangles whose cross product is at most this have no usable plane.
    pub area: f64,
}

impl Tolerance {
    /// Tolerances for geometry whose bounding box is at most `extent` wide.
    pub fn for_extent(extent: f64) -> Self {
        Self {
            plane: PLANE_EPSILON * extent,
            merge: VERTEX_MERGE_EPSILON * extent,
            area: DEGENERATE_AREA_EPSILON * extent * extent,
        }
    }

    /// Tolerances for a boolean between `a` and `b`.
    ///
    /// Empty operands do not contribute to the extent.
    pub fn between(a: &Mesh, b: &Mesh) -> Self {
        let (min, max) = [a, b]
            .into_iter()
            .filter(|mesh| !mesh.is_empty())
            .map(Mesh::bounding_box)
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
            .unwrap_or((DVec3::ZERO, DVec3::ZERO));
        Self::for_extent((max - min).max_element())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_cuboid;
    use approx::assert_relative_eq;

    #[test]
    fn test_tolerance_scales_linearly() {
        let unit = Tolerance::for_extent(1.0);
        let large = Tolerance::for_extent(1000.0);
        assert_relative_eq!(large.plane, unit.plane * 1000.0, max_relative = 1e-12);
        assert_relative_eq!(large.merge, unit.merge * 1000.0, max_relative = 1e-12);
        assert_relative_eq!(large.area, unit.area * 1e6, max_relative = 1e-12);
    }

    #[test]
    fn test_tolerance_between_uses_combined_bounds() {
        let a = create_cuboid(DVec3::splat(2.0), true).unwrap();
        let mut b = create_cuboid(DVec3::splat(2.0), true).unwrap();
        b.translate(DVec3::new(4.0, 0.0, 0.0));

        // x spans -1..5
        assert_eq!(Tolerance::between(&a, &b), Tolerance::for_extent(6.0));
    }

    #[test]
    fn test_tolerance_between_ignores_empty_operand() {
        let mut a = create_cuboid(DVec3::splat(2.0), true).unwrap();
        a.translate(DVec3::splat(50.0));
        assert_eq!(Tolerance::between(&a, &Mesh::new()), Tolerance::for_extent(2.0));
        assert_eq!(Tolerance::between(&Mesh::new(), &Mesh::new()), Tolerance::for_extent(0.0));
    }
}
