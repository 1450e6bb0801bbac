//! # Measurement
//!
//! Volume and bounds queries used to compare solids volumetrically.
//!
//! Volume uses the divergence theorem: for each triangle the signed volume
//! of the tetrahedron it forms with the origin is `(1/6) v0 · (v1 × v2)`.
//! The sum is exact for any closed, consistently wound surface, including
//! the T-junction-heavy output of BSP booleans.

use crate::mesh::Mesh;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: [f64; 3],
    /// Maximum corner
    pub max: [f64; 3],
}

impl Bounds {
    /// Bounds of the given mesh; a zero box for an empty mesh.
    pub fn of(mesh: &Mesh) -> Self {
        let (min, max) = mesh.bounding_box();
        Self {
            min: min.to_array(),
            max: max.to_array(),
        }
    }

    /// Extent along each axis.
    pub fn size(&self) -> DVec3 {
        DVec3::from_array(self.max) - DVec3::from_array(self.min)
    }
}

/// Summary of a mesh, reported alongside its buffers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub volume: f64,
    pub bounds: Bounds,
}

impl MeshStats {
    /// Collects statistics for `mesh`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use shell_mesh::primitives::create_cuboid;
    /// use shell_mesh::MeshStats;
    ///
    /// let stats = MeshStats::of(&create_cuboid(DVec3::splat(2.0), true).unwrap());
    /// assert_eq!(stats.triangle_count, 12);
    /// assert!((stats.volume - 8.0).abs() < 1e-12);
    /// ```
    pub fn of(mesh: &Mesh) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            volume: volume(mesh),
            bounds: Bounds::of(mesh),
        }
    }
}

/// Signed enclosed volume. Positive for outward-facing surfaces.
pub fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.triangle_positions()
        .map(|[v0, v1, v2]| v0.dot(v1.cross(v2)))
        .sum::<f64>()
        / 6.0
}

/// Absolute enclosed volume.
pub fn volume(mesh: &Mesh) -> f64 {
    signed_volume(mesh).abs()
}

/// Total surface area.
pub fn surface_area(mesh: &Mesh) -> f64 {
    mesh.triangle_positions()
        .map(|[v0, v1, v2]| (v1 - v0).cross(v2 - v0).length() / 2.0)
        .sum()
}
