//! # Cuboid Primitive
//!
//! Generates mesh for axis-aligned boxes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box mesh.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, min corner at origin
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use shell_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::splat(40.0), true).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert_eq!(mesh.bounding_box().0, DVec3::splat(-20.0));
/// ```
pub fn create_cuboid(size: DVec3, center: bool) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cuboid size must be positive: {size:?}"
        )));
    }

    let (min, max) = if center {
        let half = size / 2.0;
        (-half, half)
    } else {
        (DVec3::ZERO, size)
    };

    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Counter-clockwise seen from outside
    let faces = [
        [v0, v2, v1], [v0, v3, v2], // bottom
        [v4, v5, v6], [v4, v6, v7], // top
        [v0, v1, v5], [v0, v5, v4], // front (y = min.y)
        [v2, v3, v7], [v2, v7, v6], // back (y = max.y)
        [v3, v0, v4], [v3, v4, v7], // left (x = min.x)
        [v1, v2, v6], [v1, v6, v5], // right (x = max.x)
    ];
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}
