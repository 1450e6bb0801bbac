//! # Rigid Transforms
//!
//! Translation and rotation of whole meshes. Every helper builds a `DMat4`
//! and routes through [`Mesh::transform`] so vertex normals stay in sync.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::{DMat4, DVec3, EulerRot};

/// Translates a mesh by the given offset.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shell_mesh::primitives::create_cuboid;
/// use shell_mesh::transform::translate;
///
/// let cube = create_cuboid(DVec3::splat(40.0), true).unwrap();
/// let moved = translate(cube, DVec3::new(0.0, 20.0, 0.0)).unwrap();
/// assert_eq!(moved.bounding_box().0.y, 0.0);
/// ```
pub fn translate(mut mesh: Mesh, offset: DVec3) -> Result<Mesh, MeshError> {
    if !offset.is_finite() {
        return Err(MeshError::degenerate(format!(
            "Translation offset must be finite: {offset:?}"
        )));
    }
    mesh.transform(&DMat4::from_translation(offset));
    Ok(mesh)
}

/// Rotates a mesh about the origin by Euler angles in degrees.
///
/// Rotation is applied around X first, then Y, then Z.
pub fn rotate(mut mesh: Mesh, angles_deg: DVec3) -> Result<Mesh, MeshError> {
    if !angles_deg.is_finite() {
        return Err(MeshError::degenerate(format!(
            "Rotation angles must be finite: {angles_deg:?}"
        )));
    }
    let matrix = DMat4::from_euler(
        EulerRot::ZYX,
        angles_deg.z.to_radians(),
        angles_deg.y.to_radians(),
        angles_deg.x.to_radians(),
    );
    mesh.transform(&matrix);
    Ok(mesh)
}

/// Rotates a mesh about the vertical (Z) axis by `degrees`.
///
/// Positive angles turn +X towards +Y.
pub fn rotate_z(mesh: Mesh, degrees: f64) -> Result<Mesh, MeshError> {
    rotate(mesh, DVec3::new(0.0, 0.0, degrees))
}
