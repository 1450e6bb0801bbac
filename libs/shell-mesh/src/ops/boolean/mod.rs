//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; flip
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; flip
//!
//! Results are rebuilt into an indexed [`Mesh`]: polygons are fan
//! triangulated, nearby vertices are welded and triangles that collapse to
//! zero area are dropped.
//!
//! ## Tolerances
//!
//! Every comparison uses a [`Tolerance`] scaled by the extent of both
//! operands, so the same model gives the same result at any unit of length.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use shell_mesh::ops::boolean::intersection;
//! use shell_mesh::primitives::create_cuboid;
//!
//! let a = create_cuboid(DVec3::splat(2.0), true).unwrap();
//! let mut b = create_cuboid(DVec3::splat(2.0), true).unwrap();
//! b.translate(DVec3::new(1.0, 0.0, 0.0));
//!
//! let overlap = intersection(&a, &b).unwrap();
//! assert!((shell_mesh::measure::volume(&overlap) - 4.0).abs() < 1e-9);
//! ```

mod bsp;
mod plane;
mod polygon;
mod tolerance;


use crate::error::MeshError;
use crate::mesh::Mesh;
use bsp::BspTree;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;
use polygon::Polygon;
use std::collections::HashMap;

pub use tolerance::Tolerance;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two meshes.
///
/// An empty operand yields the other operand unchanged.
///
/// ## Errors
///
/// `DegenerateGeometry` if either input has a non-finite vertex,
/// `BooleanFailed` if a non-empty input has only zero-area triangles,
/// `TooManyTriangles` / `TooManyVertices` if the result exceeds the limits.
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    check_finite("union", a, b)?;
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let tolerance = Tolerance::between(a, b);
    let mut bsp_a = BspTree::new(operand_polygons("union", a, &tolerance)?, tolerance);
    let mut bsp_b = BspTree::new(operand_polygons("union", b, &tolerance)?, tolerance);

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polygons = bsp_a.into_polygons();
    polygons.extend(bsp_b.into_polygons());
    finish("union", a, b, polygons, &tolerance, false)
}

/// Compute difference of two meshes (A - B).
///
/// `∅ - B` is empty and `A - ∅` is `A`.
///
/// ## Errors
///
/// Same as [`union`].
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    check_finite("difference", a, b)?;
    if a.is_empty() {
        return Ok(Mesh::new());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let tolerance = Tolerance::between(a, b);
    let mut bsp_a = BspTree::new(operand_polygons("difference", a, &tolerance)?, tolerance);
    let mut bsp_b = BspTree::new(operand_polygons("difference", b, &tolerance)?, tolerance);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polygons = bsp_a.into_polygons();
    polygons.extend(bsp_b.into_polygons());
    finish("difference", a, b, polygons, &tolerance, true)
}

/// Compute intersection of two meshes.
///
/// Any empty operand yields an empty mesh.
///
/// ## Errors
///
/// Same as [`union`].
pub fn intersection(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    check_finite("intersection", a, b)?;
    if a.is_empty() || b.is_empty() {
        return Ok(Mesh::new());
    }

    let tolerance = Tolerance::between(a, b);
    let mut bsp_a = BspTree::new(operand_polygons("intersection", a, &tolerance)?, tolerance);
    let mut bsp_b = BspTree::new(operand_polygons("intersection", b, &tolerance)?, tolerance);

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);

    let mut polygons = bsp_a.into_polygons();
    polygons.extend(bsp_b.into_polygons());
    finish("intersection", a, b, polygons, &tolerance, true)
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

fn check_finite(operation: &'static str, a: &Mesh, b: &Mesh) -> Result<(), MeshError> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(MeshError::degenerate(format!(
            "{operation} input has a non-finite vertex"
        )))
    }
}

fn finish(
    operation: &'static str,
    a: &Mesh,
    b: &Mesh,
    mut polygons: Vec<Polygon>,
    tolerance: &Tolerance,
    flip: bool,
) -> Result<Mesh, MeshError> {
    if flip {
        polygons.iter_mut().for_each(Polygon::flip);
    }
    let result = polygons_to_mesh(&polygons, tolerance)?;

    tracing::trace!(
        operation,
        left = a.triangle_count(),
        right = b.triangle_count(),
        polygons = polygons.len(),
        triangles = result.triangle_count(),
        plane_epsilon = tolerance.plane,
        "boolean complete"
    );
    Ok(result)
}

/// Polygons of a non-empty operand; an operand made only of degenerate
/// triangles has no interior to combine.
fn operand_polygons(
    operation: &'static str,
    mesh: &Mesh,
    tolerance: &Tolerance,
) -> Result<Vec<Polygon>, MeshError> {
    let polygons = mesh_to_polygons(mesh, tolerance);
    if polygons.is_empty() {
        return Err(MeshError::boolean_failed(
            operation,
            format!("all {} operand triangles are degenerate", mesh.triangle_count()),
        ));
    }
    Ok(polygons)
}

/// Convert mesh to list of polygons, skipping degenerate triangles.
fn mesh_to_polygons(mesh: &Mesh, tolerance: &Tolerance) -> Vec<Polygon> {
    mesh.triangle_positions()
        .filter_map(|corners| Polygon::from_vertices(corners.to_vec(), tolerance))
        .collect()
}

/// Convert list of polygons back to an indexed, welded mesh.
fn polygons_to_mesh(polygons: &[Polygon], tolerance: &Tolerance) -> Result<Mesh, MeshError> {
    let triangle_estimate: usize = polygons.iter().map(|p| p.vertices().len() - 2).sum();
    if triangle_estimate > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangle_estimate,
            max: MAX_TRIANGLES,
        });
    }

    let mut mesh = Mesh::with_capacity(triangle_estimate / 2 + 3, triangle_estimate);
    let mut welded: HashMap<[i64; 3], u32> = HashMap::new();

    for poly in polygons {
        let mut indices = Vec::with_capacity(poly.vertices().len());
        for &v in poly.vertices() {
            let index = *welded
                .entry(weld_key(v, tolerance.merge))
                .or_insert_with(|| mesh.add_vertex(v));
            indices.push(index);
        }

        // Fan triangulation
        for i in 1..indices.len() - 1 {
            let tri = [indices[0], indices[i], indices[i + 1]];
            if !is_degenerate(&mesh, tri, tolerance.area) {
                mesh.add_triangle(tri[0], tri[1], tri[2]);
            }
        }
    }

    if mesh.vertex_count() > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: mesh.vertex_count(),
            max: MAX_VERTICES,
        });
    }
    Ok(mesh)
}

#[inline]
fn weld_key(v: DVec3, merge: f64) -> [i64; 3] {
    let q = (v / merge).round();
    [q.x as i64, q.y as i64, q.z as i64]
}

fn is_degenerate(mesh: &Mesh, [i0, i1, i2]: [u32; 3], area: f64) -> bool {
    if i0 == i1 || i1 == i2 || i0 == i2 {
        return true;
    }
    let (v0, v1, v2) = (mesh.vertex(i0), mesh.vertex(i1), mesh.vertex(i2));
    (v1 - v0).cross(v2 - v0).length() <= area
}
