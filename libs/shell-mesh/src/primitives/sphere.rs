//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh centered at the origin.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of segments around the circumference
///
/// # Algorithm
///
/// - num_rings = (segments + 1) / 2
/// - Each ring at polar angle phi = 180° * (i + 0.5) / num_rings
/// - No pole vertices, the first and last rings are closed by polygon caps
///
/// Two spheres built with the same `segments` share their angular layout,
/// so concentric spheres never cross each other.
///
/// # Example
///
/// ```rust
/// use shell_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 16 * 32);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {radius}"
        )));
    }

    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Sphere segments must be at least {MIN_SEGMENTS}: {segments}"
        )));
    }

    if segments > MAX_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Sphere segments must be at most {MAX_SEGMENTS}: {segments}"
        )));
    }

    let num_rings = (segments + 1) / 2;
    let ring_len = segments as usize;
    let triangle_estimate = 2 * (ring_len - 2) + 2 * ring_len * (num_rings as usize - 1);
    let mut mesh = Mesh::with_capacity(ring_len * num_rings as usize, triangle_estimate);

    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(num_rings as usize);

    for i in 0..num_rings {
        // Polar angle (0 = top, PI = bottom)
        let phi = PI * (f64::from(i) + 0.5) / f64::from(num_rings);
        let ring_radius = radius * phi.sin();
        let z = radius * phi.cos();

        let ring = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * f64::from(j) / f64::from(segments);
                mesh.add_vertex(DVec3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z))
            })
            .collect();

        rings.push(ring);
    }

    // Top cap (first ring as polygon fan)
    let first_ring = &rings[0];
    for j in 1..ring_len - 1 {
        mesh.add_triangle(first_ring[0], first_ring[j], first_ring[j + 1]);
    }

    // Middle bands (quads between adjacent rings)
    for pair in rings.windows(2) {
        let (ring_a, ring_b) = (&pair[0], &pair[1]);

        for j in 0..ring_len {
            let j_next = (j + 1) % ring_len;

            let a0 = ring_a[j];
            let a1 = ring_a[j_next];
            let b0 = ring_b[j];
            let b1 = ring_b[j_next];

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Bottom cap (last ring as polygon fan, reversed)
    let last_ring = &rings[rings.len() - 1];
    for j in 1..ring_len - 1 {
        mesh.add_triangle(last_ring[0], last_ring[j + 1], last_ring[j]);
    }

    Ok(mesh)
}
