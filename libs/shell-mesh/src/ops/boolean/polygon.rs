//! # Polygon for BSP Operations
//!
//! Convex polygon with its supporting plane and splitting support.

use super::plane::{Classification, Plane};
use super::tolerance::Tolerance;
use glam::DVec3;

/// A convex polygon with associated plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

/// Where a polygon ended up after splitting by a plane.
#[derive(Debug)]
pub enum Split {
    /// Lies in the plane and faces the same way.
    CoplanarFront(Polygon),
    /// Lies in the plane and faces the opposite way.
    CoplanarBack(Polygon),
    /// Entirely in front of the plane.
    Front(Polygon),
    /// Entirely behind the plane.
    Back(Polygon),
    /// Crosses the plane; either piece may vanish if it is a sliver.
    Spanning {
        front: Option<Polygon>,
        back: Option<Polygon>,
    },
}

impl Polygon {
    /// Create polygon from vertices, deriving the plane from the first three.
    ///
    /// Returns None if vertices don't form a valid polygon.
    pub fn from_vertices(vertices: Vec<DVec3>, tolerance: &Tolerance) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2], tolerance)?;
        Some(Self { vertices, plane })
    }

    /// Fragment of a split; keeps the parent's plane instead of re-deriving
    /// it from possibly near-collinear vertices.
    fn fragment(vertices: Vec<DVec3>, plane: Plane) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices, plane })
    }

    /// Get polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Get polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flip the polygon in place (reverse winding order and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Split this polygon by `plane`, with a slab of half-width `epsilon`.
    pub fn split(self, plane: &Plane, epsilon: f64) -> Split {
        let mut has_front = false;
        let mut has_back = false;
        for v in &self.vertices {
            match plane.classify_point(*v, epsilon) {
                Classification::Front => has_front = true,
                Classification::Back => has_back = true,
                Classification::Coplanar => {}
            }
        }

        match (has_front, has_back) {
            (false, false) => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    Split::CoplanarFront(self)
                } else {
                    Split::CoplanarBack(self)
                }
            }
            (true, false) => Split::Front(self),
            (false, true) => Split::Back(self),
            (true, true) => {
                let classes: Vec<Classification> = self
                    .vertices
                    .iter()
                    .map(|v| plane.classify_point(*v, epsilon))
                    .collect();
                let count = self.vertices.len();
                let mut front_verts = Vec::with_capacity(count + 1);
                let mut back_verts = Vec::with_capacity(count + 1);

                for i in 0..count {
                    let j = (i + 1) % count;
                    let (vi, vj) = (self.vertices[i], self.vertices[j]);
                    let (ti, tj) = (classes[i], classes[j]);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let hit = plane.intersect_segment(vi, vj);
                        front_verts.push(hit);
                        back_verts.push(hit);
                    }
                }

                Split::Spanning {
                    front: Self::fragment(front_verts, self.plane),
                    back: Self::fragment(back_verts, self.plane),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn triangle_at_z(z: f64) -> Polygon {
        Polygon::from_vertices(
            vec![
                DVec3::new(0.0, 0.0, z),
                DVec3::new(1.0, 0.0, z),
                DVec3::new(0.5, 1.0, z),
            ],
            &Tolerance::for_extent(1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_polygon_from_too_few_vertices() {
        let two_points = vec![DVec3::ZERO, DVec3::X];
        assert!(Polygon::from_vertices(two_points, &Tolerance::for_extent(1.0)).is_none());
    }

    #[test]
    fn test_polygon_flip() {
        let mut poly = triangle_at_z(0.0);
        let first = poly.vertices()[0];
        poly.flip();
        assert_eq!(poly.vertices()[2], first);
        assert_eq!(poly.plane().normal(), DVec3::NEG_Z);
    }

    #[test]
    fn test_polygon_split_front_and_back() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert!(matches!(triangle_at_z(1.0).split(&plane, EPS), Split::Front(_)));
        assert!(matches!(triangle_at_z(-1.0).split(&plane, EPS), Split::Back(_)));
    }

    #[test]
    fn test_polygon_split_coplanar() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert!(matches!(triangle_at_z(0.0).split(&plane, EPS), Split::CoplanarFront(_)));
        assert!(matches!(
            triangle_at_z(0.0).split(&plane.flipped(), EPS),
            Split::CoplanarBack(_)
        ));
    }

    #[test]
    fn test_polygon_split_spanning() {
        // Triangle that spans the z=0 plane
        let poly = Polygon::from_vertices(
            vec![
                DVec3::new(0.0, 0.0, -1.0),
                DVec3::new(1.0, 0.0, -1.0),
                DVec3::new(0.5, 0.0, 1.0),
            ],
            &Tolerance::for_extent(2.0),
        )
        .unwrap();

        let plane = Plane::new(DVec3::Z, 0.0);
        let Split::Spanning { front, back } = poly.split(&plane, EPS) else {
            panic!("expected spanning split");
        };

        let front = front.unwrap();
        let back = back.unwrap();
        assert_eq!(front.vertices().len(), 3);
        assert_eq!(back.vertices().len(), 4);
        assert!(front.vertices().iter().all(|v| v.z >= -1e-12));
        assert!(back.vertices().iter().all(|v| v.z <= 1e-12));
    }

    #[test]
    fn test_polygon_split_through_vertex() {
        // Plane passes exactly through one vertex
        let poly = Polygon::from_vertices(
            vec![
                DVec3::new(-1.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            &Tolerance::for_extent(2.0),
        )
        .unwrap();

        let plane = Plane::new(DVec3::X, 0.0);
        let Split::Spanning { front, back } = poly.split(&plane, EPS) else {
            panic!("expected spanning split");
        };
        assert_eq!(front.unwrap().vertices().len(), 3);
        assert_eq!(back.unwrap().vertices().len(), 3);
    }
}
