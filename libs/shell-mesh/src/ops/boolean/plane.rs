//! # Plane for BSP Operations
//!
//! Plane representation with point classification.

use super::tolerance::Tolerance;
use glam::DVec3;

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Point is in front of plane (positive side).
    Front,
    /// Point is behind plane (negative side).
    Back,
    /// Point lies within the plane slab.
    Coplanar,
}

/// A plane in 3D space defined by unit normal and distance from origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Create plane from normal and distance.
    #[cfg(test)]
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Create plane from three points.
    ///
    /// Points should be in counter-clockwise order when viewed from front.
    /// Returns `None` for collinear or coincident points, judged against
    /// `tolerance.area`.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3, tolerance: &Tolerance) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        let length = cross.length();
        if !length.is_finite() || length <= tolerance.area {
            return None;
        }

        let normal = cross / length;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Get the plane normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// The plane facing the other way.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classify a point relative to this plane, treating the slab of
    /// half-width `epsilon` as the plane itself.
    pub fn classify_point(&self, point: DVec3, epsilon: f64) -> Classification {
        let dist = self.signed_distance(point);
        if dist > epsilon {
            Classification::Front
        } else if dist < -epsilon {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Point where the segment `a`..`b` crosses this plane.
    pub fn intersect_segment(&self, a: DVec3, b: DVec3) -> DVec3 {
        let t = (self.w - self.normal.dot(a)) / self.normal.dot(b - a);
        a.lerp(b, t)
    }
}
