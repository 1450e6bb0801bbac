//! # Cutting Half-Space
//!
//! The slice volume: a cube with one face on the origin plane, covering the
//! positive Y side, turned about the vertical (Z) axis by the slice angle.
//! It is built once per call and shared read-only by every layer.

use crate::error::{AssemblyError, EngineOperation};
use config::constants::{cutter_side_for_radius, DEFAULT_CUTTER_MARGIN};
use glam::DVec3;
use shell_mesh::primitives::create_cuboid;
use shell_mesh::transform::{rotate_z, translate};
use shell_mesh::ops::boolean::Tolerance;
use shell_mesh::{intersection, Mesh, MeshError};

/// How large the cutting cube is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutterBounds {
    /// Side is `2 × margin × largest visible outer radius`.
    Relative { margin: f64 },
    /// A fixed side length.
    Fixed { side: f64 },
}

impl Default for CutterBounds {
    fn default() -> Self {
        Self::Relative {
            margin: DEFAULT_CUTTER_MARGIN,
        }
    }
}

impl CutterBounds {
    /// Cube side for a stack whose largest visible outer radius is `max_radius`.
    pub fn side_for(&self, max_radius: f64) -> f64 {
        match *self {
            Self::Relative { margin } => cutter_side_for_radius(max_radius, margin),
            Self::Fixed { side } => side,
        }
    }
}

/// The rotated cutting cube used to slice every layer of one call.
#[derive(Debug, Clone)]
pub struct CuttingHalfSpace {
    mesh: Mesh,
    side: f64,
    angle: f64,
    normal: DVec3,
}

impl CuttingHalfSpace {
    /// Builds the cutter of side `side` turned by `angle_deg` degrees.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use shell_assembler::CuttingHalfSpace;
    ///
    /// let cutter = CuttingHalfSpace::new(40.0, 90.0).unwrap();
    /// assert!(cutter.contains(DVec3::new(-5.0, 0.0, 0.0)));
    /// assert!(!cutter.contains(DVec3::new(5.0, 0.0, 0.0)));
    /// ```
    pub fn new(side: f64, angle_deg: f64) -> Result<Self, AssemblyError> {
        let engine = |operation| move |err: MeshError| AssemblyError::engine(None, operation, err);

        let cube = create_cuboid(DVec3::splat(side), true).map_err(engine(EngineOperation::Cuboid))?;
        let half_space = translate(cube, DVec3::new(0.0, side / 2.0, 0.0))
            .map_err(engine(EngineOperation::Translate))?;
        let mesh = rotate_z(half_space, angle_deg).map_err(engine(EngineOperation::Rotate))?;

        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Ok(Self {
            mesh,
            side,
            angle: angle_deg,
            normal: DVec3::new(-sin, cos, 0.0),
        })
    }

    /// Builds the cutter sized by `bounds` for a stack of `max_radius`.
    ///
    /// # Errors
    ///
    /// `CutterTooSmall` when half the side does not exceed `max_radius`, so
    /// the cube would clip the sphere somewhere other than its cutting face.
    pub fn for_layers(
        bounds: &CutterBounds,
        max_radius: f64,
        angle_deg: f64,
    ) -> Result<Self, AssemblyError> {
        let side = bounds.side_for(max_radius);
        if side / 2.0 <= max_radius {
            return Err(AssemblyError::CutterTooSmall { side, max_radius });
        }
        tracing::debug!(side, angle = angle_deg, "building cutting half-space");
        Self::new(side, angle_deg)
    }

    /// The cube mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Side length of the cube.
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Rotation about the vertical axis, in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit normal of the cutting face, pointing into the kept region.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// True if `point` lies inside the cube, within the boolean engine's
    /// plane tolerance at the cube's scale.
    pub fn contains(&self, point: DVec3) -> bool {
        let epsilon = Tolerance::for_extent(self.side).plane;
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let local = DVec3::new(
            cos * point.x + sin * point.y,
            -sin * point.x + cos * point.y,
            point.z,
        );
        let half = self.side / 2.0;

        local.x.abs() <= half + epsilon
            && local.y >= -epsilon
            && local.y <= self.side + epsilon
            && local.z.abs() <= half + epsilon
    }

    /// Keeps the part of `solid` inside the half-space.
    pub fn clip(&self, solid: &Mesh) -> Result<Mesh, MeshError> {
        intersection(solid, &self.mesh)
    }
}
