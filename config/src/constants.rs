//! # Configuration Constants
//!
//! Centralized constants for the layered sphere pipeline. Tessellation,
//! precision and cutter sizing values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Sphere tessellation defaults and bounds
//! - **Cutter**: Sizing of the slicing half-space
//! - **Limits**: Maximum mesh sizes for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Relative epsilon for vertex welding.
///
/// Boolean results weld vertices closer than this fraction of the operands'
/// extent (the longest side of their combined bounding box).
pub const VERTEX_MERGE_EPSILON: f64 = 1e-10;

/// Relative thickness of a splitting plane in the BSP boolean engine.
///
/// Points within `PLANE_EPSILON * extent` of a plane are classified as
/// coplanar. It has to be larger than [`VERTEX_MERGE_EPSILON`] because split
/// vertices are produced by interpolation and carry accumulated rounding
/// error.
///
/// # Example
///
/// ```rust
/// use config::constants::PLANE_EPSILON;
///
/// // Layers measured in metres and in millimetres resolve alike.
/// let metres = PLANE_EPSILON * 0.02;
/// let millimetres = PLANE_EPSILON * 20.0;
/// assert!((millimetres / metres - 1000.0).abs() < 1e-9);
/// ```
pub const PLANE_EPSILON: f64 = 1e-9;

/// Relative doubled-area threshold for degenerate triangles.
///
/// A triangle whose cross product is at most `DEGENERATE_AREA_EPSILON *
/// extent²` has no usable plane. The value sits well above the rounding
/// noise of a cross product and below the thinnest cap triangle of a
/// sphere tessellated at [`MAX_SEGMENTS`].
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-13;

/// Thinnest shell wall the engine resolves, in plane thicknesses.
///
/// Thinner walls would put the inner surface inside the outer surface's
/// plane slab, so the subtraction could not tell them apart.
pub const MIN_WALL_PLANE_RATIO: f64 = 10.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of angular segments for every sphere in a run.
///
/// All spheres of one assembly share this value so that concentric shells
/// line up. Mesh size grows with the square of the segment count and the
/// boolean cost grows faster still.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let user_segments: Option<u32> = None;
/// assert_eq!(user_segments.unwrap_or(DEFAULT_SEGMENTS), 64);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Reduced segment count for interactive previews.
pub const PREVIEW_SEGMENTS: u32 = 24;

/// Minimum number of segments for a sphere ring (a triangle).
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum number of segments the mesh engine will tessellate.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
///
/// let requested = 10_000u32;
/// let actual = requested.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
/// assert_eq!(actual, MAX_SEGMENTS);
/// ```
pub const MAX_SEGMENTS: u32 = 1000;

// =============================================================================
// CUTTER CONSTANTS
// =============================================================================

/// Side length of the reference slicing cube.
///
/// A cube of this size contains layers up to radius 20 only.
pub const REFERENCE_CUTTER_SIZE: f64 = 40.0;

/// Default safety factor between the largest layer radius and the
/// half-side of the slicing cube.
pub const DEFAULT_CUTTER_MARGIN: f64 = 2.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from runaway boolean
/// fragmentation.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default color when none is specified (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the side length of a slicing cube for the given largest radius.
///
/// The half-side is `margin * max_radius`, so any `margin > 1` yields a cube
/// that fully contains every sphere of radius up to `max_radius` under any
/// rotation about the vertical axis.
///
/// # Example
///
/// ```rust
/// use config::constants::cutter_side_for_radius;
///
/// assert_eq!(cutter_side_for_radius(10.0, 2.0), 40.0);
/// ```
#[inline]
pub fn cutter_side_for_radius(max_radius: f64, margin: f64) -> f64 {
    2.0 * margin * max_radius
}
