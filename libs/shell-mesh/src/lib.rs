//! # Shell Mesh
//!
//! Browser-safe mesh generation and CSG for layered sphere models.
//!
//! ## Architecture
//!
//! ```text
//! primitives (sphere, cuboid) → transform → ops::boolean → Mesh
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Boolean Operations**: BSP trees (csg.js algorithm), arena-backed
//! - **Primitives**: Latitude/longitude spheres, axis-aligned cuboids
//! - **Measurement**: Divergence-theorem volume
//!
//! ## Usage
//!
//! ```rust
//! use shell_mesh::primitives::create_sphere;
//! use shell_mesh::{difference, measure};
//!
//! let outer = create_sphere(10.0, 16).unwrap();
//! let inner = create_sphere(8.0, 16).unwrap();
//! let shell = difference(&outer, &inner).unwrap();
//!
//! let expected = measure::volume(&outer) - measure::volume(&inner);
//! assert!((measure::volume(&shell) - expected).abs() < 1e-6 * expected);
//! ```

pub mod error;
pub mod measure;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod transform;

pub use error::MeshError;
pub use measure::{Bounds, MeshStats};
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union};
