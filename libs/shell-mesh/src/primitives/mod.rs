//! # Primitives
//!
//! Mesh generation for the solids a layered sphere model is built from.

pub mod cuboid;
pub mod sphere;

pub use cuboid::create_cuboid;
pub use sphere::create_sphere;
