//! # Mesh Operations
//!
//! Operations that combine meshes.

pub mod boolean;

pub use boolean::{difference, intersection, union};
