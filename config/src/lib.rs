//! # Config Crate
//!
//! Centralized configuration constants for the layered sphere pipeline.
//! Tessellation defaults, tolerances and cutter sizing live here so the
//! mesh engine, the assembler and the browser boundary agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{cutter_side_for_radius, DEFAULT_CUTTER_MARGIN, DEFAULT_SEGMENTS};
//!
//! assert_eq!(DEFAULT_SEGMENTS, 64);
//!
//! // A cube that comfortably contains a sphere of radius 10
//! let side = cutter_side_for_radius(10.0, DEFAULT_CUTTER_MARGIN);
//! assert!(side / 2.0 > 10.0);
//! ```

pub mod constants;
