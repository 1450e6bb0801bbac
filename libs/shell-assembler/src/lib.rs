//! # Shell Assembler
//!
//! CSG assembly of multi-layer spherical shells, optionally sliced open by a
//! rotatable half-space to reveal the inner layers.
//!
//! ## Architecture
//!
//! ```text
//! [LayerDescriptor] + SliceParameters
//!       ↓ validate (all layers, before any geometry)
//! CuttingHalfSpace (built once, shared read-only)
//!       ↓ per visible layer
//! sphere | sphere − sphere  →  ∩ half-space
//!       ↓
//! [Solid] in input order
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shell_assembler::{Assembler, AssemblerConfig, LayerDescriptor, SliceParameters};
//!
//! let layers = [
//!     LayerDescriptor::shell(10.0, 2.0),
//!     LayerDescriptor::solid(5.0).hidden(),
//!     LayerDescriptor::solid(15.0),
//! ];
//! let assembler = Assembler::new(AssemblerConfig::preview().with_segments(12)).unwrap();
//! let solids = assembler.assemble(&layers, &SliceParameters::at(90.0)).unwrap();
//!
//! let sources: Vec<usize> = solids.iter().map(|s| s.source_index).collect();
//! assert_eq!(sources, vec![0, 2]);
//! ```

pub mod assembler;
pub mod config;
pub mod cutter;
pub mod error;
pub mod layer;
pub mod materials;
pub mod request;
pub mod validate;

pub use assembler::{assemble, Assembler, Solid};
pub use config::{AssemblerConfig, ConfigError};
pub use cutter::{CutterBounds, CuttingHalfSpace};
pub use error::{AssemblyError, EngineOperation, LayerField};
pub use layer::{LayerDescriptor, LayerKind, SliceParameters};
pub use materials::{Material, MaterialLibrary};
pub use request::{assemble_json, assemble_request, AssemblyRequest, AssemblyResponse, LayerSpec, MeshData};
pub use validate::{validate_layers, validate_slice};
