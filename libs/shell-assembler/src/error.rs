//! # Assembly Errors
//!
//! Error types for layer validation and geometry assembly.
//!
//! ## Error Policy
//!
//! - Invalid layers are rejected before any geometry is built
//! - Engine failures are surfaced unmodified with layer and step context
//! - No retries and no substitute geometry

use crate::config::ConfigError;
use shell_mesh::MeshError;
use std::fmt;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while assembling a layer stack.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A layer descriptor describes a malformed solid.
    #[error("Invalid layer {index}: {field} = {value} ({reason})")]
    InvalidLayerGeometry {
        /// Position of the layer in the input sequence
        index: usize,
        /// Offending field
        field: LayerField,
        /// Offending value
        value: f64,
        /// What the value violates
        reason: &'static str,
    },

    /// The geometry engine failed on otherwise valid input.
    #[error("Geometry engine failed during {operation} {}: {source}", describe_layer(.layer))]
    GeometryEngineFailure {
        /// Layer being built, `None` for the shared cutting half-space
        layer: Option<usize>,
        /// Engine step that failed
        operation: EngineOperation,
        /// Error reported by the engine
        source: MeshError,
    },

    /// The slice angle cannot be used.
    #[error("Invalid slice position: {value}")]
    InvalidSlice {
        /// Offending angle in degrees
        value: f64,
    },

    /// A fixed-size cutter cannot contain the largest visible layer.
    #[error("Cutter side {side} does not contain layer radius {max_radius}")]
    CutterTooSmall {
        /// Cutter side length
        side: f64,
        /// Largest visible outer radius
        max_radius: f64,
    },

    /// The assembler configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The cancel flag was raised before all layers were built.
    #[error("Assembly cancelled")]
    Cancelled,

    /// The serialized request could not be decoded or the response encoded.
    #[error("Invalid request: {0}")]
    Request(String),
}

impl From<serde_json::Error> for AssemblyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Request(err.to_string())
    }
}

impl AssemblyError {
    /// Wraps an engine error with the layer and step it came from.
    pub fn engine(layer: Option<usize>, operation: EngineOperation, source: MeshError) -> Self {
        Self::GeometryEngineFailure {
            layer,
            operation,
            source,
        }
    }

    /// Index of the layer this error refers to, if any.
    pub fn layer_index(&self) -> Option<usize> {
        match self {
            Self::InvalidLayerGeometry { index, .. } => Some(*index),
            Self::GeometryEngineFailure { layer, .. } => *layer,
            _ => None,
        }
    }
}

fn describe_layer(layer: &Option<usize>) -> String {
    match layer {
        Some(index) => format!("on layer {index}"),
        None => "on the cutting half-space".to_string(),
    }
}

/// Layer field named by [`AssemblyError::InvalidLayerGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerField {
    OuterRadius,
    Thickness,
}

impl fmt::Display for LayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OuterRadius => "outerRadius",
            Self::Thickness => "thickness",
        })
    }
}

/// Geometry engine step named by [`AssemblyError::GeometryEngineFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOperation {
    Sphere,
    Cuboid,
    Translate,
    Rotate,
    Subtract,
    Intersect,
}

impl fmt::Display for EngineOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sphere => "sphere",
            Self::Cuboid => "cuboid",
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Subtract => "subtract",
            Self::Intersect => "intersect",
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
