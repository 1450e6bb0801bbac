//! # Geometry Assembler
//!
//! Turns a layer stack into one solid per visible layer.
//!
//! ## Algorithm
//!
//! 1. Validate every layer and the slice angle (no geometry yet)
//! 2. Build the cutting half-space once, sized for the visible layers
//! 3. Per visible layer, in input order:
//!    - solid: `sphere(r)`; shell: `sphere(r) − sphere(r − t)`
//!    - if slicing is enabled: `∩ half-space`
//!
//! Layers are independent once the cutter exists, so step 3 may fan out on
//! rayon. Results are collected positionally and errors resolved in input
//! order, so output and failures are the same as a sequential run.
//!
//! A shell wall thinner than the engine can resolve at the layer's scale,
//! or a layer whose geometry comes back empty or malformed, fails with
//! [`AssemblyError::GeometryEngineFailure`].

use crate::config::AssemblerConfig;
use crate::cutter::CuttingHalfSpace;
use crate::error::{AssemblyError, EngineOperation};
use crate::layer::{LayerDescriptor, LayerKind, SliceParameters};
use crate::validate::{validate_layers, validate_slice};
use config::constants::MIN_WALL_PLANE_RATIO;
use rayon::prelude::*;
use shell_mesh::ops::boolean::Tolerance;
use shell_mesh::primitives::create_sphere;
use shell_mesh::{difference, Mesh, MeshError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

// =============================================================================
// OUTPUT
// =============================================================================

/// One assembled layer.
#[derive(Debug, Clone)]
pub struct Solid {
    /// Index of the input layer this solid was built from.
    pub source_index: usize,
    pub kind: LayerKind,
    /// Whether the cutting half-space was applied.
    pub sliced: bool,
    pub mesh: Mesh,
}

// =============================================================================
// ASSEMBLER
// =============================================================================

/// Builds layer solids with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Assembler {
    config: AssemblerConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl Assembler {
    /// Creates an assembler after validating `config`.
    pub fn new(config: AssemblerConfig) -> Result<Self, AssemblyError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: None,
        })
    }

    /// Checks `flag` before each layer; once set, assembly stops with
    /// [`AssemblyError::Cancelled`].
    pub fn with_cancel_flag(self, flag: Arc<AtomicBool>) -> Self {
        Self {
            cancel: Some(flag),
            ..self
        }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assembles `layers` under `slice`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shell_assembler::{Assembler, AssemblerConfig, LayerDescriptor, SliceParameters};
    ///
    /// let assembler = Assembler::new(AssemblerConfig::default().with_segments(12)).unwrap();
    /// let layers = [
    ///     LayerDescriptor::shell(10.0, 2.0),
    ///     LayerDescriptor::solid(5.0).hidden(),
    /// ];
    ///
    /// let solids = assembler.assemble(&layers, &SliceParameters::disabled()).unwrap();
    /// assert_eq!(solids.len(), 1);
    /// assert_eq!(solids[0].source_index, 0);
    /// ```
    pub fn assemble(
        &self,
        layers: &[LayerDescriptor],
        slice: &SliceParameters,
    ) -> Result<Vec<Solid>, AssemblyError> {
        let span = tracing::debug_span!(
            "assemble",
            layers = layers.len(),
            slice_position = slice.slice_position,
            slice_enabled = slice.slice_enabled,
            segments = self.config.segments,
        );
        let _enter = span.enter();

        validate_layers(layers)?;
        validate_slice(slice)?;

        let visible: Vec<(usize, &LayerDescriptor)> = layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.visible)
            .collect();
        if visible.is_empty() {
            debug!("no visible layers");
            return Ok(Vec::new());
        }

        let cutter = if slice.slice_enabled {
            let max_radius = visible
                .iter()
                .map(|(_, layer)| layer.outer_radius)
                .fold(0.0, f64::max);
            Some(CuttingHalfSpace::for_layers(
                &self.config.cutter,
                max_radius,
                slice.slice_position,
            )?)
        } else {
            None
        };

        let build = |&(index, layer): &(usize, &LayerDescriptor)| {
            self.build_layer(index, layer, cutter.as_ref())
        };
        let results: Vec<Result<Solid, AssemblyError>> = if self.config.parallel {
            visible.par_iter().map(build).collect()
        } else {
            visible.iter().map(build).collect()
        };
        let solids = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        debug!(solids = solids.len(), "assembly complete");
        Ok(solids)
    }

    fn build_layer(
        &self,
        index: usize,
        layer: &LayerDescriptor,
        cutter: Option<&CuttingHalfSpace>,
    ) -> Result<Solid, AssemblyError> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                warn!(layer = index, "assembly cancelled");
                return Err(AssemblyError::Cancelled);
            }
        }

        let kind = layer.kind();
        debug!(
            layer = index,
            outer_radius = layer.outer_radius,
            thickness = layer.thickness,
            ?kind,
            "building layer"
        );

        let engine = |operation| move |err| AssemblyError::engine(Some(index), operation, err);
        let sphere = |radius| {
            create_sphere(radius, self.config.segments).map_err(engine(EngineOperation::Sphere))
        };

        let base = match kind {
            LayerKind::Solid => sphere(layer.outer_radius)?,
            LayerKind::Shell => {
                let outer = sphere(layer.outer_radius)?;
                let inner = sphere(layer.inner_radius())?;
                check_wall(layer.thickness, &outer, &inner, cutter)
                    .map_err(engine(EngineOperation::Subtract))?;
                difference(&outer, &inner).map_err(engine(EngineOperation::Subtract))?
            }
        };

        let (mesh, last) = match cutter {
            Some(cutter) => (
                cutter
                    .clip(&base)
                    .map_err(engine(EngineOperation::Intersect))?,
                EngineOperation::Intersect,
            ),
            None => match kind {
                LayerKind::Solid => (base, EngineOperation::Sphere),
                LayerKind::Shell => (base, EngineOperation::Subtract),
            },
        };

        if mesh.is_empty() {
            return Err(engine(last)(MeshError::degenerate("layer produced no geometry")));
        }
        mesh.validate().map_err(engine(last))?;

        Ok(Solid {
            source_index: index,
            kind,
            sliced: cutter.is_some(),
            mesh,
        })
    }
}

/// Rejects a wall the boolean engine would fold into one surface.
///
/// The limit follows the plane tolerance of every boolean the shell goes
/// through, so it scales with the layer and with the cutter.
fn check_wall(
    thickness: f64,
    outer: &Mesh,
    inner: &Mesh,
    cutter: Option<&CuttingHalfSpace>,
) -> Result<(), MeshError> {
    let mut plane = Tolerance::between(outer, inner).plane;
    if let Some(cutter) = cutter {
        plane = plane.max(Tolerance::between(outer, cutter.mesh()).plane);
    }
    let min_wall = MIN_WALL_PLANE_RATIO * plane;
    if thickness > min_wall {
        Ok(())
    } else {
        Err(MeshError::degenerate(format!(
            "shell wall {thickness:e} is below the engine resolution {min_wall:e}"
        )))
    }
}

/// Assembles `layers` with the default configuration.
///
/// # Example
///
/// ```rust
/// use shell_assembler::{assemble, LayerDescriptor};
///
/// let hidden = [LayerDescriptor::solid(4.0).hidden()];
/// assert!(assemble(&hidden, 0.0, true).unwrap().is_empty());
/// assert!(assemble(&[], 0.0, true).unwrap().is_empty());
/// ```
pub fn assemble(
    layers: &[LayerDescriptor],
    slice_position: f64,
    slice_enabled: bool,
) -> Result<Vec<Solid>, AssemblyError> {
    Assembler::new(AssemblerConfig::default())?.assemble(
        layers,
        &SliceParameters {
            slice_position,
            slice_enabled,
        },
    )
}
