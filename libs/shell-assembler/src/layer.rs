//! # Layer Model
//!
//! Input descriptors for the shell stack and the global slice parameters.

use serde::{Deserialize, Serialize};

/// One layer of the stack: a solid sphere or a hollow spherical shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerDescriptor {
    /// Outer radius of the layer's sphere.
    pub outer_radius: f64,
    /// Wall thickness; `0` means a solid sphere.
    pub thickness: f64,
    /// Invisible layers produce no output at all.
    pub visible: bool,
}

impl LayerDescriptor {
    /// A visible solid sphere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shell_assembler::{LayerDescriptor, LayerKind};
    ///
    /// let core = LayerDescriptor::solid(5.0);
    /// assert_eq!(core.kind(), LayerKind::Solid);
    /// ```
    pub fn solid(outer_radius: f64) -> Self {
        Self {
            outer_radius,
            thickness: 0.0,
            visible: true,
        }
    }

    /// A visible hollow shell.
    pub fn shell(outer_radius: f64, thickness: f64) -> Self {
        Self {
            outer_radius,
            thickness,
            visible: true,
        }
    }

    /// The same layer with `visible = false`.
    pub fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    /// Radius of the cavity; `0` for solid layers.
    pub fn inner_radius(&self) -> f64 {
        match self.kind() {
            LayerKind::Solid => 0.0,
            LayerKind::Shell => self.outer_radius - self.thickness,
        }
    }

    /// Whether the layer is built as a solid sphere or as a shell.
    ///
    /// A thickness equal to the outer radius leaves a zero-radius cavity,
    /// which is the solid sphere.
    pub fn kind(&self) -> LayerKind {
        if self.thickness > 0.0 && self.thickness < self.outer_radius {
            LayerKind::Shell
        } else {
            LayerKind::Solid
        }
    }
}

/// Shape of an assembled layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Solid,
    Shell,
}

/// Global slicing parameters of one assembly call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceParameters {
    /// Rotation of the cutting half-space about the vertical axis, in degrees.
    pub slice_position: f64,
    /// When false no layer is clipped, whatever `slice_position` says.
    pub slice_enabled: bool,
}

impl SliceParameters {
    /// Slicing enabled at the given angle.
    pub fn at(slice_position: f64) -> Self {
        Self {
            slice_position,
            slice_enabled: true,
        }
    }

    /// Slicing disabled.
    pub fn disabled() -> Self {
        Self {
            slice_position: 0.0,
            slice_enabled: false,
        }
    }
}

impl Default for SliceParameters {
    fn default() -> Self {
        Self::at(0.0)
    }
}
