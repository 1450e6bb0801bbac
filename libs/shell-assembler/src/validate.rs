//! # Input Validation
//!
//! Every layer is checked, visible or not, before any geometry is built so
//! a bad request fails without partial work.

use crate::error::{AssemblyError, LayerField};
use crate::layer::{LayerDescriptor, SliceParameters};

/// Validates the whole layer sequence, reporting the lowest offending index.
///
/// # Errors
///
/// `InvalidLayerGeometry` when `outer_radius` is non-finite or `≤ 0`, or
/// when `thickness` is non-finite, negative or larger than `outer_radius`.
pub fn validate_layers(layers: &[LayerDescriptor]) -> Result<(), AssemblyError> {
    layers
        .iter()
        .enumerate()
        .try_for_each(|(index, layer)| validate_layer(index, layer))
}

fn validate_layer(index: usize, layer: &LayerDescriptor) -> Result<(), AssemblyError> {
    let invalid = |field, value, reason| AssemblyError::InvalidLayerGeometry {
        index,
        field,
        value,
        reason,
    };

    let LayerDescriptor {
        outer_radius,
        thickness,
        ..
    } = *layer;

    if !outer_radius.is_finite() {
        return Err(invalid(LayerField::OuterRadius, outer_radius, "must be finite"));
    }
    if outer_radius <= 0.0 {
        return Err(invalid(LayerField::OuterRadius, outer_radius, "must be positive"));
    }
    if !thickness.is_finite() {
        return Err(invalid(LayerField::Thickness, thickness, "must be finite"));
    }
    if thickness < 0.0 {
        return Err(invalid(LayerField::Thickness, thickness, "must be non-negative"));
    }
    if thickness > outer_radius {
        return Err(invalid(
            LayerField::Thickness,
            thickness,
            "must not exceed outerRadius",
        ));
    }
    Ok(())
}

/// Validates the slice angle. A disabled slice ignores its angle entirely.
pub fn validate_slice(slice: &SliceParameters) -> Result<(), AssemblyError> {
    if slice.slice_enabled && !slice.slice_position.is_finite() {
        return Err(AssemblyError::InvalidSlice {
            value: slice.slice_position,
        });
    }
    Ok(())
}
