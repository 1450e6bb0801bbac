//! Layers far from unit size, and shells close to the engine's resolution.
//!
//! Each case either matches the volume of its primitives or fails with a
//! `GeometryEngineFailure`; nothing comes back empty or distorted.

use approx::assert_relative_eq;
use config::constants::DEFAULT_SEGMENTS;
use shell_assembler::{
    Assembler, AssemblerConfig, AssemblyError, EngineOperation, LayerDescriptor, SliceParameters,
    Solid,
};
use shell_mesh::measure::{signed_volume, volume};
use shell_mesh::primitives::create_sphere;

fn shell_volume(radius: f64, thickness: f64, segments: u32) -> f64 {
    let outer = create_sphere(radius, segments).unwrap();
    let inner = create_sphere(radius - thickness, segments).unwrap();
    volume(&outer) - volume(&inner)
}

fn build(
    radius: f64,
    thickness: f64,
    segments: u32,
    slice: SliceParameters,
) -> Result<Solid, AssemblyError> {
    let assembler = Assembler::new(AssemblerConfig::default().with_segments(segments)).unwrap();
    let mut solids = assembler.assemble(&[LayerDescriptor::shell(radius, thickness)], &slice)?;
    assert_eq!(solids.len(), 1);
    Ok(solids.remove(0))
}

fn assert_shell(radius: f64, thickness: f64, segments: u32) {
    let expected = shell_volume(radius, thickness, segments);

    let whole = build(radius, thickness, segments, SliceParameters::disabled()).unwrap();
    assert!(!whole.mesh.is_empty());
    assert_relative_eq!(signed_volume(&whole.mesh), expected, max_relative = 1e-6);

    let half = build(radius, thickness, segments, SliceParameters::at(0.0)).unwrap();
    assert!(!half.mesh.is_empty());
    assert_relative_eq!(signed_volume(&half.mesh), expected / 2.0, max_relative = 1e-6);
}

fn assert_wall_rejected(result: Result<Solid, AssemblyError>) {
    let err = result.unwrap_err();
    assert!(
        matches!(
            err,
            AssemblyError::GeometryEngineFailure {
                layer: Some(0),
                operation: EngineOperation::Subtract,
                ..
            }
        ),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains("resolution"));
}

// =============================================================================
// SMALL AND LARGE LAYERS
// =============================================================================

#[test]
fn centimetre_shell_at_default_tessellation() {
    assert_shell(0.01, 0.002, DEFAULT_SEGMENTS);
}

#[test]
fn millimetre_shell() {
    assert_shell(0.001, 0.0002, 24);
}

#[test]
fn kilometre_shell() {
    assert_shell(1000.0, 1.0, 24);
}

#[test]
fn small_and_large_layers_differ_only_by_scale() {
    let small = build(0.05, 0.01, 24, SliceParameters::at(30.0)).unwrap();
    let large = build(50.0, 10.0, 24, SliceParameters::at(30.0)).unwrap();

    assert_eq!(small.mesh.triangle_count(), large.mesh.triangle_count());
    assert_relative_eq!(
        signed_volume(&small.mesh) * 1e9,
        signed_volume(&large.mesh),
        max_relative = 1e-6
    );
}

// =============================================================================
// THIN WALLS
// =============================================================================

#[test]
fn micron_wall_at_default_tessellation() {
    let expected = shell_volume(10.0, 1e-6, DEFAULT_SEGMENTS);

    let half = build(10.0, 1e-6, DEFAULT_SEGMENTS, SliceParameters::at(0.0)).unwrap();

    assert!(!half.mesh.is_empty());
    assert_relative_eq!(signed_volume(&half.mesh), expected / 2.0, max_relative = 1e-6);
}

#[test]
fn ten_micron_wall_unsliced() {
    let expected = shell_volume(10.0, 1e-5, 24);

    let whole = build(10.0, 1e-5, 24, SliceParameters::disabled()).unwrap();

    assert_relative_eq!(signed_volume(&whole.mesh), expected, max_relative = 1e-6);
}

#[test]
fn wall_below_resolution_is_rejected() {
    assert_wall_rejected(build(10.0, 1e-9, 24, SliceParameters::disabled()));
    assert_wall_rejected(build(10.0, 1e-9, 24, SliceParameters::at(0.0)));
}

#[test]
fn resolution_follows_layer_size() {
    // The same wall is resolvable on a small layer but not on a huge one
    assert!(build(1.0, 1e-6, 12, SliceParameters::disabled()).is_ok());
    assert_wall_rejected(build(1e5, 1e-6, 12, SliceParameters::disabled()));
}
