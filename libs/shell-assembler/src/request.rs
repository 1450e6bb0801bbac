//! # Request Boundary
//!
//! Serialized form of an assembly call for hosts across a process or
//! WASM boundary: a JSON request of layers and slice parameters in, flat
//! mesh buffers out.
//!
//! ## Example
//!
//! ```rust
//! use shell_assembler::request::assemble_json;
//!
//! let json = r#"{"layers":[{"outerRadius":2.0,"visible":false}],"slicePosition":90}"#;
//! let response = assemble_json(json).unwrap();
//! assert_eq!(response, r#"{"layers":[]}"#);
//! ```

use crate::assembler::{Assembler, Solid};
use crate::config::AssemblerConfig;
use crate::error::AssemblyError;
use crate::layer::{LayerDescriptor, LayerKind, SliceParameters};
use crate::materials::MaterialLibrary;
use serde::{Deserialize, Serialize};
use shell_mesh::MeshStats;

fn default_true() -> bool {
    true
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One layer as sent by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSpec {
    pub outer_radius: f64,
    #[serde(default)]
    pub thickness: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Display material; only affects the output color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<u32>,
}

impl From<&LayerSpec> for LayerDescriptor {
    fn from(spec: &LayerSpec) -> Self {
        Self {
            outer_radius: spec.outer_radius,
            thickness: spec.thickness,
            visible: spec.visible,
        }
    }
}

/// A full assembly call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyRequest {
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub slice_position: f64,
    #[serde(default = "default_true")]
    pub slice_enabled: bool,
    /// Overrides the configured sphere tessellation for this call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<u32>,
}

impl AssemblyRequest {
    pub fn slice(&self) -> SliceParameters {
        SliceParameters {
            slice_position: self.slice_position,
            slice_enabled: self.slice_enabled,
        }
    }
}

/// Mesh buffers of one assembled layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshData {
    pub source_index: usize,
    pub kind: LayerKind,
    pub sliced: bool,
    /// `[x, y, z, ...]`
    pub vertices: Vec<f32>,
    /// `[i0, i1, i2, ...]`
    pub indices: Vec<u32>,
    /// Per-vertex normals, `[nx, ny, nz, ...]`
    pub normals: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[f32; 4]>,
    /// Counts, enclosed volume and bounds in model units.
    pub stats: MeshStats,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn from_solid(solid: Solid, color: Option<[f32; 4]>) -> Self {
        let mut mesh = solid.mesh;
        mesh.compute_normals();
        let stats = MeshStats::of(&mesh);
        Self {
            source_index: solid.source_index,
            kind: solid.kind,
            sliced: solid.sliced,
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            color,
            stats,
        }
    }
}

/// Assembled layers in input order (visible layers only).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssemblyResponse {
    pub layers: Vec<MeshData>,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Assembles a decoded request.
///
/// Material ids are resolved before any geometry is built.
///
/// # Errors
///
/// `Request` for an unknown `materialId`, otherwise whatever
/// [`Assembler::assemble`] reports.
pub fn assemble_request(
    request: &AssemblyRequest,
    config: &AssemblerConfig,
) -> Result<AssemblyResponse, AssemblyError> {
    let library = MaterialLibrary::standard();
    let colors = request
        .layers
        .iter()
        .enumerate()
        .map(|(index, spec)| match spec.material_id {
            Some(id) => library.color_rgba(id).map(Some).ok_or_else(|| {
                AssemblyError::Request(format!("layer {index}: unknown materialId {id}"))
            }),
            None => Ok(None),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let layers: Vec<LayerDescriptor> = request.layers.iter().map(LayerDescriptor::from).collect();
    let config = match request.segments {
        Some(segments) => config.with_segments(segments),
        None => *config,
    };
    let solids = Assembler::new(config)?.assemble(&layers, &request.slice())?;

    let layers = solids
        .into_iter()
        .map(|solid| {
            let color = colors.get(solid.source_index).copied().flatten();
            MeshData::from_solid(solid, color)
        })
        .collect();
    Ok(AssemblyResponse { layers })
}

/// Decodes a JSON request, assembles it with `config` and encodes the response.
pub fn assemble_json_with(json: &str, config: &AssemblerConfig) -> Result<String, AssemblyError> {
    let request: AssemblyRequest = serde_json::from_str(json)?;
    let response = assemble_request(&request, config)?;
    Ok(serde_json::to_string(&response)?)
}

/// [`assemble_json_with`] using the default configuration.
pub fn assemble_json(json: &str) -> Result<String, AssemblyError> {
    assemble_json_with(json, &AssemblerConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AssemblerConfig {
        AssemblerConfig::default().with_segments(8).with_parallel(false)
    }

    #[test]
    fn test_request_defaults() {
        let request: AssemblyRequest =
            serde_json::from_str(r#"{"layers":[{"outerRadius":3}]}"#).unwrap();
        assert_eq!(request.slice(), SliceParameters::default());
        assert_eq!(
            request.layers[0],
            LayerSpec {
                outer_radius: 3.0,
                thickness: 0.0,
                visible: true,
                material_id: None,
            }
        );
    }

    #[test]
    fn test_request_camel_case_fields() {
        let json = r#"{
            "layers": [{"outerRadius": 10, "thickness": 2, "visible": true, "materialId": 3}],
            "slicePosition": 45.5,
            "sliceEnabled": false
        }"#;
        let request: AssemblyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.slice_position, 45.5);
        assert!(!request.slice_enabled);
        assert_eq!(request.layers[0].material_id, Some(3));
    }

    #[test]
    fn test_response_buffers_are_consistent() {
        let request = AssemblyRequest {
            layers: vec![LayerSpec {
                outer_radius: 2.0,
                thickness: 0.5,
                visible: true,
                material_id: Some(2),
            }],
            slice_position: 0.0,
            slice_enabled: true,
            segments: None,
        };

        let response = assemble_request(&request, &config()).unwrap();

        let layer = &response.layers[0];
        assert_eq!(layer.kind, LayerKind::Shell);
        assert!(layer.sliced);
        assert_eq!(layer.normals.len(), layer.vertices.len());
        assert!(layer.indices.iter().all(|&i| (i as usize) < layer.vertex_count()));
        assert_eq!(layer.color, Some([0.85, 0.65, 0.13, 1.0]));
        assert_eq!(layer.stats.vertex_count, layer.vertex_count());
        assert_eq!(layer.stats.triangle_count, layer.triangle_count());
        // Upper half only
        assert!(layer.stats.bounds.min[1] >= -1e-12);
        assert!(layer.stats.volume > 0.0);
    }

    #[test]
    fn test_request_segments_override_config() {
        let json = r#"{"layers":[{"outerRadius":1}],"sliceEnabled":false,"segments":6}"#;
        let response: AssemblyResponse =
            serde_json::from_str(&assemble_json_with(json, &config()).unwrap()).unwrap();

        // 3 rings of 6 vertices
        assert_eq!(response.layers[0].vertex_count(), 18);

        let json = r#"{"layers":[{"outerRadius":1}],"segments":2}"#;
        let err = assemble_json_with(json, &config()).unwrap_err();
        assert!(matches!(err, AssemblyError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_material_fails_fast() {
        let json = r#"{"layers":[{"outerRadius":1,"materialId":42}]}"#;
        let err = assemble_json_with(json, &config()).unwrap_err();
        assert!(matches!(err, AssemblyError::Request(ref msg) if msg.contains("42")));
    }

    #[test]
    fn test_malformed_json() {
        let err = assemble_json("{\"layers\": [").unwrap_err();
        assert!(matches!(err, AssemblyError::Request(_)));
    }

    #[test]
    fn test_invalid_layer_passes_through() {
        let json = r#"{"layers":[{"outerRadius":1},{"outerRadius":-2}]}"#;
        let err = assemble_json_with(json, &config()).unwrap_err();
        assert_eq!(err.layer_index(), Some(1));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let json = r#"{"layers":[
            {"outerRadius":3,"thickness":1},
            {"outerRadius":2,"visible":false},
            {"outerRadius":1}
        ],"sliceEnabled":false}"#;

        let response: AssemblyResponse =
            serde_json::from_str(&assemble_json_with(json, &config()).unwrap()).unwrap();

        let order: Vec<usize> = response.layers.iter().map(|l| l.source_index).collect();
        assert_eq!(order, vec![0, 2]);
        assert_eq!(response.layers[1].kind, LayerKind::Solid);
        assert!(response.layers.iter().all(|l| !l.sliced && l.color.is_none()));
    }
}
