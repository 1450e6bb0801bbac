//! # Mesh Handle
//!
//! WASM-friendly wrappers for assembled layers that can be transferred to
//! JavaScript.

use shell_assembler::{AssemblyResponse, LayerKind, MeshData};
use wasm_bindgen::prelude::*;

/// All assembled layers of one call, in input order.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct ShellModel {
    layers: Vec<MeshHandle>,
}

#[wasm_bindgen]
impl ShellModel {
    /// Number of assembled (visible) layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The `i`-th assembled layer, if any.
    pub fn layer(&self, i: usize) -> Option<MeshHandle> {
        self.layers.get(i).cloned()
    }
}

impl ShellModel {
    /// Wraps every layer of an assembler response.
    pub fn from_response(response: AssemblyResponse) -> Self {
        Self {
            layers: response.layers.into_iter().map(MeshHandle::from).collect(),
        }
    }
}

/// A handle to one layer's mesh buffers.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = model.layer(0);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Index of the input layer
    source_index: usize,
    shell: bool,
    sliced: bool,
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Display color as [r, g, b, a]
    color: Option<Vec<f32>>,
    /// Enclosed volume in model units
    volume: f64,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Index of the input layer this mesh was built from.
    #[wasm_bindgen(getter)]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Enclosed volume of the layer, in cubic model units.
    #[wasm_bindgen(getter)]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// True for hollow layers, false for solid spheres.
    pub fn is_shell(&self) -> bool {
        self.shell
    }

    /// True if the cutting half-space was applied.
    pub fn is_sliced(&self) -> bool {
        self.sliced
    }

    /// Returns the vertex positions as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// RGBA display color of the layer's material, if it has one.
    pub fn color(&self) -> Option<Vec<f32>> {
        self.color.clone()
    }
}

impl From<MeshData> for MeshHandle {
    fn from(data: MeshData) -> Self {
        Self {
            source_index: data.source_index,
            shell: data.kind == LayerKind::Shell,
            sliced: data.sliced,
            vertices: data.vertices,
            indices: data.indices,
            normals: data.normals,
            color: data.color.map(|c| c.to_vec()),
            volume: data.stats.volume,
        }
    }
}
