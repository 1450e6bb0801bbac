//! WASM-facing entry points for layered shell assembly.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call `assemble_layers_internal`, which
//! returns the Rust error type instead of a `JsValue`.
//!
//! ```
//! let json = r#"{"layers":[{"outerRadius":1.0,"visible":false}]}"#;
//! let model = shell_wasm::assemble_layers_internal(json).unwrap();
//! assert_eq!(model.layer_count(), 0);
//! ```

mod mesh_handle;

pub use mesh_handle::{MeshHandle, ShellModel};

use config::constants::DEFAULT_SEGMENTS;
use shell_assembler::{assemble_request, AssemblerConfig, AssemblyError, AssemblyRequest};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "shell-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the sphere tessellation used when a request does not choose one.
///
/// # Examples
/// ```
/// assert_eq!(shell_wasm::default_segments(), 64);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Assembles the layer stack described by `request_json`.
///
/// The request is `{ layers: [{ outerRadius, thickness, visible, materialId }],
/// slicePosition, sliceEnabled, segments }`.
///
/// # Errors
/// Returns a JavaScript error value with a human-readable message when the
/// request is malformed, a layer is invalid or the geometry engine fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const model = assemble_layers(JSON.stringify({ layers, slicePosition: 90 }));
/// // for (let i = 0; i < model.layer_count(); i++) {
/// //   const mesh = model.layer(i);
/// //   geometry.setAttribute("position", new THREE.BufferAttribute(mesh.vertices(), 3));
/// // }
/// ```
#[wasm_bindgen]
pub fn assemble_layers(request_json: &str) -> Result<ShellModel, JsValue> {
    assemble_layers_internal(request_json).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-side implementation of [`assemble_layers`].
///
/// Layers are built on the calling thread; the browser has no rayon pool.
pub fn assemble_layers_internal(request_json: &str) -> Result<ShellModel, AssemblyError> {
    let request: AssemblyRequest = serde_json::from_str(request_json)?;
    let config = AssemblerConfig::default().with_parallel(false);
    let response = assemble_request(&request, &config)?;
    Ok(ShellModel::from_response(response))
}
