//! # Material Library
//!
//! The stock materials a layer can be tagged with. Geometry never depends
//! on them; the request boundary only reads their display color.

use serde::Serialize;

/// Physical and display properties of a layer material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: u32,
    pub name: &'static str,
    /// Relative magnetic permeability (μr).
    pub magnetic_permeability: f64,
    /// Relative permittivity (εr).
    pub dielectric_constant: f64,
    /// Linear RGB display color.
    pub color: [f32; 3],
}

impl Material {
    /// Opaque RGBA form of the display color.
    pub fn color_rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.color;
        [r, g, b, 1.0]
    }
}

static STANDARD_MATERIALS: [Material; 6] = [
    Material {
        id: 1,
        name: "Air",
        magnetic_permeability: 1.0,
        dielectric_constant: 1.0,
        color: [0.9, 0.95, 1.0],
    },
    Material {
        id: 2,
        name: "Copper",
        magnetic_permeability: 1.0,
        dielectric_constant: 1.0,
        color: [0.85, 0.65, 0.13],
    },
    Material {
        id: 3,
        name: "Iron",
        magnetic_permeability: 5000.0,
        dielectric_constant: 1.0,
        color: [0.55, 0.57, 0.55],
    },
    Material {
        id: 4,
        name: "Aluminium",
        magnetic_permeability: 1.0,
        dielectric_constant: 1.0,
        color: [0.75, 0.75, 0.75],
    },
    Material {
        id: 5,
        name: "Ceramic",
        magnetic_permeability: 1.0,
        dielectric_constant: 6.0,
        color: [0.9, 0.88, 0.78],
    },
    Material {
        id: 6,
        name: "Rubber",
        magnetic_permeability: 1.0,
        dielectric_constant: 3.0,
        color: [0.2, 0.2, 0.2],
    },
];

/// Lookup table of materials by id.
#[derive(Debug, Clone, Copy)]
pub struct MaterialLibrary {
    materials: &'static [Material],
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl MaterialLibrary {
    /// The six stock materials.
    pub fn standard() -> Self {
        Self {
            materials: &STANDARD_MATERIALS,
        }
    }

    pub fn all(&self) -> &[Material] {
        self.materials
    }

    pub fn get(&self, id: u32) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Air, used for layers without a material.
    pub fn default_material(&self) -> &Material {
        &STANDARD_MATERIALS[0]
    }

    /// RGBA display color of material `id`.
    pub fn color_rgba(&self, id: u32) -> Option<[f32; 4]> {
        self.get(id).map(Material::color_rgba)
    }
}
