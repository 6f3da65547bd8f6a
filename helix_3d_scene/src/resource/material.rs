/// Resource-level material type.
///
/// A Material is an explicit description of a surface: a vertex/fragment
/// shader source pair plus its uniform set. There is no late-bound
/// compilation hook; everything the backend needs to compile and bind the
/// program is present at construction time.
///
/// The live uniform set is shared: the material owns it, and any registry
/// that animates uniforms per frame references the same set.

use std::sync::{Arc, Mutex};
use crate::error::Result;
use crate::engine_bail;
use crate::resource::{UniformSet, UniformValue};

// ===== SHADER SOURCE =====

/// An explicit vertex/fragment shader source pair
///
/// Sources are static strings, typically inlined from shader files with
/// `include_str!`.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSource {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

// ===== DESCRIPTOR =====

/// Material creation descriptor
pub struct MaterialDesc {
    /// Shader program sources
    pub shader: ShaderSource,
    /// Initial uniforms (name, value); names must be unique
    pub uniforms: Vec<(String, UniformValue)>,
    /// Base surface color (linear RGB)
    pub base_color: [f32; 3],
    /// Render both faces
    pub double_sided: bool,
}

// ===== MATERIAL =====

/// Material resource: shader sources plus live uniforms
///
/// Cloning a Material shares the uniform set; mutations through one clone
/// are visible through the others.
#[derive(Clone)]
pub struct Material {
    shader: ShaderSource,
    uniforms: Arc<Mutex<UniformSet>>,
    base_color: [f32; 3],
    double_sided: bool,
}

impl Material {
    /// Create a material from a descriptor
    ///
    /// # Errors
    ///
    /// Returns an error if two uniforms share a name.
    pub fn from_desc(desc: MaterialDesc) -> Result<Self> {
        let mut uniforms = UniformSet::new();
        for (name, value) in desc.uniforms {
            if uniforms.contains(&name) {
                engine_bail!("helix3d::Material",
                    "Duplicate uniform name '{}'", name);
            }
            uniforms.insert(name, value);
        }

        Ok(Self {
            shader: desc.shader,
            uniforms: Arc::new(Mutex::new(uniforms)),
            base_color: desc.base_color,
            double_sided: desc.double_sided,
        })
    }

    // ===== ACCESSORS =====

    /// Shader program sources
    pub fn shader(&self) -> &ShaderSource {
        &self.shader
    }

    /// Shared handle to the live uniform set
    pub fn uniforms(&self) -> Arc<Mutex<UniformSet>> {
        self.uniforms.clone()
    }

    /// Base surface color (linear RGB)
    pub fn base_color(&self) -> [f32; 3] {
        self.base_color
    }

    /// True if both faces are rendered
    pub fn double_sided(&self) -> bool {
        self.double_sided
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
