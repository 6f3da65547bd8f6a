/// Geometry - CPU-side vertex and index data.
///
/// Vertices are interleaved (position, normal, uv) and plain-old-data so the
/// backend can upload them without repacking.

use bytemuck::{Pod, Zeroable};
use crate::error::Result;
use crate::engine_bail;

/// Interleaved vertex: position, normal, texture coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle geometry
pub struct Geometry {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Geometry {
    /// Create geometry from vertex and index data
    ///
    /// # Errors
    ///
    /// Returns an error if any index is out of range.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self> {
        let vertex_count = vertices.len() as u32;
        for &index in &indices {
            if index >= vertex_count {
                engine_bail!("helix3d::Geometry",
                    "Index {} out of range (vertex count = {})", index, vertex_count);
            }
        }
        Ok(Self { vertices, indices })
    }

    /// Create a two-triangle quad centered at the origin in the XY plane.
    ///
    /// A 2x2 quad covers the whole normalized view volume under the default
    /// orthographic camera, which is what a full-viewport shader pass needs.
    pub fn plane(width: f32, height: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let vertices = vec![
            Vertex { position: [-hw, -hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [0.0, 0.0] },
            Vertex { position: [ hw, -hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [1.0, 0.0] },
            Vertex { position: [ hw,  hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [1.0, 1.0] },
            Vertex { position: [-hw,  hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [0.0, 1.0] },
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        Self { vertices, indices }
    }

    // ===== ACCESSORS =====

    /// Vertex data
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Index data
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex data as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
