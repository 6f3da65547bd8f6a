/// Model and submesh types - the mesh side of a loaded asset bundle.
///
/// A Model is an ordered list of submeshes. The order is significant: the
/// submesh index drives per-submesh material parameters (scroll direction
/// and speed) during scene assembly.

use std::sync::Arc;
use crate::resource::Geometry;

/// One drawable part of a model
pub struct Submesh {
    geometry: Arc<Geometry>,
}

impl Submesh {
    /// Create a submesh from geometry
    pub fn new(geometry: Arc<Geometry>) -> Self {
        Self { geometry }
    }

    /// Get the submesh geometry
    pub fn geometry(&self) -> &Arc<Geometry> {
        &self.geometry
    }
}

/// A loaded model: an ordered collection of submeshes
pub struct Model {
    submeshes: Vec<Submesh>,
}

impl Model {
    /// Create a model from submeshes
    pub fn new(submeshes: Vec<Submesh>) -> Self {
        Self { submeshes }
    }

    /// Get all submeshes in order
    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    /// Get the number of submeshes
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }
}
