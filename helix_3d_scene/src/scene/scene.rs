/// Scene: a collection of mesh instances plus lights and a background.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Instances are stored contiguously for cache-friendly iteration.

use std::sync::Arc;
use slotmap::SlotMap;
use glam::Mat4;
use bitflags::bitflags;
use crate::resource::{Geometry, Material};
use crate::scene::DirectionalLight;

slotmap::new_key_type! {
    /// Stable key for a mesh instance in a scene
    pub struct MeshInstanceKey;
}

bitflags! {
    /// Per-instance rendering flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RenderFlags: u32 {
        /// Instance occludes light and writes into shadow maps
        const CAST_SHADOW = 1 << 0;
        /// Instance samples shadow maps when shaded
        const RECEIVE_SHADOW = 1 << 1;
        /// Backend may recompute the world matrix every frame.
        /// Cleared for instances that never move after construction.
        const MATRIX_AUTO_UPDATE = 1 << 2;
    }
}

/// One renderable object: geometry + material + transform + flags
pub struct MeshInstance {
    geometry: Arc<Geometry>,
    material: Material,
    local_transform: Mat4,
    flags: RenderFlags,
}

impl MeshInstance {
    /// Create an instance with an identity transform.
    ///
    /// Matrix auto-update starts enabled; shadows start disabled.
    pub fn new(geometry: Arc<Geometry>, material: Material) -> Self {
        Self {
            geometry,
            material,
            local_transform: Mat4::IDENTITY,
            flags: RenderFlags::MATRIX_AUTO_UPDATE,
        }
    }

    // ===== ACCESSORS =====

    /// Instance geometry
    pub fn geometry(&self) -> &Arc<Geometry> {
        &self.geometry
    }

    /// Instance material
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Local transform matrix
    pub fn local_transform(&self) -> &Mat4 {
        &self.local_transform
    }

    /// Set the local transform matrix
    pub fn set_local_transform(&mut self, transform: Mat4) {
        self.local_transform = transform;
    }

    /// Rendering flags
    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    /// Turn flags on
    pub fn insert_flags(&mut self, flags: RenderFlags) {
        self.flags.insert(flags);
    }

    /// Turn flags off
    pub fn remove_flags(&mut self, flags: RenderFlags) {
        self.flags.remove(flags);
    }

    /// Enable or disable per-frame world-matrix recomputation
    pub fn set_matrix_auto_update(&mut self, auto_update: bool) {
        self.flags.set(RenderFlags::MATRIX_AUTO_UPDATE, auto_update);
    }
}

/// A renderable scene containing mesh instances, lights, and a background.
///
/// Instances are managed via stable keys (MeshInstanceKey).
/// Keys remain valid even after other instances are removed.
#[derive(Default)]
pub struct Scene {
    /// Background clear color (linear RGB), `None` = backend default
    background: Option<[f32; 3]>,
    /// Directional lights
    lights: Vec<DirectionalLight>,
    /// Mesh instances stored in a slot map for O(1) insert/remove
    instances: SlotMap<MeshInstanceKey, MeshInstance>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            background: None,
            lights: Vec::new(),
            instances: SlotMap::with_key(),
        }
    }

    // ===== BACKGROUND =====

    /// Set the background clear color (linear RGB)
    pub fn set_background(&mut self, color: [f32; 3]) {
        self.background = Some(color);
    }

    /// Background clear color, if set
    pub fn background(&self) -> Option<[f32; 3]> {
        self.background
    }

    // ===== LIGHTS =====

    /// Add a directional light
    pub fn add_light(&mut self, light: DirectionalLight) {
        self.lights.push(light);
    }

    /// All lights
    pub fn lights(&self) -> &[DirectionalLight] {
        &self.lights
    }

    // ===== INSTANCES =====

    /// Add a mesh instance to the scene
    ///
    /// Returns a stable key that remains valid until the instance is removed.
    pub fn add_instance(&mut self, instance: MeshInstance) -> MeshInstanceKey {
        self.instances.insert(instance)
    }

    /// Remove a mesh instance. Returns false if the key is invalid.
    pub fn remove_instance(&mut self, key: MeshInstanceKey) -> bool {
        self.instances.remove(key).is_some()
    }

    /// Get a mesh instance by key
    pub fn instance(&self, key: MeshInstanceKey) -> Option<&MeshInstance> {
        self.instances.get(key)
    }

    /// Get a mutable mesh instance by key
    pub fn instance_mut(&mut self, key: MeshInstanceKey) -> Option<&mut MeshInstance> {
        self.instances.get_mut(key)
    }

    /// Iterate over all instances (key, instance)
    pub fn instances(&self) -> impl Iterator<Item = (MeshInstanceKey, &MeshInstance)> {
        self.instances.iter()
    }

    /// Number of mesh instances
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Remove all instances, lights, and the background
    pub fn clear(&mut self) {
        self.instances.clear();
        self.lights.clear();
        self.background = None;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
