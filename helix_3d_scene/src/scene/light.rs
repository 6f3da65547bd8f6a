/// Directional light with optional shadow mapping configuration.

use glam::Vec3;

/// Shadow-map configuration for a directional light
///
/// The defaults match the banded-knot display scene: a 2048x2048 map with a
/// tight orthographic frustum around the model and a small negative bias to
/// avoid acne.
#[derive(Debug, Clone)]
pub struct ShadowConfig {
    /// Shadow map dimensions in pixels
    pub map_size: (u32, u32),
    /// Half-extent of the orthographic shadow frustum
    pub frustum_extent: f32,
    /// Near clip distance of the shadow camera
    pub near: f32,
    /// Far clip distance of the shadow camera
    pub far: f32,
    /// Depth bias applied when sampling the shadow map
    pub bias: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: (2048, 2048),
            frustum_extent: 5.0,
            near: 0.01,
            far: 20.0,
            bias: -0.001,
        }
    }
}

/// A directional light
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// Light color (linear RGB)
    pub color: [f32; 3],
    /// Light intensity multiplier
    pub intensity: f32,
    /// Light position; the light points from here toward the origin
    pub position: Vec3,
    /// Shadow configuration; `None` disables shadow casting
    pub shadow: Option<ShadowConfig>,
}

impl DirectionalLight {
    /// Create a light with no shadows, positioned at the origin
    pub fn new(color: [f32; 3], intensity: f32) -> Self {
        Self {
            color,
            intensity,
            position: Vec3::ZERO,
            shadow: None,
        }
    }

    /// True if this light casts shadows
    pub fn casts_shadows(&self) -> bool {
        self.shadow.is_some()
    }
}
