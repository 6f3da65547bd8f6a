/// Renderer trait - main rendering factory and draw interface

use std::sync::Arc;
use std::sync::Mutex;
use std::collections::HashMap;
use winit::window::Window;

use crate::error::{Error, Result};
use crate::renderer::{Texture, TextureDesc, RenderTarget, RenderTargetDesc};
use crate::scene::Scene;
use crate::camera::Camera;

// ============================================================================
// Configuration and statistics
// ============================================================================

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Enable validation/debug layers
    pub enable_validation: bool,
    /// Application name
    pub app_name: String,
    /// Application version (major, minor, patch)
    pub app_version: (u32, u32, u32),
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            app_name: "Helix3D Application".to_string(),
            app_version: (1, 0, 0),
        }
    }
}

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct RendererStats {
    /// Number of draw calls this frame
    pub draw_calls: u32,
    /// Number of triangles drawn this frame
    pub triangles: u32,
    /// GPU memory used (bytes)
    pub gpu_memory_used: u64,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// The central factory and draw interface implemented by backend-specific
/// renderers. The "current render target" is a single mutable slot: `None`
/// means the visible canvas. Callers composing multiple offscreen passes
/// must restore the slot they need before presenting (`FrameBuffer::render`
/// does this automatically).
pub trait Renderer: Send + Sync {
    /// Scale factor between logical (CSS) pixels and physical device pixels
    fn pixel_ratio(&self) -> f32;

    /// Current host canvas dimensions in logical pixels
    fn canvas_size(&self) -> (u32, u32);

    /// Create a texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create an offscreen render target
    ///
    /// # Arguments
    ///
    /// * `desc` - Render target descriptor (physical-pixel size + options)
    ///
    /// # Returns
    ///
    /// A shared pointer to the created render target
    fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<Arc<dyn RenderTarget>>;

    /// Bind a render target as the current destination
    ///
    /// `None` binds the visible canvas.
    fn set_render_target(&mut self, target: Option<Arc<dyn RenderTarget>>);

    /// Get the currently bound render target (`None` = visible canvas)
    fn current_render_target(&self) -> Option<Arc<dyn RenderTarget>>;

    /// Draw a scene with a camera into the current render target
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()>;

    /// Notify renderer that the host canvas has been resized
    ///
    /// # Arguments
    ///
    /// * `width` - New canvas width in logical pixels
    /// * `height` - New canvas height in logical pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Get statistics about the renderer
    fn stats(&self) -> RendererStats;
}

// ============================================================================
// Plugin system for registering renderer backends
// ============================================================================

/// Renderer plugin factory function type
type RendererPluginFactory = Box<dyn Fn(&Window, RendererConfig) -> Result<Arc<Mutex<dyn Renderer>>> + Send + Sync>;

/// Plugin registry for renderer backends
pub struct RendererPluginRegistry {
    plugins: HashMap<&'static str, RendererPluginFactory>,
}

impl RendererPluginRegistry {
    /// Create a new plugin registry
    fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register a plugin
    ///
    /// # Arguments
    ///
    /// * `name` - Plugin name (e.g., "vulkan")
    /// * `factory` - Factory function to create the plugin
    pub fn register_plugin<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn(&Window, RendererConfig) -> Result<Arc<Mutex<dyn Renderer>>> + Send + Sync + 'static,
    {
        self.plugins.insert(name, Box::new(factory));
    }

    /// Create a renderer using a registered plugin
    ///
    /// # Arguments
    ///
    /// * `plugin_name` - Name of the plugin to use
    /// * `window` - Window to render to
    /// * `config` - Renderer configuration
    ///
    /// # Returns
    ///
    /// A shared, thread-safe renderer instance
    pub fn create_renderer(&self, plugin_name: &str, window: &Window, config: RendererConfig) -> Result<Arc<Mutex<dyn Renderer>>> {
        self.plugins
            .get(plugin_name)
            .ok_or_else(|| Error::InitializationFailed(format!("Plugin '{}' not found", plugin_name)))?
            (window, config)
    }
}

static RENDERER_REGISTRY: Mutex<Option<RendererPluginRegistry>> = Mutex::new(None);

/// Get the global renderer plugin registry
pub fn renderer_plugin_registry() -> &'static Mutex<Option<RendererPluginRegistry>> {
    // Initialize on first access
    if let Ok(mut registry) = RENDERER_REGISTRY.lock() {
        if registry.is_none() {
            *registry = Some(RendererPluginRegistry::new());
        }
    }
    &RENDERER_REGISTRY
}

/// Register a renderer plugin in the global registry
///
/// # Arguments
///
/// * `name` - Plugin name
/// * `factory` - Factory function
pub fn register_renderer_plugin<F>(name: &'static str, factory: F)
where
    F: Fn(&Window, RendererConfig) -> Result<Arc<Mutex<dyn Renderer>>> + Send + Sync + 'static,
{
    if let Ok(mut registry) = renderer_plugin_registry().lock() {
        if let Some(registry) = registry.as_mut() {
            registry.register_plugin(name, factory);
        }
    }
}
