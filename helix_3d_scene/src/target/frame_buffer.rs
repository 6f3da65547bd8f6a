/// FrameBuffer: an offscreen full-viewport-quad render surface.
///
/// Owns one render target, a minimal scene holding a single 2x2 quad, and an
/// orthographic camera framing that quad. Rendering binds the target, draws
/// the quad with the caller-supplied material, and restores whatever target
/// was bound before, so chaining several surfaces plus a final visible pass
/// is safe without caller discipline.
///
/// Sizing is device-pixel-ratio aware: unless fixed in the options, the
/// effective size tracks the host canvas and is recomputed on demand, never
/// cached.

use std::sync::{Arc, Mutex, MutexGuard};
use crate::error::{Error, Result};
use crate::{engine_bail, engine_err, engine_debug};
use crate::renderer::{Renderer, RenderTarget, RenderTargetDesc, RenderTargetOptions, Texture};
use crate::resource::{Geometry, Material, UniformSet};
use crate::scene::{MeshInstance, Scene};
use crate::camera::Camera;

// ===== OPTIONS =====

/// FrameBuffer configuration
///
/// All fields have defaults; absent values fall back to the host renderer's
/// reported pixel ratio and canvas dimensions.
#[derive(Debug, Clone)]
pub struct FrameBufferOptions {
    /// Device-pixel-ratio override; `None` samples the host renderer
    pub dpr: Option<f32>,
    /// Fixed (width, height) in logical pixels; `None` tracks the host canvas
    pub size: Option<(u32, u32)>,
    /// Keep per-frame world-matrix recomputation enabled for the quad and
    /// camera. Off by default: neither moves after construction.
    pub matrix_auto_update: bool,
    /// Buffer-creation options for the internal render target
    pub target: RenderTargetOptions,
}

impl Default for FrameBufferOptions {
    fn default() -> Self {
        Self {
            dpr: None,
            size: None,
            matrix_auto_update: false,
            target: RenderTargetOptions::default(),
        }
    }
}

// ===== FRAME BUFFER =====

/// An offscreen render surface: one target, one quad, one orthographic camera
pub struct FrameBuffer {
    renderer: Arc<Mutex<dyn Renderer>>,
    scene: Scene,
    camera: Camera,
    /// `None` after dispose
    render_target: Option<Arc<dyn RenderTarget>>,
    /// The quad material's live uniforms (shared with the caller)
    uniforms: Arc<Mutex<UniformSet>>,
    options: FrameBufferOptions,
}

impl FrameBuffer {
    /// Create a frame buffer over the given renderer
    ///
    /// Builds the internal render target at the current effective size, a
    /// one-quad scene using `material`, and a default orthographic camera.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Host renderer the surface renders through
    /// * `material` - Material for the full-viewport quad; its uniform set
    ///   stays shared with the caller
    /// * `options` - Sizing and buffer options
    ///
    /// # Errors
    ///
    /// Returns an error if the effective size has a zero dimension or if
    /// target creation fails.
    pub fn new(
        renderer: Arc<Mutex<dyn Renderer>>,
        material: Material,
        options: FrameBufferOptions,
    ) -> Result<Self> {
        let (width, height) = {
            let guard = Self::lock(&renderer)?;
            Self::effective_size(&*guard, &options)?
        };

        let render_target = {
            let mut guard = Self::lock(&renderer)?;
            guard.create_render_target(RenderTargetDesc {
                width,
                height,
                options: options.target.clone(),
            })?
        };

        let uniforms = material.uniforms();

        let mut scene = Scene::new();
        let mut quad = MeshInstance::new(
            Arc::new(Geometry::plane(2.0, 2.0)),
            material,
        );
        quad.set_matrix_auto_update(options.matrix_auto_update);
        scene.add_instance(quad);

        let mut camera = Camera::orthographic();
        camera.set_matrix_auto_update(options.matrix_auto_update);

        Ok(Self {
            renderer,
            scene,
            camera,
            render_target: Some(render_target),
            uniforms,
            options,
        })
    }

    /// Lock the renderer, mapping poisoning to a backend error
    fn lock(renderer: &Arc<Mutex<dyn Renderer>>) -> Result<MutexGuard<'_, dyn Renderer + 'static>> {
        renderer.lock()
            .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))
    }

    /// Compute the effective size from configuration and host state
    ///
    /// Each dimension is `(fixed size ?? host canvas dimension) x effective
    /// pixel ratio`, where the effective pixel ratio is the configured
    /// override or the renderer's reported ratio. Pure; nothing is cached.
    fn effective_size(renderer: &dyn Renderer, options: &FrameBufferOptions) -> Result<(u32, u32)> {
        let dpr = options.dpr.unwrap_or_else(|| renderer.pixel_ratio());
        let (logical_w, logical_h) = options.size.unwrap_or_else(|| renderer.canvas_size());
        let width = (logical_w as f32 * dpr).round() as u32;
        let height = (logical_h as f32 * dpr).round() as u32;
        if width == 0 || height == 0 {
            engine_bail!("helix3d::FrameBuffer",
                "Effective size {}x{} has a zero dimension (logical {}x{}, dpr {})",
                width, height, logical_w, logical_h, dpr);
        }
        Ok((width, height))
    }

    // ===== SIZING =====

    /// Current effective size in physical pixels
    ///
    /// Recomputed from configuration and host state on every call.
    pub fn size(&self) -> Result<(u32, u32)> {
        let guard = Self::lock(&self.renderer)?;
        Self::effective_size(&*guard, &self.options)
    }

    /// Resize the internal target to the current effective size
    ///
    /// Idempotent. The surface does not watch host resize events; the caller
    /// invokes this when the host viewport changes.
    pub fn resize(&mut self) -> Result<()> {
        let (width, height) = self.size()?;
        let target = self.render_target.as_ref()
            .ok_or_else(|| engine_err!("helix3d::FrameBuffer",
                "resize() called after dispose()"))?;
        target.resize(width, height)
    }

    // ===== ACCESSORS =====

    /// The quad material's live uniform mapping
    ///
    /// Callers push new values (advance time, swap input textures) through
    /// this handle before each render.
    pub fn uniforms(&self) -> Arc<Mutex<UniformSet>> {
        self.uniforms.clone()
    }

    /// The target's color attachment as a sampleable texture
    ///
    /// Content is whatever was last drawn; valid after at least one
    /// `render()` call.
    ///
    /// # Errors
    ///
    /// Returns an error after `dispose()`.
    pub fn texture(&self) -> Result<Arc<dyn Texture>> {
        let target = self.render_target.as_ref()
            .ok_or_else(|| engine_err!("helix3d::FrameBuffer",
                "texture() called after dispose()"))?;
        Ok(target.texture())
    }

    /// The internal one-quad scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The orthographic camera framing the quad
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    // ===== RENDERING =====

    /// Render the quad scene into the internal target
    ///
    /// Saves the renderer's current render target, binds the internal one,
    /// draws, and restores the previous target before returning, on the
    /// error path too. The renderer's target slot is therefore unchanged
    /// from the caller's point of view.
    ///
    /// # Errors
    ///
    /// Returns an error after `dispose()` or if the draw fails.
    pub fn render(&mut self) -> Result<()> {
        let target = self.render_target.clone()
            .ok_or_else(|| engine_err!("helix3d::FrameBuffer",
                "render() called after dispose()"))?;

        let mut guard = Self::lock(&self.renderer)?;
        let previous = guard.current_render_target();
        guard.set_render_target(Some(target));
        let result = guard.render(&self.scene, &self.camera);
        guard.set_render_target(previous);
        result
    }

    // ===== TEARDOWN =====

    /// Release the render target and clear the quad scene
    ///
    /// Idempotent. After disposal, `render()`, `resize()`, and `texture()`
    /// return errors; `uniforms()` stays valid for any caller still holding
    /// the material.
    pub fn dispose(&mut self) {
        if self.render_target.is_none() {
            return;
        }
        self.render_target = None;
        self.scene.clear();
        engine_debug!("helix3d::FrameBuffer", "FrameBuffer disposed");
    }

    /// True once `dispose()` has run
    pub fn is_disposed(&self) -> bool {
        self.render_target.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "frame_buffer_tests.rs"]
mod tests;
