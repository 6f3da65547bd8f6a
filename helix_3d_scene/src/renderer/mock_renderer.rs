/// Mock Renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing FrameBuffer, SceneComposer, and other
/// components without requiring a real GPU or graphics backend. It records
/// resource creation and every draw call so tests can assert on what a
/// backend would have been asked to do.

use std::sync::{Arc, Mutex};

use crate::renderer::{
    Renderer, Texture, RenderTarget,
    TextureDesc, TextureInfo, TextureUsage,
    RenderTargetDesc, RenderTargetOptions, TextureFormat,
};
use crate::error::Result;
use crate::engine_bail;
use crate::scene::Scene;
use crate::camera::Camera;

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
    pub name: String,
}

impl MockTexture {
    pub fn new(desc: &TextureDesc, name: String) -> Self {
        Self {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
                wrap_s: desc.wrap_s,
                wrap_t: desc.wrap_t,
            },
            name,
        }
    }
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

pub struct MockRenderTarget {
    size: Mutex<(u32, u32)>,
    options: RenderTargetOptions,
    texture: Mutex<Arc<MockTexture>>,
}

impl MockRenderTarget {
    pub fn new(width: u32, height: u32, options: RenderTargetOptions) -> Self {
        let texture = Arc::new(Self::attachment(width, height, &options));
        Self {
            size: Mutex::new((width, height)),
            options,
            texture: Mutex::new(texture),
        }
    }

    fn attachment(width: u32, height: u32, options: &RenderTargetOptions) -> MockTexture {
        MockTexture::new(
            &TextureDesc {
                width,
                height,
                format: options.format,
                usage: TextureUsage::SampledAndRenderTarget,
                filter: options.filter,
                ..TextureDesc::default()
            },
            format!("target_attachment_{}x{}", width, height),
        )
    }
}

impl RenderTarget for MockRenderTarget {
    fn width(&self) -> u32 {
        self.size.lock().unwrap().0
    }

    fn height(&self) -> u32 {
        self.size.lock().unwrap().1
    }

    fn format(&self) -> TextureFormat {
        self.options.format
    }

    fn resize(&self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            engine_bail!("helix3d::mock",
                "resize: zero dimension {}x{}", width, height);
        }
        *self.size.lock().unwrap() = (width, height);
        *self.texture.lock().unwrap() = Arc::new(Self::attachment(width, height, &self.options));
        Ok(())
    }

    fn texture(&self) -> Arc<dyn Texture> {
        self.texture.lock().unwrap().clone()
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// One recorded draw call
#[derive(Debug, Clone)]
pub struct RenderCall {
    /// Size of the bound target at draw time; `None` = visible canvas
    pub target_size: Option<(u32, u32)>,
    /// Number of mesh instances in the drawn scene
    pub instance_count: usize,
}

/// Mock Renderer that tracks created resources and draw calls without GPU
pub struct MockRenderer {
    pixel_ratio: f32,
    canvas_size: (u32, u32),
    current_target: Option<Arc<dyn RenderTarget>>,
    /// When true, every `render()` call fails with a backend error
    pub fail_renders: bool,
    /// Recorded draw calls
    pub render_calls: Arc<Mutex<Vec<RenderCall>>>,
    /// Track created textures
    pub created_textures: Arc<Mutex<Vec<String>>>,
    /// Track created render targets
    pub created_targets: Arc<Mutex<Vec<String>>>,
}

impl MockRenderer {
    /// Create a new mock renderer with an 800x600 canvas and a ratio of 1
    pub fn new() -> Self {
        Self {
            pixel_ratio: 1.0,
            canvas_size: (800, 600),
            current_target: None,
            fail_renders: false,
            render_calls: Arc::new(Mutex::new(Vec::new())),
            created_textures: Arc::new(Mutex::new(Vec::new())),
            created_targets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the reported device pixel ratio
    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
    }

    /// Override the reported canvas size (logical pixels)
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.canvas_size = (width, height);
    }

    /// Get recorded draw calls
    pub fn get_render_calls(&self) -> Vec<RenderCall> {
        self.render_calls.lock().unwrap().clone()
    }

    /// Get names of created textures
    pub fn get_created_textures(&self) -> Vec<String> {
        self.created_textures.lock().unwrap().clone()
    }

    /// Get names of created render targets
    pub fn get_created_targets(&self) -> Vec<String> {
        self.created_targets.lock().unwrap().clone()
    }
}

impl Renderer for MockRenderer {
    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let name = format!("texture_{}x{}", desc.width, desc.height);
        self.created_textures.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockTexture::new(&desc, name)))
    }

    fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        if desc.width == 0 || desc.height == 0 {
            engine_bail!("helix3d::mock",
                "create_render_target: zero dimension {}x{}", desc.width, desc.height);
        }
        let name = format!("target_{}x{}", desc.width, desc.height);
        self.created_targets.lock().unwrap().push(name);
        Ok(Arc::new(MockRenderTarget::new(desc.width, desc.height, desc.options)))
    }

    fn set_render_target(&mut self, target: Option<Arc<dyn RenderTarget>>) {
        self.current_target = target;
    }

    fn current_render_target(&self) -> Option<Arc<dyn RenderTarget>> {
        self.current_target.clone()
    }

    fn render(&mut self, scene: &Scene, _camera: &Camera) -> Result<()> {
        if self.fail_renders {
            engine_bail!("helix3d::mock", "render: simulated backend failure");
        }
        let target_size = self.current_target.as_ref()
            .map(|t| (t.width(), t.height()));
        self.render_calls.lock().unwrap().push(RenderCall {
            target_size,
            instance_count: scene.instance_count(),
        });
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas_size = (width, height);
    }

    fn stats(&self) -> crate::renderer::RendererStats {
        crate::renderer::RendererStats::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
