/// RenderTarget trait and descriptors - an offscreen rendering destination
///
/// A render target is a pixel-addressable destination that is not presented
/// directly to the display. Its color attachment can be sampled as a texture
/// in a later pass.

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{Texture, TextureFormat, TextureFilter};

// ===== OPTIONS =====

/// Buffer-creation options for a render target
///
/// Size is not part of the options: it is supplied separately so the same
/// options can be reused across resizes.
#[derive(Debug, Clone)]
pub struct RenderTargetOptions {
    /// Color attachment format
    pub format: TextureFormat,
    /// Sampling filter for the color attachment
    pub filter: TextureFilter,
    /// Attach a depth buffer
    pub depth_buffer: bool,
    /// Attach a stencil buffer
    pub stencil_buffer: bool,
}

impl Default for RenderTargetOptions {
    fn default() -> Self {
        Self {
            format: TextureFormat::R8G8B8A8_UNORM,
            filter: TextureFilter::Linear,
            depth_buffer: true,
            stencil_buffer: false,
        }
    }
}

/// Descriptor for creating a render target
#[derive(Debug, Clone)]
pub struct RenderTargetDesc {
    /// Width in physical pixels
    pub width: u32,
    /// Height in physical pixels
    pub height: u32,
    /// Buffer-creation options
    pub options: RenderTargetOptions,
}

// ===== RENDER TARGET TRAIT =====

/// Render target trait
///
/// Represents a surface that can be rendered to and later sampled.
/// Implemented by backend-specific types.
pub trait RenderTarget: Send + Sync {
    /// Get the width of the render target in physical pixels
    fn width(&self) -> u32;

    /// Get the height of the render target in physical pixels
    fn height(&self) -> u32;

    /// Get the pixel format of the color attachment
    fn format(&self) -> TextureFormat;

    /// Resize the target's attachments in place
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions or on backend allocation failure.
    fn resize(&self, width: u32, height: u32) -> Result<()>;

    /// Get the color attachment as a sampleable texture
    ///
    /// Content is whatever was last drawn into the target.
    fn texture(&self) -> Arc<dyn Texture>;
}
