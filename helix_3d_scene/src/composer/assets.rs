/// Asset loading seam for the composer.
///
/// Model and texture decoding are external collaborators; the composer only
/// drives the load sequence. An `AssetSource` implementation fetches and
/// decodes the compressed model and the text texture from the configured
/// paths.

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{Renderer, Texture};
use crate::resource::Model;

/// Versioned, externally hosted decoder library used to decompress the model
pub const DRACO_DECODER_URL: &str =
    "https://www.gstatic.com/draco/versioned/decoders/1.5.7/";

/// Static-asset locations relative to a base URL prefix
#[derive(Debug, Clone)]
pub struct AssetPaths {
    /// Base URL prefix, usually environment-provided
    pub base_url: String,
}

impl AssetPaths {
    /// Create paths under the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// URL of the compressed 3D model
    pub fn model_url(&self) -> String {
        format!("{}model/band.drc", self.prefix())
    }

    /// URL of the text texture
    pub fn texture_url(&self) -> String {
        format!("{}texture/text.png", self.prefix())
    }

    fn prefix(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self { base_url: "/".to_string() }
    }
}

/// The loading black box the composer drives.
///
/// The composer calls these in a fixed, sequential order:
/// `load_model`, then `release_decoder`, then `load_texture`. The decoder's
/// lifetime is bounded to the model load; the texture fetch only begins
/// after the decoder is released.
pub trait AssetSource {
    /// Fetch and decode the compressed model
    fn load_model(&mut self) -> Result<Model>;

    /// Release the model decoder's resources
    ///
    /// Called once, immediately after `load_model` succeeds.
    fn release_decoder(&mut self);

    /// Fetch and decode the texture, uploading it through the renderer
    ///
    /// Implementations should request `Repeat` wrapping: the texture scrolls
    /// past the 0..1 UV range.
    fn load_texture(&mut self, renderer: &mut dyn Renderer) -> Result<Arc<dyn Texture>>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
