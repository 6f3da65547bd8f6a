/// Renderer module - all backend-facing types and traits

// Module declarations
pub mod renderer;
pub mod texture;
pub mod render_target;

#[cfg(test)]
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use texture::*;
pub use render_target::*;
