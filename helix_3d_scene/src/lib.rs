/*!
# Helix 3D Scene

Core types for the Helix3D scene kit: an offscreen frame-buffer abstraction
and a scene composer for the animated banded-knot display.

The underlying GPU backend is out of scope and reached through trait-based
dynamic polymorphism. Backend implementations (Vulkan, WebGPU, etc.) are
loaded at runtime via the plugin system.

## Architecture

- **Renderer**: factory and draw interface for a GPU backend
- **Texture / RenderTarget**: GPU resource traits
- **FrameBuffer**: offscreen full-viewport-quad render surface (the reusable core)
- **SceneComposer**: one-shot assembly of the visible scene plus the per-frame driver

Backend implementations provide concrete types that implement the renderer
traits; tests run against a mock backend.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod renderer;
pub mod resource;
pub mod camera;
pub mod scene;
pub mod target;
pub mod composer;

// Main helix3d namespace module
pub mod helix3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Renderer factory trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Render sub-module with all backend-facing types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Offscreen target sub-module
    pub mod target {
        pub use crate::target::*;
    }

    // Composer sub-module
    pub mod composer {
        pub use crate::composer::*;
    }
}

// Re-export math library at crate root
pub use glam;
