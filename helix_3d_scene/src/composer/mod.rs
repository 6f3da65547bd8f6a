/// Composer module - visible-scene assembly and the per-frame driver

pub mod clock;
pub mod assets;
pub mod scene_composer;

pub use clock::*;
pub use assets::*;
pub use scene_composer::*;
