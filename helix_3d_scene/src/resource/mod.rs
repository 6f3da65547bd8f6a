/// Resource module - CPU-side resource types (geometry, models, materials)

pub mod geometry;
pub mod mesh;
pub mod uniforms;
pub mod material;

pub use geometry::*;
pub use mesh::*;
pub use uniforms::*;
pub use material::*;
