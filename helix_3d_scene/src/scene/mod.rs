/// Scene module - the renderable scene and its contents

pub mod scene;
pub mod light;

pub use scene::*;
pub use light::*;
