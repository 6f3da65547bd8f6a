/// Target module - offscreen render surfaces

pub mod frame_buffer;

pub use frame_buffer::*;
