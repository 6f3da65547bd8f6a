/// Uniform values and the live uniform set of a material.
///
/// A UniformSet is a name -> value mapping, mutable in place. The material
/// owns it behind Arc<Mutex<..>>; callers that animate uniforms (the
/// composer's registry, a FrameBuffer caller pushing new input textures)
/// hold a reference to the same set.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::renderer::Texture;

// ===== VALUES =====

/// A typed per-draw-call constant supplied to a shader program
#[derive(Clone)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Texture(Arc<dyn Texture>),
}

impl UniformValue {
    /// Get the float value, if this is a Float
    pub fn as_float(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the texture handle, if this is a Texture
    pub fn as_texture(&self) -> Option<&Arc<dyn Texture>> {
        match self {
            UniformValue::Texture(t) => Some(t),
            _ => None,
        }
    }
}

// ===== SET =====

/// A mutable mapping from uniform name to current value
#[derive(Default)]
pub struct UniformSet {
    values: FxHashMap<String, UniformValue>,
}

impl UniformSet {
    /// Create an empty uniform set
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    /// Insert or replace a uniform value
    pub fn insert(&mut self, name: impl Into<String>, value: UniformValue) {
        self.values.insert(name.into(), value);
    }

    /// True if a uniform with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get a uniform value by name
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Get a mutable uniform value by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut UniformValue> {
        self.values.get_mut(name)
    }

    /// Get a float uniform by name
    pub fn float(&self, name: &str) -> Option<f32> {
        self.values.get(name).and_then(UniformValue::as_float)
    }

    /// Overwrite a float uniform in place.
    ///
    /// Returns false if the uniform is missing or not a Float.
    pub fn set_float(&mut self, name: &str, value: f32) -> bool {
        match self.values.get_mut(name) {
            Some(UniformValue::Float(v)) => {
                *v = value;
                true
            }
            _ => false,
        }
    }

    /// Add a delta to a float uniform in place (used for the time uniform).
    ///
    /// Returns false if the uniform is missing or not a Float.
    pub fn add_float(&mut self, name: &str, delta: f32) -> bool {
        match self.values.get_mut(name) {
            Some(UniformValue::Float(v)) => {
                *v += delta;
                true
            }
            _ => false,
        }
    }

    /// Number of uniforms in the set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the set is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All uniform names
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(|k| k.as_str()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
