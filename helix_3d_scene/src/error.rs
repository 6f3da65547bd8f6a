//! Error types for the Helix3D scene kit
//!
//! This module defines the error types used throughout the crate,
//! including rendering, initialization, and resource management.

use std::fmt;

/// Result type for Helix3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Helix3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan, WebGPU, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, render target, material, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, renderer, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an `Error::InvalidResource`, logging it through the engine logger
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("helix3d::Material", "Duplicate uniform '{}'", name);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::engine_error!($source, $($arg)*);
        $crate::helix3d::Error::InvalidResource(format!($($arg)*))
    }};
}

/// Return early with an `Error::InvalidResource`, logging it first
///
/// # Example
///
/// ```ignore
/// engine_bail!("helix3d::FrameBuffer", "zero-sized target {}x{}", w, h);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
