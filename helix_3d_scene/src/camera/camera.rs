/// Camera: view and projection state for a render pass.
///
/// The camera stores matrices; it does not walk any scene graph. View
/// recomputation happens only through `set_position`/`look_at`, so a camera
/// with `matrix_auto_update` disabled costs nothing per frame once posed.

use glam::{Mat4, Vec3};

/// Default orthographic framing: the -1..1 normalized view volume.
/// Matches what a full-viewport quad pass expects with no explicit frustum.
const ORTHO_EXTENT: f32 = 1.0;
const ORTHO_NEAR: f32 = 0.1;
const ORTHO_FAR: f32 = 2000.0;

/// A camera holding view and projection matrices
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    matrix_auto_update: bool,
}

impl Camera {
    /// Create a perspective camera at the origin looking down -Z
    ///
    /// # Arguments
    ///
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect` - Viewport width over height
    /// * `near` - Near clip distance
    /// * `far` - Far clip distance
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::perspective_rh(fov_y, aspect, near, far),
            matrix_auto_update: true,
        }
    }

    /// Create an orthographic camera with default framing
    ///
    /// No explicit frustum arguments: the projection frames the -1..1
    /// normalized view volume, which exactly contains a 2x2 quad at the
    /// origin. Callers needing different framing call `set_projection`.
    pub fn orthographic() -> Self {
        Self {
            position: Vec3::ZERO,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::orthographic_rh(
                -ORTHO_EXTENT, ORTHO_EXTENT,
                -ORTHO_EXTENT, ORTHO_EXTENT,
                ORTHO_NEAR, ORTHO_FAR,
            ),
            matrix_auto_update: true,
        }
    }

    // ===== POSE =====

    /// Set the camera position (does not recompute the view matrix by itself)
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Recompute the view matrix to look from the current position at `target`
    pub fn look_at(&mut self, target: Vec3) {
        self.view_matrix = Mat4::look_at_rh(self.position, target, Vec3::Y);
    }

    /// Replace the projection matrix
    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection_matrix = projection;
    }

    // ===== GETTERS =====

    /// Camera position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View matrix (inverse of the camera's world transform)
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic)
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== MATRIX AUTO-UPDATE =====

    /// True if the backend may recompute the camera's world matrix each frame
    pub fn matrix_auto_update(&self) -> bool {
        self.matrix_auto_update
    }

    /// Enable or disable per-frame world-matrix recomputation.
    ///
    /// Static cameras (a frame buffer's quad camera) disable this.
    pub fn set_matrix_auto_update(&mut self, auto_update: bool) {
        self.matrix_auto_update = auto_update;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
