//! Unit tests for camera.rs
//!
//! Tests perspective/orthographic construction, pose updates, and the
//! matrix auto-update flag.

use crate::camera::Camera;
use glam::{Mat4, Vec3, Vec4};

// ============================================================================
// CONSTRUCTION TESTS
// ============================================================================

#[test]
fn test_perspective_starts_at_origin() {
    let camera = Camera::perspective(50f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(*camera.view_matrix(), Mat4::IDENTITY);
    assert!(camera.matrix_auto_update());
}

#[test]
fn test_perspective_projection_matches_glam() {
    let camera = Camera::perspective(50f32.to_radians(), 1.5, 0.1, 100.0);
    let expected = Mat4::perspective_rh(50f32.to_radians(), 1.5, 0.1, 100.0);
    assert_eq!(*camera.projection_matrix(), expected);
}

#[test]
fn test_orthographic_frames_unit_volume() {
    let camera = Camera::orthographic();
    let projection = camera.projection_matrix();

    // A point at the edge of the -1..1 volume stays inside clip space
    let projected = *projection * Vec4::new(1.0, 1.0, -0.5, 1.0);
    assert!((projected.x - 1.0).abs() < 1e-6);
    assert!((projected.y - 1.0).abs() < 1e-6);
}

// ============================================================================
// POSE TESTS
// ============================================================================

#[test]
fn test_set_position_alone_keeps_view() {
    let mut camera = Camera::perspective(1.0, 1.0, 0.1, 100.0);
    camera.set_position(Vec3::new(5.0, 0.0, 0.0));

    assert_eq!(camera.position(), Vec3::new(5.0, 0.0, 0.0));
    // View only changes through look_at
    assert_eq!(*camera.view_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_look_at_recomputes_view() {
    let mut camera = Camera::perspective(1.0, 1.0, 0.1, 100.0);
    camera.set_position(Vec3::new(0.0, 0.0, 10.0));
    camera.look_at(Vec3::ZERO);

    let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
    assert_eq!(*camera.view_matrix(), expected);

    // The camera position maps to the view-space origin
    let origin = *camera.view_matrix() * Vec4::new(0.0, 0.0, 10.0, 1.0);
    assert!(origin.truncate().length() < 1e-5);
}

#[test]
fn test_view_projection_is_projection_times_view() {
    let mut camera = Camera::perspective(1.0, 1.0, 0.1, 100.0);
    camera.set_position(Vec3::new(-3.16, 1.13, 10.39));
    camera.look_at(Vec3::ZERO);

    let expected = *camera.projection_matrix() * *camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(), expected);
}

#[test]
fn test_set_projection_replaces_matrix() {
    let mut camera = Camera::orthographic();
    let custom = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.01, 20.0);
    camera.set_projection(custom);
    assert_eq!(*camera.projection_matrix(), custom);
}

// ============================================================================
// MATRIX AUTO-UPDATE TESTS
// ============================================================================

#[test]
fn test_matrix_auto_update_toggle() {
    let mut camera = Camera::orthographic();
    assert!(camera.matrix_auto_update());

    camera.set_matrix_auto_update(false);
    assert!(!camera.matrix_auto_update());

    camera.set_matrix_auto_update(true);
    assert!(camera.matrix_auto_update());
}
