//! Unit tests for frame_buffer.rs
//!
//! Runs against the mock renderer: sizing against canvas and pixel-ratio
//! state, target save/restore around renders, and teardown behavior.

use std::sync::{Arc, Mutex};
use crate::renderer::mock_renderer::MockRenderer;
use crate::renderer::{Renderer, RenderTargetDesc, RenderTargetOptions, Texture};
use crate::resource::{Material, MaterialDesc, ShaderSource, UniformValue};
use crate::scene::RenderFlags;
use crate::target::{FrameBuffer, FrameBufferOptions};

// ============================================================================
// TEST HELPERS
// ============================================================================

fn mock_pair() -> (Arc<Mutex<MockRenderer>>, Arc<Mutex<dyn Renderer>>) {
    let mock = Arc::new(Mutex::new(MockRenderer::new()));
    let shared: Arc<Mutex<dyn Renderer>> = mock.clone();
    (mock, shared)
}

fn quad_material() -> Material {
    Material::from_desc(MaterialDesc {
        shader: ShaderSource {
            vertex: "void main() {}",
            fragment: "void main() {}",
        },
        uniforms: vec![
            ("uTime".to_string(), UniformValue::Float(0.0)),
        ],
        base_color: [0.0, 0.0, 0.0],
        double_sided: false,
    }).unwrap()
}

// ============================================================================
// CONSTRUCTION AND SIZING TESTS
// ============================================================================

#[test]
fn test_new_creates_target_at_canvas_size() {
    let (mock, shared) = mock_pair();
    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    assert_eq!(fb.size().unwrap(), (800, 600));
    assert_eq!(
        mock.lock().unwrap().get_created_targets(),
        vec!["target_800x600".to_string()]
    );
}

#[test]
fn test_new_builds_one_quad_scene() {
    let (_mock, shared) = mock_pair();
    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    assert_eq!(fb.scene().instance_count(), 1);

    // The quad is static by default
    let (_, quad) = fb.scene().instances().next().unwrap();
    assert!(!quad.flags().contains(RenderFlags::MATRIX_AUTO_UPDATE));
    assert!(!fb.camera().matrix_auto_update());
}

#[test]
fn test_matrix_auto_update_option() {
    let (_mock, shared) = mock_pair();
    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions {
        matrix_auto_update: true,
        ..FrameBufferOptions::default()
    }).unwrap();

    let (_, quad) = fb.scene().instances().next().unwrap();
    assert!(quad.flags().contains(RenderFlags::MATRIX_AUTO_UPDATE));
    assert!(fb.camera().matrix_auto_update());
}

#[test]
fn test_dpr_override_scales_canvas_size() {
    let (_mock, shared) = mock_pair();
    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions {
        dpr: Some(2.0),
        ..FrameBufferOptions::default()
    }).unwrap();

    // 800x600 canvas at an overridden ratio of 2
    assert_eq!(fb.size().unwrap(), (1600, 1200));
}

#[test]
fn test_fixed_size_uses_renderer_ratio() {
    let (mock, shared) = mock_pair();
    mock.lock().unwrap().set_pixel_ratio(2.0);

    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions {
        size: Some((300, 200)),
        ..FrameBufferOptions::default()
    }).unwrap();

    assert_eq!(fb.size().unwrap(), (600, 400));
}

#[test]
fn test_fixed_size_ignores_canvas_changes() {
    let (mock, shared) = mock_pair();
    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions {
        size: Some((300, 200)),
        ..FrameBufferOptions::default()
    }).unwrap();

    mock.lock().unwrap().set_canvas_size(10, 10);

    // Still size x dpr, independent of the canvas
    assert_eq!(fb.size().unwrap(), (300, 200));
}

#[test]
fn test_size_tracks_canvas() {
    let (mock, shared) = mock_pair();
    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    assert_eq!(fb.size().unwrap(), (800, 600));

    mock.lock().unwrap().set_canvas_size(1024, 768);
    assert_eq!(fb.size().unwrap(), (1024, 768));
}

#[test]
fn test_fractional_ratio_rounds() {
    let (mock, shared) = mock_pair();
    mock.lock().unwrap().set_canvas_size(333, 100);
    mock.lock().unwrap().set_pixel_ratio(1.5);

    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    // 333 * 1.5 = 499.5, rounded to 500
    assert_eq!(fb.size().unwrap(), (500, 150));
}

#[test]
fn test_zero_effective_size_fails() {
    let (mock, shared) = mock_pair();
    mock.lock().unwrap().set_canvas_size(0, 600);

    let result = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default());
    assert!(result.is_err());
}

// ============================================================================
// RESIZE TESTS
// ============================================================================

#[test]
fn test_resize_follows_canvas() {
    let (mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    mock.lock().unwrap().set_canvas_size(400, 300);
    fb.resize().unwrap();

    let texture = fb.texture().unwrap();
    assert_eq!(texture.info().width, 400);
    assert_eq!(texture.info().height, 300);
}

#[test]
fn test_resize_idempotent() {
    let (mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    mock.lock().unwrap().set_canvas_size(400, 300);
    fb.resize().unwrap();
    fb.resize().unwrap();

    let texture = fb.texture().unwrap();
    assert_eq!((texture.info().width, texture.info().height), (400, 300));
}

// ============================================================================
// RENDER TESTS
// ============================================================================

#[test]
fn test_render_draws_into_own_target() {
    let (mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    fb.render().unwrap();

    let calls = mock.lock().unwrap().get_render_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].target_size, Some((800, 600)));
    assert_eq!(calls[0].instance_count, 1);
}

#[test]
fn test_render_restores_canvas_binding() {
    let (mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    // Nothing bound before, nothing bound after
    fb.render().unwrap();
    assert!(mock.lock().unwrap().current_render_target().is_none());
}

#[test]
fn test_render_restores_previous_target() {
    let (mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    // Bind some other target first
    let other = mock.lock().unwrap().create_render_target(RenderTargetDesc {
        width: 64,
        height: 64,
        options: RenderTargetOptions::default(),
    }).unwrap();
    mock.lock().unwrap().set_render_target(Some(other.clone()));

    fb.render().unwrap();

    let current = mock.lock().unwrap().current_render_target().unwrap();
    assert!(Arc::ptr_eq(&current, &other));
}

#[test]
fn test_render_restores_target_on_failure() {
    let (mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    mock.lock().unwrap().fail_renders = true;

    assert!(fb.render().is_err());
    // The slot is restored on the error path too
    assert!(mock.lock().unwrap().current_render_target().is_none());
}

// ============================================================================
// UNIFORM AND TEXTURE TESTS
// ============================================================================

#[test]
fn test_uniforms_shared_with_material() {
    let (_mock, shared) = mock_pair();
    let material = quad_material();
    let material_uniforms = material.uniforms();

    let fb = FrameBuffer::new(shared, material, FrameBufferOptions::default()).unwrap();

    assert!(Arc::ptr_eq(&fb.uniforms(), &material_uniforms));

    fb.uniforms().lock().unwrap().set_float("uTime", 2.0);
    assert_eq!(material_uniforms.lock().unwrap().float("uTime"), Some(2.0));
}

#[test]
fn test_texture_exposes_color_attachment() {
    let (_mock, shared) = mock_pair();
    let fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    let texture = fb.texture().unwrap();
    assert_eq!(texture.info().width, 800);
    assert_eq!(texture.info().height, 600);
}

// ============================================================================
// TEARDOWN TESTS
// ============================================================================

#[test]
fn test_dispose_releases_target_and_scene() {
    let (_mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    fb.dispose();

    assert!(fb.is_disposed());
    assert_eq!(fb.scene().instance_count(), 0);
    assert!(fb.texture().is_err());
    assert!(fb.render().is_err());
    assert!(fb.resize().is_err());
}

#[test]
fn test_dispose_idempotent() {
    let (_mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();

    fb.dispose();
    fb.dispose();

    assert!(fb.is_disposed());
}

#[test]
fn test_uniforms_survive_dispose() {
    let (_mock, shared) = mock_pair();
    let mut fb = FrameBuffer::new(shared, quad_material(), FrameBufferOptions::default()).unwrap();
    let uniforms = fb.uniforms();

    fb.dispose();

    // Callers holding the handle can still read values
    assert_eq!(uniforms.lock().unwrap().float("uTime"), Some(0.0));
}
