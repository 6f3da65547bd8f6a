/// SceneComposer: assembles the visible banded-knot scene and drives its
/// animation.
///
/// Construction sets up the camera, background, and lighting and returns
/// immediately; the scene stays empty until `load_assets` resolves. Loading
/// is sequential: model, decoder release, texture. After assembly the host
/// calls `frame()` on every display refresh; each frame advances the shared
/// time uniform of every animated material and issues one render.

use std::sync::{Arc, Mutex, MutexGuard};
use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::{engine_bail, engine_debug, engine_info};
use crate::renderer::{Renderer, Texture};
use crate::resource::{Material, MaterialDesc, Model, ShaderSource, UniformSet, UniformValue};
use crate::scene::{DirectionalLight, RenderFlags, Scene, ShadowConfig};
use crate::camera::Camera;
use crate::composer::{AssetSource, Clock};

// ===== DISPLAY CONSTANTS =====

/// Background clear color (#f0f0f0)
const BACKGROUND_COLOR: [f32; 3] = [0.941, 0.941, 0.941];

/// Fixed camera pose, looking at the origin
const CAMERA_POSITION: Vec3 = Vec3::new(-3.16, 1.13, 10.39);
const CAMERA_FOV_Y: f32 = 50.0 * std::f32::consts::PI / 180.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 100.0;

/// Final display pose of the loaded model
const MODEL_OFFSET_Y: f32 = -0.8;
const MODEL_ROTATION_Y: f32 = std::f32::consts::PI / 5.5;

/// Shadow-casting key light
const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const LIGHT_INTENSITY: f32 = 3.0;

// ===== SHADERS =====

/// Scrolling-text band shaders, inlined at compile time
const BAND_VERTEX_SHADER: &str = include_str!("../../shaders/band_scroll.vert");
const BAND_FRAGMENT_SHADER: &str = include_str!("../../shaders/band_scroll.frag");

// ===== STATE =====

/// Composer lifecycle state
///
/// There is no transition out of a failed `Loading`; the host recreates
/// the composer instead of retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    /// Scene/camera/lights initialized, no assets requested yet
    Constructed,
    /// Asset load in progress (or failed; no retry path exists)
    Loading,
    /// Assets assembled, animating on every `frame()`
    Ready,
    /// Torn down; all further calls are no-ops or errors
    Disposed,
}

// ===== COMPOSER =====

/// Assembles the visible scene and drives the per-frame update
pub struct SceneComposer {
    renderer: Arc<Mutex<dyn Renderer>>,
    scene: Scene,
    camera: Camera,
    clock: Clock,
    /// One live uniform set per animated submesh material, in submesh order.
    /// Populated during assembly, iterated every frame to advance `uTime`.
    animated_uniforms: Vec<Arc<Mutex<UniformSet>>>,
    state: ComposerState,
}

impl SceneComposer {
    /// Create the composer: background, camera pose, and lighting
    ///
    /// Returns immediately; the animated mesh appears only after
    /// `load_assets` resolves.
    pub fn new(renderer: Arc<Mutex<dyn Renderer>>) -> Result<Self> {
        let aspect = {
            let guard = Self::lock(&renderer)?;
            let (w, h) = guard.canvas_size();
            if h == 0 { 1.0 } else { w as f32 / h as f32 }
        };

        let mut scene = Scene::new();
        scene.set_background(BACKGROUND_COLOR);

        let mut camera = Camera::perspective(CAMERA_FOV_Y, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.set_position(CAMERA_POSITION);
        camera.look_at(Vec3::ZERO);

        let mut light = DirectionalLight::new(LIGHT_COLOR, LIGHT_INTENSITY);
        light.position = LIGHT_POSITION;
        light.shadow = Some(ShadowConfig::default());
        scene.add_light(light);

        Ok(Self {
            renderer,
            scene,
            camera,
            clock: Clock::new(),
            animated_uniforms: Vec::new(),
            state: ComposerState::Constructed,
        })
    }

    /// Lock the renderer, mapping poisoning to a backend error
    fn lock(renderer: &Arc<Mutex<dyn Renderer>>) -> Result<MutexGuard<'_, dyn Renderer + 'static>> {
        renderer.lock()
            .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))
    }

    // ===== ASSET LOADING =====

    /// Drive the asset source and assemble the scene
    ///
    /// Strictly sequential: the model load completes, the decoder is
    /// released, then the texture load begins. On success the composer
    /// enters `Ready` and `frame()` starts rendering. On failure the
    /// composer stays in `Loading` with an incomplete scene; there is no
    /// retry.
    ///
    /// # Errors
    ///
    /// Propagates asset-source failures, and errors if called in any state
    /// other than `Constructed`.
    pub fn load_assets(&mut self, source: &mut dyn AssetSource) -> Result<()> {
        if self.state != ComposerState::Constructed {
            engine_bail!("helix3d::SceneComposer",
                "load_assets() called in state {:?}", self.state);
        }
        self.state = ComposerState::Loading;

        let model = source.load_model()?;
        source.release_decoder();

        let texture = {
            let mut guard = Self::lock(&self.renderer)?;
            source.load_texture(&mut *guard)?
        };
        // Derived metadata for the scroll shader
        let aspect = texture.info().aspect();

        self.assemble(model, &texture, aspect)?;
        self.state = ComposerState::Ready;
        engine_info!("helix3d::SceneComposer",
            "Assets loaded, {} animated submeshes", self.animated_uniforms.len());
        Ok(())
    }

    /// Build the animated material for one submesh
    ///
    /// Registers the material's live uniform set so `update()` can advance
    /// its time uniform.
    fn create_material(
        &mut self,
        texture: &Arc<dyn Texture>,
        aspect: f32,
        direction: f32,
        speed: f32,
    ) -> Result<Material> {
        let material = Material::from_desc(MaterialDesc {
            shader: ShaderSource {
                vertex: BAND_VERTEX_SHADER,
                fragment: BAND_FRAGMENT_SHADER,
            },
            uniforms: vec![
                ("uText".to_string(), UniformValue::Texture(texture.clone())),
                ("uTextAspect".to_string(), UniformValue::Float(aspect)),
                ("uTime".to_string(), UniformValue::Float(0.0)),
                ("uDirection".to_string(), UniformValue::Float(direction)),
                ("uSpeed".to_string(), UniformValue::Float(speed)),
            ],
            base_color: [0.0, 0.0, 0.0],
            double_sided: true,
        })?;

        self.animated_uniforms.push(material.uniforms());
        Ok(material)
    }

    /// Attach materials to the loaded model and pose it in the scene
    ///
    /// Every submesh casts and receives shadows. Scroll direction alternates
    /// by submesh index parity; speed scales linearly from 1.0 toward 2.0
    /// across the index range.
    fn assemble(&mut self, model: Model, texture: &Arc<dyn Texture>, aspect: f32) -> Result<()> {
        let pose = Mat4::from_translation(Vec3::new(0.0, MODEL_OFFSET_Y, 0.0))
            * Mat4::from_rotation_y(MODEL_ROTATION_Y);

        let count = model.submesh_count();
        for (i, submesh) in model.submeshes().iter().enumerate() {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            let speed = 1.0 + i as f32 / count as f32;

            let material = self.create_material(texture, aspect, direction, speed)?;
            let mut instance = crate::scene::MeshInstance::new(submesh.geometry().clone(), material);
            instance.insert_flags(RenderFlags::CAST_SHADOW | RenderFlags::RECEIVE_SHADOW);
            instance.set_local_transform(pose);
            self.scene.add_instance(instance);
        }
        Ok(())
    }

    // ===== PER-FRAME =====

    /// Host display callback: advance the clock and render once
    ///
    /// No-op until assets are loaded; afterwards runs on every call.
    pub fn frame(&mut self) -> Result<()> {
        if self.state != ComposerState::Ready {
            return Ok(());
        }
        let dt = self.clock.delta();
        self.update(dt)
    }

    /// Advance every registered time uniform by `dt` and render the scene
    ///
    /// Each registered set is advanced independently; all share a common
    /// clock today but could diverge if a set were later animated elsewhere.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        if self.state != ComposerState::Ready {
            return Ok(());
        }

        for set in &self.animated_uniforms {
            let mut uniforms = set.lock()
                .map_err(|_| Error::BackendError("Uniform set lock poisoned".to_string()))?;
            uniforms.add_float("uTime", dt);
        }

        let mut guard = Self::lock(&self.renderer)?;
        guard.render(&self.scene, &self.camera)
    }

    /// Forward a host viewport change to the renderer
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let mut guard = Self::lock(&self.renderer)?;
        guard.resize(width, height);
        Ok(())
    }

    // ===== ACCESSORS =====

    /// The visible scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The main camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current lifecycle state
    pub fn state(&self) -> ComposerState {
        self.state
    }

    /// Live uniform sets of the animated materials, in submesh order
    pub fn animated_uniforms(&self) -> &[Arc<Mutex<UniformSet>>] {
        &self.animated_uniforms
    }

    // ===== TEARDOWN =====

    /// Stop animating and release the scene
    ///
    /// Clears the animated-uniform registry and the scene, and enters
    /// `Disposed`: all subsequent `frame()`/`update()` calls are no-ops.
    /// Idempotent.
    pub fn dispose(&mut self) {
        if self.state == ComposerState::Disposed {
            return;
        }
        self.animated_uniforms.clear();
        self.scene.clear();
        self.state = ComposerState::Disposed;
        engine_debug!("helix3d::SceneComposer", "SceneComposer disposed");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "scene_composer_tests.rs"]
mod tests;
