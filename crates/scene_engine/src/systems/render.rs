//! Render driver
//!
//! Queries the scene every frame and feeds a [`DrawBackend`] — the "bind and
//! draw" contract behind which the actual graphics API lives. The driver
//! never changes entity or component existence; it only stages per-frame
//! uniform state into shader components.
//!
//! Which phases run is decided by the explicit [`RenderPass`] argument, not
//! by ambient state: depth-only passes draw models and nothing else.

use crate::assets::{CubeMapHandle, FontHandle, MeshHandle, ShaderHandle, TextureHandle};
use crate::ecs::components::{
    CameraComponent, DirectionalLight, LitShader, MaterialComponent, ModelComponent,
    OverlayTextComponent, ParticleEmitterComponent, PointLight, ShaderKind, SkyBoxComponent,
    UnlitShader,
};
use crate::ecs::Scene;
use crate::settings::Settings;

/// Which render pass is being executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// Full forward pass: models, sky box, particles, GUI
    Normal,
    /// Depth-only pass from the directional light
    DirectionalDepth,
    /// Depth-only cube-map pass from a point light
    OmnidirectionalDepth,
}

/// The "bind and draw" contract the graphics collaborator implements
pub trait DrawBackend {
    /// Called once at the start of every pass
    fn begin_pass(&mut self, pass: RenderPass);

    /// Make the given program current
    fn bind_shader(&mut self, program: ShaderHandle);

    /// Draw every sub-mesh of a model with the currently bound program
    fn draw_model(&mut self, mesh: MeshHandle, animated: bool);

    /// Draw the sky box
    fn draw_sky_box(&mut self, cube_map: CubeMapHandle);

    /// Draw a particle batch
    fn draw_particles(&mut self, texture: TextureHandle, count: u32);

    /// Draw a text overlay
    fn draw_overlay(&mut self, font: FontHandle, text: &str);
}

/// Render driver
#[derive(Debug, Default)]
pub struct RenderSystem {
    initialized: bool,
}

impl RenderSystem {
    /// Create an uninitialized driver
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time pass against a freshly loaded scene
    ///
    /// Binds each entity's material into its lit shader and stages the
    /// initial light set, mirroring what the per-frame path will refresh.
    pub fn initialize(&mut self, scene: &mut Scene, settings: &Settings) {
        let (directional, points) = collect_lights(scene, settings);

        for entity in scene.entity_snapshot() {
            let material = scene
                .get_component::<MaterialComponent>(entity.id)
                .cloned();
            if let Some(shader) = scene.get_component_mut::<LitShader>(entity.id) {
                if let Some(material) = material {
                    shader.set_material(material);
                }
                shader.stage_lights(directional.clone(), points.clone());
            }
        }

        self.initialized = true;
        log::debug!(
            "render driver initialized: {} lit shaders, {} unlit shaders",
            scene.component_count::<LitShader>(),
            scene.component_count::<UnlitShader>()
        );
    }

    /// Execute one render pass
    ///
    /// Skips the frame (with a diagnostic) when no active camera exists.
    pub fn render(
        &mut self,
        scene: &mut Scene,
        settings: &Settings,
        pass: RenderPass,
        backend: &mut dyn DrawBackend,
    ) {
        let Some(camera) = scene
            .first_active_component_of_type::<CameraComponent>()
            .cloned()
        else {
            log::debug!("no active camera; skipping render pass {:?}", pass);
            return;
        };

        backend.begin_pass(pass);
        self.stage_uniforms(scene, settings, &camera);
        render_models(scene, backend);

        if pass == RenderPass::Normal {
            render_sky_box(scene, backend);
            render_particles(scene, backend);
            render_overlays(scene, backend);
        }
    }

    /// Refresh camera and light uniforms in every shader component
    fn stage_uniforms(&self, scene: &mut Scene, settings: &Settings, camera: &CameraComponent) {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix();
        let position = camera.position;
        let (directional, points) = collect_lights(scene, settings);

        scene.for_each_of_type_mut(|shader: &mut LitShader| {
            shader.uniforms.view = view;
            shader.uniforms.projection = projection;
            shader.uniforms.view_position = position;
            shader.stage_lights(directional.clone(), points.clone());
            false
        });
        scene.for_each_of_type_mut(|shader: &mut UnlitShader| {
            shader.uniforms.view = view;
            shader.uniforms.projection = projection;
            shader.uniforms.view_position = position;
            false
        });
    }
}

/// Active lights in scene storage order, point lights capped by settings
fn collect_lights(
    scene: &Scene,
    settings: &Settings,
) -> (Option<DirectionalLight>, Vec<PointLight>) {
    let directional = scene
        .first_active_component_of_type::<DirectionalLight>()
        .filter(|light| light.active)
        .cloned();
    let points = scene
        .all_components_of_type::<PointLight>()
        .into_iter()
        .filter(|light| light.active)
        .take(settings.lights_per_entity)
        .cloned()
        .collect();
    (directional, points)
}

/// Draw every active entity that pairs a model with a shader
///
/// The composition filter runs at the call site: one pass over all entities
/// with two component lookups each, favoring zero bookkeeping over indexed
/// lookup for scene-sized entity counts.
fn render_models(scene: &Scene, backend: &mut dyn DrawBackend) {
    scene.for_each_entity(|entity| {
        if !entity.is_active {
            return false;
        }
        let Some(model) = scene.get_component::<ModelComponent>(entity.id) else {
            return false;
        };

        if let Some(shader) = scene.get_component::<LitShader>(entity.id) {
            backend.bind_shader(shader.program);
            backend.draw_model(model.mesh, model.is_animated());
        } else if let Some(shader) = scene.get_component::<UnlitShader>(entity.id) {
            if shader.kind == ShaderKind::Default {
                backend.bind_shader(shader.program);
                backend.draw_model(model.mesh, model.is_animated());
            }
        }
        false
    });
}

fn render_sky_box(scene: &Scene, backend: &mut dyn DrawBackend) {
    scene.for_each_entity(|entity| {
        let Some(sky_box) = scene.get_component::<SkyBoxComponent>(entity.id) else {
            return false;
        };
        let Some(shader) = scene.get_component::<UnlitShader>(entity.id) else {
            return false;
        };
        if shader.kind == ShaderKind::Default {
            backend.bind_shader(shader.program);
            backend.draw_sky_box(sky_box.cube_map);
        }
        false
    });
}

fn render_particles(scene: &Scene, backend: &mut dyn DrawBackend) {
    scene.for_each_entity(|entity| {
        if !entity.is_active {
            return false;
        }
        let Some(emitter) = scene.get_component::<ParticleEmitterComponent>(entity.id) else {
            return false;
        };
        let Some(shader) = scene.get_component::<UnlitShader>(entity.id) else {
            return false;
        };
        if shader.kind == ShaderKind::Particle {
            backend.bind_shader(shader.program);
            backend.draw_particles(emitter.texture, emitter.live_estimate());
        }
        false
    });
}

fn render_overlays(scene: &Scene, backend: &mut dyn DrawBackend) {
    scene.for_each_entity(|entity| {
        if !entity.is_active {
            return false;
        }
        let Some(overlay) = scene.get_component::<OverlayTextComponent>(entity.id) else {
            return false;
        };
        let Some(shader) = scene.get_component::<UnlitShader>(entity.id) else {
            return false;
        };
        if shader.kind == ShaderKind::Gui {
            backend.bind_shader(shader.program);
            backend.draw_overlay(overlay.font, &overlay.text);
        }
        false
    });
}
