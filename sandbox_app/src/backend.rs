//! Headless draw backend
//!
//! Stands in for a real graphics device: every draw call is counted and
//! logged at trace level. Useful for soak-testing scene logic without a
//! window system.

use scene_engine::prelude::*;

/// Backend that counts draw calls instead of issuing them
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    passes: u64,
    draw_calls: u64,
    bound_shader: Option<ShaderHandle>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total passes begun since creation
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Total draw calls issued since creation
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl DrawBackend for HeadlessBackend {
    fn begin_pass(&mut self, pass: RenderPass) {
        self.passes += 1;
        self.bound_shader = None;
        log::trace!("begin pass {:?}", pass);
    }

    fn bind_shader(&mut self, program: ShaderHandle) {
        if self.bound_shader != Some(program) {
            self.bound_shader = Some(program);
            log::trace!("bind shader {:?}", program);
        }
    }

    fn draw_model(&mut self, mesh: MeshHandle, animated: bool) {
        self.draw_calls += 1;
        log::trace!("draw model {:?} (animated: {})", mesh, animated);
    }

    fn draw_sky_box(&mut self, cube_map: scene_engine::assets::CubeMapHandle) {
        self.draw_calls += 1;
        log::trace!("draw sky box {:?}", cube_map);
    }

    fn draw_particles(&mut self, texture: TextureHandle, count: u32) {
        self.draw_calls += 1;
        log::trace!("draw {} particles with {:?}", count, texture);
    }

    fn draw_overlay(&mut self, font: scene_engine::assets::FontHandle, text: &str) {
        self.draw_calls += 1;
        log::trace!("draw overlay {:?}: {}", font, text);
    }
}
