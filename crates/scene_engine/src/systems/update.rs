//! Gameplay-update driver
//!
//! One type-filtered pass per frame over gameplay-owned component kinds.
//! Structural changes (spawning, despawning) belong at frame boundaries,
//! not inside these passes.

use crate::ecs::components::ParticleEmitterComponent;
use crate::ecs::Scene;

/// Gameplay-update driver
#[derive(Debug, Default)]
pub struct UpdateSystem {
    frames: u64,
}

impl UpdateSystem {
    /// Create an uninitialized driver
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time pass against a freshly loaded scene
    pub fn initialize(&mut self, scene: &Scene) {
        self.frames = 0;
        log::debug!(
            "update driver initialized: {} particle emitters",
            scene.component_count::<ParticleEmitterComponent>()
        );
    }

    /// Advance per-frame gameplay state
    pub fn update(&mut self, scene: &mut Scene, delta_time: f32) {
        scene.for_each_of_type_mut(|emitter: &mut ParticleEmitterComponent| {
            emitter.advance(delta_time);
            false
        });
        self.frames += 1;
    }
}
