//! Particle emitter component
//!
//! Data only; the gameplay-update driver advances emitter age each frame and
//! the render driver asks for the live-particle estimate when drawing.

use crate::assets::TextureHandle;
use crate::ecs::Component;
use crate::foundation::math::{Vec3, Vec4};

/// Emission pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterKind {
    /// Particles launched upward and pulled back down by weight
    Fountain,
}

/// Continuous particle emitter
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleEmitterComponent {
    /// Emission pattern
    pub kind: EmitterKind,
    /// Billboard texture
    pub texture: TextureHandle,
    /// World-space emitter position
    pub position: Vec3,
    /// Particles spawned per second
    pub particles_per_second: f32,
    /// Seconds each particle lives
    pub particle_lifetime: f32,
    /// Initial particle scale
    pub start_scale: f32,
    /// Gravity weight applied to particles
    pub weight: f32,
    /// Base color with alpha
    pub color: Vec4,
    /// Seconds the emitter has been running
    age: f32,
}

impl ParticleEmitterComponent {
    /// Create a fountain emitter at the given position
    pub fn fountain(texture: TextureHandle, position: Vec3) -> Self {
        Self {
            kind: EmitterKind::Fountain,
            texture,
            position,
            particles_per_second: 100.0,
            particle_lifetime: 2.0,
            start_scale: 0.1,
            weight: 1.0,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            age: 0.0,
        }
    }

    /// Advance the emitter clock; called by the gameplay-update driver
    pub fn advance(&mut self, delta_time: f32) {
        self.age += delta_time.max(0.0);
    }

    /// Seconds the emitter has been running
    pub fn age(&self) -> f32 {
        self.age
    }

    /// Estimated number of live particles at the current age
    ///
    /// Ramps up from zero after a reload and saturates at the steady-state
    /// population `rate * lifetime`.
    pub fn live_estimate(&self) -> u32 {
        let ramped = self.particles_per_second * self.age.min(self.particle_lifetime);
        ramped.max(0.0) as u32
    }
}

impl Component for ParticleEmitterComponent {}
