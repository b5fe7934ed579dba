//! Lighting components
//!
//! Pure data; the render driver stages these into lit shaders every frame.
//! A light carries its own active flag on top of the owning entity's, so a
//! single light rig entity can blink individual point lights without
//! deactivating the whole rig.

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Directional light (parallel rays, no position)
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels, world space
    pub direction: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
    /// Whether the light participates in shading
    pub active: bool,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, 0.0),
            ambient: Vec3::new(0.1, 0.1, 0.1),
            diffuse: Vec3::new(0.8, 0.8, 0.8),
            specular: Vec3::new(1.0, 1.0, 1.0),
            active: true,
        }
    }
}

impl Component for DirectionalLight {}

/// Point light with distance attenuation
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
    /// Whether the light participates in shading
    pub active: bool,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            ambient: Vec3::new(0.45, 0.45, 0.5),
            diffuse: Vec3::new(0.55, 0.55, 0.6),
            specular: Vec3::new(0.7, 0.6, 0.5),
            constant: 1.0,
            linear: 0.45,
            quadratic: 0.0075,
            active: true,
        }
    }
}

impl PointLight {
    /// Create an active point light at the given position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Component for PointLight {}
