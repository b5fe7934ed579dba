//! Global runtime settings
//!
//! Long-lived, scene-independent configuration handed to entity blueprints
//! through [`EntityVitals`](crate::lifecycle::EntityVitals) and consumed by
//! the per-frame drivers.

use crate::config::Config;
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Global settings for the scene runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// World gravity applied to dynamic bodies
    pub gravity: Vec3,
    /// Maximum point lights staged into a single lit shader
    pub lights_per_entity: usize,
    /// Fixed simulation timestep in seconds
    pub fixed_timestep: f32,
    /// Initial display width in pixels
    pub window_width: u32,
    /// Initial display height in pixels
    pub window_height: u32,
    /// Default spawn position for the player blueprint
    pub player_spawn: Vec3,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -10.0, 0.0),
            lights_per_entity: 4,
            fixed_timestep: 1.0 / 60.0,
            window_width: 1280,
            window_height: 720,
            player_spawn: Vec3::new(-20.0, 0.0, 10.0),
        }
    }
}

impl Config for Settings {}
