//! Collision layer system for filtering collision detection

/// Collision layer definitions for layer/mask filtering
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Player character layer
    pub const PLAYER: u32 = 1 << 0;

    /// Enemy character layer
    pub const ENEMY: u32 = 1 << 1;

    /// Static environment geometry
    pub const ENVIRONMENT: u32 = 1 << 2;

    /// Trigger volumes (no physical response)
    pub const TRIGGER: u32 = 1 << 3;

    /// Debris and small physics objects
    pub const DEBRIS: u32 = 1 << 4;

    /// Check whether two bodies should collide based on layers and masks
    ///
    /// Collision requires each body's mask to include the other's layer.
    pub fn should_collide(layer_a: u32, mask_a: u32, layer_b: u32, mask_b: u32) -> bool {
        (mask_a & layer_b) != 0 && (mask_b & layer_a) != 0
    }
}
