//! Rigid-body registry and simulation stepping

use super::{CollisionShape, PhysicsError};
use crate::ecs::components::CollisionBody;
use crate::ecs::EntityId;
use crate::foundation::math::{Quat, Vec3};
use slotmap::{new_key_type, SlotMap};
use std::collections::HashMap;

new_key_type! {
    /// Storage key of a registered rigid body
    pub struct BodyKey;
}

/// Identity of a body inside the world: owning entity plus collider index
///
/// Simple bodies use collider index 0; bone-hierarchy composites register
/// one body per bone id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyTag {
    /// Owning entity
    pub owner: EntityId,
    /// Collider index within the entity
    pub collider: i32,
}

/// A rigid body as owned by the physics world
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// Collision shape
    pub shape: CollisionShape,
    /// Mass in kilograms; zero means static
    pub mass: f32,
    /// World-space position
    pub position: Vec3,
    /// World-space rotation
    pub rotation: Quat,
    /// Current linear velocity
    pub linear_velocity: Vec3,
    /// Collision layer
    pub layer: u32,
    /// Collision mask
    pub mask: u32,
    /// Whether the body is a trigger volume
    pub is_trigger: bool,
}

impl RigidBody {
    fn from_component(body: &CollisionBody) -> Self {
        Self {
            shape: body.shape.clone(),
            mass: body.mass,
            position: body.transform.position,
            rotation: body.transform.rotation,
            linear_velocity: Vec3::zeros(),
            layer: body.layer,
            mask: body.mask,
            is_trigger: body.is_trigger,
        }
    }

    /// Whether the simulation moves this body
    pub fn is_dynamic(&self) -> bool {
        self.mass > 0.0 && !self.is_trigger
    }
}

/// The physics world the scene runtime talks to
///
/// Owns every registered body for the lifetime of one loaded scene. It does
/// not discover bodies on its own; registration happens exactly once per
/// scene load through the synchronization pass.
pub struct PhysicsWorld {
    gravity: Vec3,
    bodies: SlotMap<BodyKey, RigidBody>,
    tags: HashMap<BodyTag, BodyKey>,
    simulated_time: f32,
}

impl PhysicsWorld {
    /// Create a world with the given gravity
    ///
    /// Fails if any gravity component is not finite; a world that cannot be
    /// constructed aborts the surrounding scene load.
    pub fn new(gravity: Vec3) -> Result<Self, PhysicsError> {
        if !gravity.iter().all(|component| component.is_finite()) {
            return Err(PhysicsError::InvalidGravity(
                gravity.x, gravity.y, gravity.z,
            ));
        }
        Ok(Self {
            gravity,
            bodies: SlotMap::with_key(),
            tags: HashMap::new(),
            simulated_time: 0.0,
        })
    }

    /// Register a rigid body built from a collision component
    ///
    /// A body with the same tag replaces the previous registration, so a
    /// repeated synchronization pass cannot duplicate bodies.
    pub fn add_rigid_body(&mut self, body: &CollisionBody) {
        let rigid = RigidBody::from_component(body);
        match body.tag() {
            Some(tag) => {
                if let Some(&existing) = self.tags.get(&tag) {
                    log::debug!(
                        "replacing rigid body for entity {} collider {}",
                        tag.owner.raw(),
                        tag.collider
                    );
                    self.bodies.remove(existing);
                }
                let key = self.bodies.insert(rigid);
                self.tags.insert(tag, key);
            }
            None => {
                self.bodies.insert(rigid);
            }
        }
    }

    /// Remove the body registered for the given component, if any
    pub fn remove_rigid_body(&mut self, body: &CollisionBody) -> bool {
        let Some(tag) = body.tag() else {
            log::warn!("cannot remove untagged rigid body");
            return false;
        };
        match self.tags.remove(&tag) {
            Some(key) => self.bodies.remove(key).is_some(),
            None => false,
        }
    }

    /// Remove every registered body
    pub fn remove_all_rigid_bodies(&mut self) {
        self.bodies.clear();
        self.tags.clear();
    }

    /// Advance the simulation by one fixed step
    pub fn step_simulation(&mut self, delta_time: f32) {
        for (_, body) in &mut self.bodies {
            if body.is_dynamic() {
                body.linear_velocity += self.gravity * delta_time;
                body.position += body.linear_velocity * delta_time;
            }
        }
        self.simulated_time += delta_time;
    }

    /// Number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Total simulated time in seconds
    pub fn simulated_time(&self) -> f32 {
        self.simulated_time
    }

    /// World gravity
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Iterate over every tagged body and its identity
    pub fn tagged_bodies(&self) -> impl Iterator<Item = (BodyTag, &RigidBody)> {
        self.tags
            .iter()
            .filter_map(|(tag, &key)| self.bodies.get(key).map(|body| (*tag, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::collision::box_body;
    use approx::assert_relative_eq;

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(Vec3::new(0.0, -10.0, 0.0)).unwrap()
    }

    #[test]
    fn test_invalid_gravity_is_rejected() {
        assert!(PhysicsWorld::new(Vec3::new(0.0, f32::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_add_and_remove_by_tag() {
        let mut world = world();
        let body = box_body(Vec3::new(0.5, 0.5, 0.5), Vec3::zeros(), 1.0)
            .with_owner(EntityId::new(1));

        world.add_rigid_body(&body);
        assert_eq!(world.body_count(), 1);

        assert!(world.remove_rigid_body(&body));
        assert_eq!(world.body_count(), 0);
        assert!(!world.remove_rigid_body(&body));
    }

    #[test]
    fn test_same_tag_replaces_instead_of_duplicating() {
        let mut world = world();
        let body = box_body(Vec3::new(0.5, 0.5, 0.5), Vec3::zeros(), 1.0)
            .with_owner(EntityId::new(1));

        world.add_rigid_body(&body);
        world.add_rigid_body(&body);
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn test_step_integrates_dynamic_bodies_only() {
        let mut world = world();
        let falling = box_body(Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.0, 10.0, 0.0), 1.0)
            .with_owner(EntityId::new(1));
        let floor = box_body(Vec3::new(10.0, 0.5, 10.0), Vec3::zeros(), 0.0)
            .with_owner(EntityId::new(2));

        world.add_rigid_body(&falling);
        world.add_rigid_body(&floor);
        world.step_simulation(1.0);

        for (tag, body) in world.tagged_bodies() {
            if tag.owner == EntityId::new(1) {
                assert_relative_eq!(body.position.y, 0.0, epsilon = 1e-5);
            } else {
                assert_relative_eq!(body.position.y, 0.0, epsilon = 1e-5);
                assert_relative_eq!(body.linear_velocity.norm(), 0.0);
            }
        }
        assert_relative_eq!(world.simulated_time(), 1.0);
    }
}
