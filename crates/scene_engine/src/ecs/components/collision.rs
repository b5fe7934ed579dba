//! Collision body components
//!
//! Physics-bearing payload. Bodies are registered with the physics world
//! once per scene load by the lifecycle controller's synchronization pass;
//! the physics world never discovers bodies on its own.

use crate::ecs::{Component, EntityId};
use crate::foundation::math::{Transform, Vec3};
use crate::physics::{BodyTag, CollisionShape};

/// A simple rigid body attached to an entity
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionBody {
    /// Collision shape handed to the physics world
    pub shape: CollisionShape,
    /// Mass in kilograms; zero means static
    pub mass: f32,
    /// Initial body transform
    pub transform: Transform,
    /// Collision layer this body belongs to
    pub layer: u32,
    /// Layers this body collides with
    pub mask: u32,
    /// Trigger volumes report overlaps without physical response
    pub is_trigger: bool,
    /// Surface friction
    pub friction: f32,
    /// Restitution (bounciness)
    pub restitution: f32,
    /// Owning entity, used for reverse lookup only
    ///
    /// A weak back-reference: a plain identifier that never extends the
    /// component's lifetime.
    pub owner: Option<EntityId>,
    /// Distinguishes several bodies on one entity (bone colliders)
    pub collider_index: i32,
}

impl CollisionBody {
    /// Create a dynamic body with the given shape and mass
    pub fn new(shape: CollisionShape, mass: f32, transform: Transform) -> Self {
        Self {
            shape,
            mass,
            transform,
            layer: crate::physics::CollisionLayers::ENVIRONMENT,
            mask: crate::physics::CollisionLayers::ALL,
            is_trigger: false,
            friction: 0.5,
            restitution: 0.0,
            owner: None,
            collider_index: 0,
        }
    }

    /// Create a static (zero-mass) body
    pub fn fixed(shape: CollisionShape, transform: Transform) -> Self {
        Self::new(shape, 0.0, transform)
    }

    /// Set the owning entity for reverse lookup
    #[must_use]
    pub fn with_owner(mut self, owner: EntityId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Mark the body as a trigger volume
    #[must_use]
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Set collision layer and mask
    #[must_use]
    pub fn with_filter(mut self, layer: u32, mask: u32) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Identity of this body inside the physics world, if it has an owner
    pub fn tag(&self) -> Option<BodyTag> {
        self.owner.map(|owner| BodyTag {
            owner,
            collider: self.collider_index,
        })
    }
}

impl Component for CollisionBody {}

/// Composite body made of one collider per bone of an animated model
///
/// The synchronization pass unpacks this into its constituent simple bodies
/// before registering them with the physics world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoneCollisionBody {
    colliders: Vec<(i32, CollisionBody)>,
}

impl BoneCollisionBody {
    /// Create an empty composite body
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a collider for the given bone
    ///
    /// Collider indices are offset by one so index zero stays reserved for
    /// the entity's simple body.
    pub fn add_collider(&mut self, bone_id: i32, owner: EntityId, mut body: CollisionBody) {
        body.owner = Some(owner);
        body.collider_index = bone_id + 1;
        self.colliders.push((bone_id, body));
    }

    /// Number of per-bone colliders
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Visit every per-bone collider
    pub fn iter_colliders(&self, mut visitor: impl FnMut(i32, &CollisionBody)) {
        for (bone_id, body) in &self.colliders {
            visitor(*bone_id, body);
        }
    }

    /// Visit every per-bone collider mutably
    pub fn iter_colliders_mut(&mut self, mut visitor: impl FnMut(i32, &mut CollisionBody)) {
        for (bone_id, body) in &mut self.colliders {
            visitor(*bone_id, body);
        }
    }
}

impl Component for BoneCollisionBody {}

/// Convenience constructor for a unit box body at a position
pub fn box_body(half_extents: Vec3, position: Vec3, mass: f32) -> CollisionBody {
    CollisionBody::new(
        CollisionShape::Box { half_extents },
        mass,
        Transform::from_position(position),
    )
}
