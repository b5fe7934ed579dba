//! Physics world contract
//!
//! The physics engine proper is an external collaborator; this module holds
//! the narrow contract the scene runtime consumes: add/remove rigid body and
//! step the simulation. Bodies reach the world only through the lifecycle
//! controller's one-time post-load synchronization pass.

pub mod layers;
pub mod world;

pub use layers::CollisionLayers;
pub use world::{BodyTag, PhysicsWorld, RigidBody};

use crate::assets::MeshHandle;
use crate::foundation::math::Vec3;
use thiserror::Error;

/// Collision shape handed to the physics world
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// Axis-aligned box described by half extents
    Box {
        /// Half extents along each axis
        half_extents: Vec3,
    },
    /// Sphere
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Static triangle mesh taken from a loaded model
    TriangleMesh {
        /// Mesh supplying the triangles
        mesh: MeshHandle,
    },
}

/// Errors raised by the physics world
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Gravity must be finite in every component
    #[error("invalid gravity vector ({0}, {1}, {2})")]
    InvalidGravity(f32, f32, f32),
}
