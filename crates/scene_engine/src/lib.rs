//! # Scene Engine
//!
//! An entity/component scene runtime for interactive 3D simulations.
//!
//! ## Features
//!
//! - **ECS Store**: Opaque entity identities over densely packed, per-kind
//!   component columns
//! - **Typed Queries**: Static kind dispatch — lookups, snapshots, and
//!   early-exit walks with no runtime type inspection
//! - **Scene Lifecycle**: Manifest-driven load/unload with per-entity
//!   failure isolation and a paired physics world
//! - **Frame Drivers**: Fixed-timestep physics sync, gameplay update, and a
//!   backend-agnostic render pass walk
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Empty;
//!
//! impl EntityBlueprint for Empty {
//!     fn name(&self) -> &str {
//!         "empty"
//!     }
//!
//!     fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
//!         Ok(vitals.scene.generate_entity())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifests = vec![SceneManifest::new("start").with(Empty)];
//!     let mut controller =
//!         SceneController::new(Settings::default(), AssetCatalog::new(), manifests);
//!     let clock = Rc::new(RefCell::new(Timer::new()));
//!     let messages = Rc::new(RefCell::new(Messenger::new()));
//!     controller.initialize(clock, messages)?;
//!     controller.fixed_update();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod lifecycle;
pub mod physics;
pub mod settings;
pub mod systems;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetCatalog, MeshHandle, ShaderHandle, TextureHandle},
        ecs::{Component, Entity, EntityId, Scene},
        events::{EngineEvent, Messenger},
        foundation::{
            math::{Mat4, Transform, Vec3},
            time::Timer,
        },
        lifecycle::{
            ConstructionError, EntityBlueprint, EntityVitals, LifecycleState, LoadError,
            SceneController, SceneManifest,
        },
        physics::{CollisionShape, PhysicsWorld},
        settings::Settings,
        systems::{DrawBackend, RenderPass},
    };
}
