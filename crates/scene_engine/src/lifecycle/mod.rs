//! Scene lifecycle controller
//!
//! Owns the current [`Scene`] and [`PhysicsWorld`] exclusively, drives the
//! load/unload protocol, and wires the per-frame drivers against each newly
//! loaded pair. Per-frame subsystems and query results borrow; only the
//! controller owns, so every reference dies before the next `load`.

pub mod error;
pub mod manifest;

pub use error::{ConstructionError, LoadError};
pub use manifest::{EntityBlueprint, EntityVitals, SceneManifest};

use crate::assets::AssetCatalog;
use crate::ecs::components::{BoneCollisionBody, CollisionBody};
use crate::ecs::Scene;
use crate::events::{EngineEvent, Messenger};
use crate::foundation::time::Timer;
use crate::physics::PhysicsWorld;
use crate::settings::Settings;
use crate::systems::{DrawBackend, FixedUpdateSystem, RenderPass, RenderSystem, UpdateSystem};
use std::cell::RefCell;
use std::rc::Rc;

/// Lifecycle state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No scene loaded
    Unloaded,
    /// A load is in progress
    Loading,
    /// A scene is loaded and running
    Active,
    /// Teardown in progress
    Unloading,
}

/// Owns the scene/physics pair and drives the frame and load protocols
pub struct SceneController {
    state: LifecycleState,
    settings: Settings,
    assets: AssetCatalog,
    manifests: Vec<SceneManifest>,
    current_index: usize,

    scene: Option<Scene>,
    physics: Option<PhysicsWorld>,

    // Long-lived collaborators owned by the embedding application. Absence
    // turns every per-frame entry point into a logged no-op.
    clock: Option<Rc<RefCell<Timer>>>,
    messages: Option<Rc<RefCell<Messenger<EngineEvent>>>>,

    fixed_update: FixedUpdateSystem,
    update: UpdateSystem,
    render: RenderSystem,
}

impl SceneController {
    /// Create an unloaded controller over the given manifests
    pub fn new(settings: Settings, assets: AssetCatalog, manifests: Vec<SceneManifest>) -> Self {
        Self {
            state: LifecycleState::Unloaded,
            settings,
            assets,
            manifests,
            current_index: 0,
            scene: None,
            physics: None,
            clock: None,
            messages: None,
            fixed_update: FixedUpdateSystem::new(),
            update: UpdateSystem::new(),
            render: RenderSystem::new(),
        }
    }

    /// Attach (or replace) the long-lived collaborators
    pub fn reset_vitals(
        &mut self,
        clock: Rc<RefCell<Timer>>,
        messages: Rc<RefCell<Messenger<EngineEvent>>>,
    ) {
        self.clock = Some(clock);
        self.messages = Some(messages);
    }

    /// Attach collaborators and load the first scene
    pub fn initialize(
        &mut self,
        clock: Rc<RefCell<Timer>>,
        messages: Rc<RefCell<Messenger<EngineEvent>>>,
    ) -> Result<(), LoadError> {
        self.reset_vitals(clock, messages);
        self.load(0)
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The loaded scene, if any
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// The loaded scene, mutably
    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// The physics world paired with the loaded scene, if any
    pub fn physics(&self) -> Option<&PhysicsWorld> {
        self.physics.as_ref()
    }

    /// Index of the currently loaded scene
    pub fn current_scene_index(&self) -> usize {
        self.current_index
    }

    /// Number of scenes in the manifest list
    pub fn scene_count(&self) -> usize {
        self.manifests.len()
    }

    /// Load the scene at `index`, replacing the current one
    ///
    /// An out-of-range index fails without touching the current scene. Once
    /// teardown has happened, an allocation failure leaves the controller
    /// `Unloaded` — the previous scene is not restored.
    pub fn load(&mut self, index: usize) -> Result<(), LoadError> {
        if index >= self.manifests.len() {
            log::warn!(
                "cannot load scene {}: only {} scenes",
                index,
                self.manifests.len()
            );
            return Err(LoadError::OutOfRange {
                index,
                count: self.manifests.len(),
            });
        }

        // Free the old scene and physics world.
        self.unload();
        self.state = LifecycleState::Loading;

        let mut scene = Scene::new();
        let mut physics = match PhysicsWorld::new(self.settings.gravity) {
            Ok(world) => world,
            Err(err) => {
                log::error!("scene {} load aborted: {}", index, err);
                self.state = LifecycleState::Unloaded;
                return Err(LoadError::Allocation(err));
            }
        };

        // Construct every manifest entity; individual failures are skipped.
        let manifest = &self.manifests[index];
        for blueprint in manifest.iter() {
            let mut vitals = EntityVitals {
                settings: &self.settings,
                scene: &mut scene,
                physics: &mut physics,
                assets: &self.assets,
            };
            match blueprint.spawn(&mut vitals) {
                Ok(id) => log::debug!("spawned {} as entity {}", blueprint.name(), id.raw()),
                Err(err) => log::warn!("skipping entity {}: {}", blueprint.name(), err),
            }
        }

        // One-time synchronization pass: register every physics-bearing
        // component with the fresh physics world.
        let mut registered = 0usize;
        scene.for_each_of_type(|body: &CollisionBody| {
            physics.add_rigid_body(body);
            registered += 1;
            false
        });
        scene.for_each_of_type(|bones: &BoneCollisionBody| {
            bones.iter_colliders(|_, body| {
                physics.add_rigid_body(body);
                registered += 1;
            });
            false
        });
        log::debug!("registered {} rigid bodies", registered);

        // Re-init the per-frame drivers against the new pair.
        self.fixed_update.initialize(&scene);
        self.update.initialize(&scene);
        self.render.initialize(&mut scene, &self.settings);

        self.scene = Some(scene);
        self.physics = Some(physics);
        self.current_index = index;
        self.state = LifecycleState::Active;
        log::info!(
            "scene {} ({}) loaded: {} entities",
            index,
            manifest.name(),
            self.scene.as_ref().map_or(0, Scene::entity_count)
        );
        Ok(())
    }

    /// Load the next scene in manifest order, wrapping around
    pub fn advance_scene(&mut self) -> Result<(), LoadError> {
        let count = self.manifests.len();
        if count == 0 {
            return Err(LoadError::OutOfRange { index: 0, count });
        }
        let next = if self.state == LifecycleState::Active {
            (self.current_index + 1) % count
        } else {
            0
        };
        self.load(next)
    }

    /// Tear down the current scene, physics world, and all entities
    ///
    /// Safe to call with nothing loaded.
    pub fn unload(&mut self) {
        if self.scene.is_none() && self.physics.is_none() {
            self.state = LifecycleState::Unloaded;
            return;
        }
        self.state = LifecycleState::Unloading;

        // Entities first, then the physics world, then the scene itself.
        if let Some(scene) = self.scene.as_mut() {
            for entity in scene.entity_snapshot() {
                scene.destroy_entity(entity.id);
            }
        }
        if let Some(physics) = self.physics.as_mut() {
            physics.remove_all_rigid_bodies();
        }
        self.physics = None;
        self.scene = None;
        self.state = LifecycleState::Unloaded;
        log::info!("scene unloaded");
    }

    fn vitals_missing(&self) -> bool {
        if self.clock.is_none() || self.messages.is_none() {
            log::warn!("one or more vital collaborators is missing; frame skipped");
            return true;
        }
        false
    }

    /// Fixed-timestep tick: drain the message channel, then step physics
    pub fn fixed_update(&mut self) {
        if self.vitals_missing() {
            return;
        }
        self.drain_event_queue();

        let delta_time = self.settings.fixed_timestep;
        if let (Some(scene), Some(physics)) = (self.scene.as_mut(), self.physics.as_mut()) {
            self.fixed_update.fixed_update(scene, physics, delta_time);
        }
    }

    /// Gameplay update tick
    pub fn update(&mut self) {
        if self.vitals_missing() {
            return;
        }
        let delta_time = self
            .clock
            .as_ref()
            .map_or(0.0, |clock| clock.borrow().delta_time());
        if let Some(scene) = self.scene.as_mut() {
            self.update.update(scene, delta_time);
        }
    }

    /// Execute one render pass against the loaded scene
    pub fn render(&mut self, pass: RenderPass, backend: &mut dyn DrawBackend) {
        if self.vitals_missing() {
            return;
        }
        if let Some(scene) = self.scene.as_mut() {
            self.render.render(scene, &self.settings, pass, backend);
        }
    }

    /// Drain the inbound FIFO and dispatch each event
    fn drain_event_queue(&mut self) {
        let Some(messages) = self.messages.clone() else {
            return;
        };
        let drained: Vec<EngineEvent> = {
            let mut queue = messages.borrow_mut();
            std::iter::from_fn(|| queue.next_message()).collect()
        };

        for event in drained {
            if event == EngineEvent::SceneAdvanceRequested {
                if let Err(err) = self.advance_scene() {
                    log::warn!("scene advance failed: {}", err);
                }
            } else if let Some(scene) = self.scene.as_mut() {
                self.fixed_update.handle_event(&event, scene);
            }
        }
    }
}

#[cfg(test)]
mod tests;
