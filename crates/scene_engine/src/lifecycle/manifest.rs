//! Scene manifests and entity blueprints
//!
//! A manifest is a per-scene ordered list of entity constructors — data, not
//! a wire format. The controller invokes each blueprint exactly once per
//! load with the vitals bundle; blueprints allocate their entity and attach
//! components, nothing more.

use super::error::ConstructionError;
use crate::assets::AssetCatalog;
use crate::ecs::{EntityId, Scene};
use crate::physics::PhysicsWorld;
use crate::settings::Settings;

/// Everything a blueprint needs to build its entity
///
/// Borrows are valid only for the duration of one `spawn` call; nothing a
/// blueprint receives may be retained.
pub struct EntityVitals<'a> {
    /// Global runtime settings
    pub settings: &'a Settings,
    /// The scene under construction
    pub scene: &'a mut Scene,
    /// The physics world paired with the scene
    pub physics: &'a mut PhysicsWorld,
    /// Long-lived asset handle catalog
    pub assets: &'a AssetCatalog,
}

/// A self-contained entity constructor
pub trait EntityBlueprint {
    /// Diagnostic name, used when a spawn is skipped
    fn name(&self) -> &str;

    /// Build the entity: allocate an id and attach components
    ///
    /// An error skips this entity only; the scene load continues.
    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError>;
}

/// Ordered list of blueprints for one scene
#[derive(Default)]
pub struct SceneManifest {
    name: String,
    entries: Vec<Box<dyn EntityBlueprint>>,
}

impl SceneManifest {
    /// Create an empty manifest with a diagnostic name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append a blueprint (builder style)
    #[must_use]
    pub fn with(mut self, blueprint: impl EntityBlueprint + 'static) -> Self {
        self.entries.push(Box::new(blueprint));
        self
    }

    /// Append a blueprint
    pub fn push(&mut self, blueprint: impl EntityBlueprint + 'static) {
        self.entries.push(Box::new(blueprint));
    }

    /// Diagnostic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of blueprints
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest holds no blueprints
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the blueprints in manifest order
    pub fn iter(&self) -> impl Iterator<Item = &dyn EntityBlueprint> {
        self.entries.iter().map(Box::as_ref)
    }
}
