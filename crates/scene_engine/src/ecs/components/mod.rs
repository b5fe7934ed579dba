//! Built-in component kinds
//!
//! Pure data containers; all logic resides in the per-frame drivers.

pub mod camera;
pub mod collision;
pub mod lighting;
pub mod model;
pub mod overlay;
pub mod particles;
pub mod shader;

pub use camera::CameraComponent;
pub use collision::{BoneCollisionBody, CollisionBody};
pub use lighting::{DirectionalLight, PointLight};
pub use model::{MaterialComponent, ModelComponent, SkyBoxComponent};
pub use overlay::OverlayTextComponent;
pub use particles::{EmitterKind, ParticleEmitterComponent};
pub use shader::{LitShader, ShaderKind, UniformBlock, UnlitShader};
