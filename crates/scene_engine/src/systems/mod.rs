//! Per-frame drivers
//!
//! Consumers of the scene's query surface, one pass each per frame. None of
//! them owns the scene or the physics world; every entry point borrows both
//! for the duration of one call, so no reference can survive a scene
//! transition.

pub mod fixed_update;
pub mod render;
pub mod update;

pub use fixed_update::FixedUpdateSystem;
pub use render::{DrawBackend, RenderPass, RenderSystem};
pub use update::UpdateSystem;
