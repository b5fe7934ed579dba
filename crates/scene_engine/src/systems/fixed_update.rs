//! Fixed-timestep driver
//!
//! Runs after the controller drains the message channel and before the
//! gameplay update: applies pending engine events, steps the physics world,
//! and mirrors simulated body transforms back into collision components.

use crate::ecs::components::{BoneCollisionBody, CameraComponent, CollisionBody};
use crate::ecs::{EntityId, Scene};
use crate::events::EngineEvent;
use crate::foundation::math::Vec3;
use crate::physics::PhysicsWorld;

/// Physics-step driver
#[derive(Debug, Default)]
pub struct FixedUpdateSystem {
    steps: u64,
}

impl FixedUpdateSystem {
    /// Create an uninitialized driver
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time pass against a freshly loaded scene
    pub fn initialize(&mut self, scene: &Scene) {
        self.steps = 0;
        log::debug!(
            "fixed-update driver initialized: {} collision bodies, {} composites",
            scene.component_count::<CollisionBody>(),
            scene.component_count::<BoneCollisionBody>()
        );
    }

    /// Apply one drained engine event to the scene
    pub fn handle_event(&mut self, event: &EngineEvent, scene: &mut Scene) {
        match event {
            EngineEvent::DisplayResized { width, height } => {
                scene.for_each_of_type_mut(|camera: &mut CameraComponent| {
                    camera.set_viewport(*width, *height);
                    false
                });
            }
            EngineEvent::RenderContextRefreshed => {
                log::debug!("render context refreshed");
            }
            // Scene switching is the controller's job.
            EngineEvent::SceneAdvanceRequested => {}
        }
    }

    /// Step the simulation and write body transforms back into the scene
    pub fn fixed_update(&mut self, scene: &mut Scene, physics: &mut PhysicsWorld, delta_time: f32) {
        physics.step_simulation(delta_time);
        self.steps += 1;

        let moved: Vec<(EntityId, i32, Vec3)> = physics
            .tagged_bodies()
            .map(|(tag, body)| (tag.owner, tag.collider, body.position))
            .collect();

        for (owner, collider, position) in moved {
            if collider == 0 {
                if let Some(body) = scene.get_component_mut::<CollisionBody>(owner) {
                    body.transform.position = position;
                }
            } else if let Some(bones) = scene.get_component_mut::<BoneCollisionBody>(owner) {
                bones.iter_colliders_mut(|bone_id, body| {
                    if bone_id + 1 == collider {
                        body.transform.position = position;
                    }
                });
            }
        }
    }

    /// Number of steps taken since the last initialization
    pub fn step_count(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::collision::box_body;
    use approx::assert_relative_eq;

    #[test]
    fn test_resize_event_updates_every_camera() {
        let mut scene = Scene::new();
        let a = scene.generate_entity();
        scene.add_component(a, CameraComponent::default());
        let b = scene.generate_entity();
        scene.add_component(b, CameraComponent::default());

        let mut system = FixedUpdateSystem::new();
        system.handle_event(
            &EngineEvent::DisplayResized {
                width: 100,
                height: 50,
            },
            &mut scene,
        );

        for camera in scene.all_components_of_type::<CameraComponent>() {
            assert_relative_eq!(camera.aspect, 2.0);
        }
    }

    #[test]
    fn test_fixed_update_writes_positions_back() {
        let mut scene = Scene::new();
        let id = scene.generate_entity();
        let body = box_body(Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.0, 20.0, 0.0), 1.0)
            .with_owner(id);
        scene.add_component(id, body.clone());

        let mut physics = PhysicsWorld::new(Vec3::new(0.0, -10.0, 0.0)).unwrap();
        physics.add_rigid_body(&body);

        let mut system = FixedUpdateSystem::new();
        system.fixed_update(&mut scene, &mut physics, 1.0);

        let stored = scene.get_component::<CollisionBody>(id).unwrap();
        assert_relative_eq!(stored.transform.position.y, 10.0, epsilon = 1e-5);
        assert_eq!(system.step_count(), 1);
    }
}
