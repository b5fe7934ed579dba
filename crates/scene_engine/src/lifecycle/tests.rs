//! Lifecycle controller integration tests
//!
//! Exercises the load/unload protocol end to end with stub blueprints.

use super::*;
use crate::ecs::components::collision::box_body;
use crate::ecs::components::{
    CameraComponent, CollisionBody, DirectionalLight, LitShader, ModelComponent, PointLight,
};
use crate::ecs::EntityId;
use crate::foundation::math::Vec3;
use approx::assert_relative_eq;

struct CameraRig;

impl EntityBlueprint for CameraRig {
    fn name(&self) -> &str {
        "camera rig"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let id = vitals.scene.generate_entity();
        vitals.scene.add_component(
            id,
            CameraComponent::looking_at(Vec3::new(0.0, 2.0, 8.0), Vec3::zeros()),
        );
        Ok(id)
    }
}

struct LightRig;

impl EntityBlueprint for LightRig {
    fn name(&self) -> &str {
        "light rig"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let id = vitals.scene.generate_entity();
        vitals.scene.add_component(id, DirectionalLight::default());
        vitals
            .scene
            .add_component(id, PointLight::at(Vec3::new(0.0, 5.0, 0.0)));
        Ok(id)
    }
}

/// Crate with a dynamic collision body; requires the "crate" mesh
struct PhysicsCrate {
    position: Vec3,
}

impl EntityBlueprint for PhysicsCrate {
    fn name(&self) -> &str {
        "physics crate"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let mesh = vitals
            .assets
            .mesh("crate")
            .ok_or_else(|| ConstructionError::MissingAsset("crate".to_owned()))?;
        let shader = vitals
            .assets
            .shader("lit")
            .ok_or_else(|| ConstructionError::MissingAsset("lit".to_owned()))?;

        let id = vitals.scene.generate_entity();
        vitals.scene.add_component(id, ModelComponent::new(mesh));
        vitals.scene.add_component(id, LitShader::new(shader));
        vitals.scene.add_component(
            id,
            box_body(Vec3::new(0.5, 0.5, 0.5), self.position, 1.0).with_owner(id),
        );
        Ok(id)
    }
}

/// Always fails, standing in for an entity with a broken descriptor
struct Broken;

impl EntityBlueprint for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn spawn(&self, _vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        Err(ConstructionError::InvalidDescriptor("no mesh name".to_owned()))
    }
}

fn catalog() -> AssetCatalog {
    let mut assets = AssetCatalog::new();
    assets.register_mesh("crate");
    assets.register_shader("lit");
    assets
}

fn vitals() -> (Rc<RefCell<Timer>>, Rc<RefCell<Messenger<EngineEvent>>>) {
    (
        Rc::new(RefCell::new(Timer::new())),
        Rc::new(RefCell::new(Messenger::new())),
    )
}

fn controller() -> SceneController {
    let manifests = vec![
        SceneManifest::new("hall").with(LightRig).with(CameraRig),
        SceneManifest::new("yard")
            .with(CameraRig)
            .with(PhysicsCrate {
                position: Vec3::new(0.0, 10.0, 0.0),
            })
            .with(Broken)
            .with(PhysicsCrate {
                position: Vec3::new(3.0, 10.0, 0.0),
            }),
    ];
    SceneController::new(Settings::default(), catalog(), manifests)
}

#[test]
fn test_load_reaches_active_state() {
    let mut controller = controller();
    assert_eq!(controller.state(), LifecycleState::Unloaded);

    controller.load(0).unwrap();
    assert_eq!(controller.state(), LifecycleState::Active);
    assert_eq!(controller.scene().unwrap().entity_count(), 2);
}

#[test]
fn test_reload_yields_identical_cardinalities() {
    let mut controller = controller();
    controller.load(1).unwrap();
    let first_entities = controller.scene().unwrap().entity_count();
    let first_bodies = controller.physics().unwrap().body_count();

    controller.load(1).unwrap();
    assert_eq!(controller.scene().unwrap().entity_count(), first_entities);
    assert_eq!(controller.physics().unwrap().body_count(), first_bodies);
}

#[test]
fn test_out_of_range_load_leaves_scene_intact() {
    let mut controller = controller();
    controller.load(0).unwrap();
    let entities = controller.scene().unwrap().entity_count();

    let result = controller.load(9);
    assert!(matches!(
        result,
        Err(LoadError::OutOfRange { index: 9, count: 2 })
    ));
    assert_eq!(controller.state(), LifecycleState::Active);
    assert_eq!(controller.current_scene_index(), 0);
    assert_eq!(controller.scene().unwrap().entity_count(), entities);
}

#[test]
fn test_light_and_camera_scenario() {
    let mut controller = controller();
    controller.load(0).unwrap();

    {
        let scene = controller.scene().unwrap();
        assert!(scene
            .first_active_component_of_type::<CameraComponent>()
            .is_some());
        assert_eq!(scene.all_components_of_type::<PointLight>().len(), 1);
        assert_eq!(
            scene.all_components_of_type::<DirectionalLight>().len(),
            1
        );
    }

    controller.unload();
    assert_eq!(controller.state(), LifecycleState::Unloaded);
    assert!(controller.scene().is_none());
    assert!(controller.physics().is_none());
}

#[test]
fn test_sync_pass_registers_exactly_the_built_bodies() {
    let mut controller = controller();
    // Scene 1 holds two crates plus one blueprint that fails non-fatally.
    controller.load(1).unwrap();

    assert_eq!(controller.physics().unwrap().body_count(), 2);
    assert_eq!(
        controller
            .scene()
            .unwrap()
            .all_components_of_type::<CollisionBody>()
            .len(),
        2
    );
}

#[test]
fn test_unload_with_nothing_loaded_is_safe() {
    let mut controller = controller();
    controller.unload();
    controller.unload();
    assert_eq!(controller.state(), LifecycleState::Unloaded);
}

#[test]
fn test_frame_without_vitals_is_a_no_op() {
    let mut controller = controller();
    controller.load(1).unwrap();

    // No clock or messenger attached: must not step or panic.
    controller.fixed_update();
    controller.update();
    assert_relative_eq!(controller.physics().unwrap().simulated_time(), 0.0);
}

#[test]
fn test_fixed_update_steps_physics() {
    let mut controller = controller();
    let (clock, messages) = vitals();
    controller.initialize(clock, messages).unwrap();
    controller.load(1).unwrap();

    controller.fixed_update();
    let expected = Settings::default().fixed_timestep;
    assert_relative_eq!(
        controller.physics().unwrap().simulated_time(),
        expected,
        epsilon = 1e-6
    );
}

#[test]
fn test_scene_advance_request_switches_scene() {
    let mut controller = controller();
    let (clock, messages) = vitals();
    controller.initialize(clock, messages.clone()).unwrap();
    assert_eq!(controller.current_scene_index(), 0);

    messages
        .borrow_mut()
        .post(EngineEvent::SceneAdvanceRequested);
    controller.fixed_update();
    assert_eq!(controller.current_scene_index(), 1);

    // Wraps back around.
    messages
        .borrow_mut()
        .post(EngineEvent::SceneAdvanceRequested);
    controller.fixed_update();
    assert_eq!(controller.current_scene_index(), 0);
}

#[test]
fn test_resize_event_reaches_cameras_through_the_queue() {
    let mut controller = controller();
    let (clock, messages) = vitals();
    controller.initialize(clock, messages.clone()).unwrap();

    messages.borrow_mut().post(EngineEvent::DisplayResized {
        width: 400,
        height: 200,
    });
    controller.fixed_update();

    let scene = controller.scene().unwrap();
    let camera = scene
        .first_active_component_of_type::<CameraComponent>()
        .unwrap();
    assert_relative_eq!(camera.aspect, 2.0);
}

#[test]
fn test_initialize_loads_scene_zero() {
    let mut controller = controller();
    let (clock, messages) = vitals();
    controller.initialize(clock, messages).unwrap();
    assert_eq!(controller.state(), LifecycleState::Active);
    assert_eq!(controller.current_scene_index(), 0);
}
