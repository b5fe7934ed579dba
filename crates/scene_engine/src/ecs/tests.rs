//! Cross-module ECS tests using the real component set
//!
//! The unit tests in `registry`, `storage`, `scene`, and `query` cover each
//! piece in isolation; these exercise the combinations the per-frame
//! subsystems rely on.

use super::components::{
    CameraComponent, CollisionBody, DirectionalLight, MaterialComponent, ModelComponent,
    PointLight,
};
use super::components::collision::box_body;
use super::Scene;
use crate::assets::AssetCatalog;
use crate::foundation::math::Vec3;

fn lit_prop(scene: &mut Scene, assets: &AssetCatalog, position: Vec3) -> super::EntityId {
    let id = scene.generate_entity();
    scene.add_component(id, ModelComponent::new(assets.mesh("crate").unwrap()));
    scene.add_component(id, MaterialComponent::default());
    scene.add_component(id, box_body(Vec3::new(0.5, 0.5, 0.5), position, 1.0).with_owner(id));
    id
}

fn catalog() -> AssetCatalog {
    let mut assets = AssetCatalog::new();
    assets.register_mesh("crate");
    assets
}

#[test]
fn test_composition_filter_selects_only_full_matches() {
    let assets = catalog();
    let mut scene = Scene::new();
    lit_prop(&mut scene, &assets, Vec3::zeros());
    lit_prop(&mut scene, &assets, Vec3::new(2.0, 0.0, 0.0));

    // A bare light has no model and must not match.
    let lamp = scene.generate_entity();
    scene.add_component(lamp, PointLight::at(Vec3::new(0.0, 4.0, 0.0)));

    let mut drawable = 0;
    scene.for_each_entity(|entity| {
        if scene.get_component::<ModelComponent>(entity.id).is_some()
            && scene.get_component::<MaterialComponent>(entity.id).is_some()
        {
            drawable += 1;
        }
        false
    });
    assert_eq!(drawable, 2);
}

#[test]
fn test_first_active_camera_skips_disabled_rig() {
    let mut scene = Scene::new();
    let main = scene.generate_entity();
    scene.add_component(
        main,
        CameraComponent::looking_at(Vec3::new(0.0, 2.0, 8.0), Vec3::zeros()),
    );
    let debug = scene.generate_entity();
    scene.add_component(
        debug,
        CameraComponent::looking_at(Vec3::new(0.0, 40.0, 0.1), Vec3::zeros()),
    );

    scene.set_entity_active(main, false);
    let picked = scene.first_active_component_of_type::<CameraComponent>().unwrap();
    approx::assert_relative_eq!(picked.position.y, 40.0);

    scene.set_entity_active(main, true);
    let picked = scene.first_active_component_of_type::<CameraComponent>().unwrap();
    approx::assert_relative_eq!(picked.position.y, 2.0);
}

#[test]
fn test_destroy_mid_walk_via_snapshot() {
    let assets = catalog();
    let mut scene = Scene::new();
    for i in 0..4 {
        lit_prop(&mut scene, &assets, Vec3::new(i as f32, 0.0, 0.0));
    }

    // Cull everything left of x = 2 by snapshotting first.
    for entity in scene.entity_snapshot() {
        let cull = scene
            .get_component::<CollisionBody>(entity.id)
            .is_some_and(|body| body.transform.position.x < 2.0);
        if cull {
            scene.destroy_entity(entity.id);
        }
    }

    assert_eq!(scene.entity_count(), 2);
    assert_eq!(scene.all_components_of_type::<CollisionBody>().len(), 2);
    assert_eq!(scene.all_components_of_type::<ModelComponent>().len(), 2);
}

#[test]
fn test_queries_after_destroy_observe_no_partial_entity() {
    let assets = catalog();
    let mut scene = Scene::new();
    let prop = lit_prop(&mut scene, &assets, Vec3::zeros());
    let keeper = lit_prop(&mut scene, &assets, Vec3::new(1.0, 0.0, 0.0));

    scene.destroy_entity(prop);

    assert!(scene.get_component::<ModelComponent>(prop).is_none());
    assert!(scene.get_component::<MaterialComponent>(prop).is_none());
    assert!(scene.get_component::<CollisionBody>(prop).is_none());
    assert!(!scene.is_entity_active(prop));

    // The survivor is untouched.
    assert!(scene.get_component::<ModelComponent>(keeper).is_some());
    assert_eq!(scene.entity_count(), 1);
}

#[test]
fn test_mutable_walk_updates_every_instance() {
    let mut scene = Scene::new();
    for height in [1.0_f32, 2.0, 3.0] {
        let id = scene.generate_entity();
        scene.add_component(id, PointLight::at(Vec3::new(0.0, height, 0.0)));
    }

    scene.for_each_of_type_mut(|light: &mut PointLight| {
        light.position.y *= 2.0;
        false
    });

    let total: f32 = scene
        .all_components_of_type::<PointLight>()
        .iter()
        .map(|light| light.position.y)
        .sum();
    approx::assert_relative_eq!(total, 12.0, epsilon = 1e-6);
}

#[test]
fn test_early_exit_stops_the_walk() {
    let mut scene = Scene::new();
    for _ in 0..5 {
        let id = scene.generate_entity();
        scene.add_component(id, DirectionalLight::default());
    }

    let mut visited = 0;
    scene.for_each_of_type(|_: &DirectionalLight| {
        visited += 1;
        visited == 2
    });
    assert_eq!(visited, 2);
}
