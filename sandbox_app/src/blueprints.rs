//! Entity blueprints for the sandbox scenes
//!
//! Each blueprint builds one kind of entity from catalog handles and global
//! settings. Failures are per-entity: a missing asset skips that entity and
//! the scene load continues.

use rand::Rng;
use scene_engine::ecs::components::collision::box_body;
use scene_engine::ecs::components::{
    BoneCollisionBody, CameraComponent, CollisionBody, DirectionalLight, LitShader,
    MaterialComponent, ModelComponent, OverlayTextComponent, ParticleEmitterComponent,
    PointLight, ShaderKind, SkyBoxComponent, UnlitShader,
};
use scene_engine::foundation::math::{Transform, Vec3, Vec4};
use scene_engine::physics::{CollisionLayers, CollisionShape};
use scene_engine::prelude::*;

fn shader(vitals: &EntityVitals<'_>, name: &str) -> Result<ShaderHandle, ConstructionError> {
    vitals
        .assets
        .shader(name)
        .ok_or_else(|| ConstructionError::MissingAsset(name.to_owned()))
}

fn mesh(vitals: &EntityVitals<'_>, name: &str) -> Result<MeshHandle, ConstructionError> {
    vitals
        .assets
        .mesh(name)
        .ok_or_else(|| ConstructionError::MissingAsset(name.to_owned()))
}

/// The player: animated model, follow camera, stat overlay, and a capsule-ish
/// box body plus per-bone colliders for hit detection
pub struct Player;

impl EntityBlueprint for Player {
    fn name(&self) -> &str {
        "player"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let model_mesh = mesh(vitals, "player")?;
        let lit = shader(vitals, "animated-lit")?;
        let gui = shader(vitals, "gui")?;
        let font = vitals
            .assets
            .font("courier-new")
            .ok_or_else(|| ConstructionError::MissingAsset("courier-new".to_owned()))?;

        let id = vitals.scene.generate_entity();
        let spawn = vitals.settings.player_spawn;

        let model = ModelComponent::animated(model_mesh, 0, 6);
        let mut material = MaterialComponent::default();
        material.shininess = 16.0;

        let body = box_body(Vec3::new(0.4, 1.0, 0.4), spawn, 1.0)
            .with_owner(id)
            .with_filter(CollisionLayers::PLAYER, CollisionLayers::ALL);

        // Head and body hit boxes on top of the movement body.
        let mut bones = BoneCollisionBody::new();
        bones.add_collider(
            0,
            id,
            box_body(Vec3::new(0.25, 0.25, 0.25), spawn + Vec3::new(0.0, 1.2, 0.0), 0.0)
                .with_filter(CollisionLayers::PLAYER, CollisionLayers::ENEMY),
        );
        bones.add_collider(
            1,
            id,
            box_body(Vec3::new(0.35, 0.6, 0.25), spawn, 0.0)
                .with_filter(CollisionLayers::PLAYER, CollisionLayers::ENEMY),
        );

        vitals.scene.add_component(
            id,
            CameraComponent::looking_at(spawn + Vec3::new(0.0, 2.0, 8.0), spawn),
        );
        vitals.scene.add_component(id, model);
        vitals.scene.add_component(id, LitShader::new(lit));
        vitals.scene.add_component(id, material);
        vitals.scene.add_component(id, body);
        vitals.scene.add_component(id, bones);
        vitals
            .scene
            .add_component(id, UnlitShader::new(gui, ShaderKind::Gui));
        vitals
            .scene
            .add_component(id, OverlayTextComponent::new(font, "HP 100"));
        Ok(id)
    }
}

/// A wandering enemy with the same body layout as the player
pub struct Enemy {
    /// World position the enemy drops in at
    pub position: Vec3,
}

impl EntityBlueprint for Enemy {
    fn name(&self) -> &str {
        "enemy"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let model_mesh = mesh(vitals, "enemy")?;
        let lit = shader(vitals, "animated-lit")?;

        let id = vitals.scene.generate_entity();
        let mut material = MaterialComponent::default();
        material.shininess = 16.0;

        vitals
            .scene
            .add_component(id, ModelComponent::animated(model_mesh, 0, 6));
        vitals.scene.add_component(id, LitShader::new(lit));
        vitals.scene.add_component(id, material);
        vitals.scene.add_component(
            id,
            box_body(Vec3::new(0.4, 1.0, 0.4), self.position, 1.0)
                .with_owner(id)
                .with_filter(CollisionLayers::ENEMY, CollisionLayers::ALL),
        );
        Ok(id)
    }
}

/// Static level geometry backed by a triangle-mesh collider
pub struct Floor;

impl EntityBlueprint for Floor {
    fn name(&self) -> &str {
        "floor"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let floor_mesh = mesh(vitals, "floor")?;
        let lit = shader(vitals, "lit")?;

        let id = vitals.scene.generate_entity();
        let mut material = MaterialComponent::default();
        material.shininess = 128.0;

        let mut body = fixed_mesh_body(floor_mesh, Vec3::zeros()).with_owner(id);
        body.friction = 0.4;

        vitals.scene.add_component(id, ModelComponent::new(floor_mesh));
        vitals.scene.add_component(id, LitShader::new(lit));
        vitals.scene.add_component(id, material);
        vitals.scene.add_component(id, body);
        Ok(id)
    }
}

/// A static trigger volume that requests a scene advance when touched
pub struct TriggerCube {
    /// Volume center
    pub position: Vec3,
}

impl EntityBlueprint for TriggerCube {
    fn name(&self) -> &str {
        "trigger cube"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let cube_mesh = mesh(vitals, "cube")?;
        let lit = shader(vitals, "lit")?;

        let id = vitals.scene.generate_entity();
        let mut body = box_body(Vec3::new(1.0, 1.0, 1.0), self.position, 0.0)
            .with_owner(id)
            .as_trigger()
            .with_filter(CollisionLayers::TRIGGER, CollisionLayers::PLAYER);
        body.restitution = 0.1;

        vitals.scene.add_component(id, ModelComponent::new(cube_mesh));
        vitals.scene.add_component(id, LitShader::new(lit));
        vitals.scene.add_component(id, MaterialComponent::default());
        vitals.scene.add_component(id, body);
        Ok(id)
    }
}

/// The light rig: one directional sun entity, a handful of scattered point
/// lights, and the sky box
pub struct LightRig;

impl EntityBlueprint for LightRig {
    fn name(&self) -> &str {
        "light rig"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let sky = shader(vitals, "sky-box")?;
        let cube_map = vitals
            .assets
            .cube_map("skybox")
            .ok_or_else(|| ConstructionError::MissingAsset("skybox".to_owned()))?;

        let id = vitals.scene.generate_entity();
        let mut sun = DirectionalLight::default();
        sun.diffuse = Vec3::new(0.8, 0.83, 0.86);
        sun.specular = Vec3::new(1.0, 1.0, 1.0);
        sun.direction = Vec3::new(0.0, -1.0, 0.0);
        sun.ambient = Vec3::new(0.1, 0.1, 0.1);
        vitals.scene.add_component(id, sun);
        vitals.scene.add_component(id, SkyBoxComponent { cube_map });
        vitals
            .scene
            .add_component(id, UnlitShader::new(sky, ShaderKind::Default));

        // One kind per entity, so each point light gets its own entity.
        let mut rng = rand::thread_rng();
        for _ in 0..vitals.settings.lights_per_entity {
            let lamp = vitals.scene.generate_entity();
            let mut light = PointLight::at(Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(7.0..10.0),
                25.0 + rng.gen_range(-10.0..10.0),
            ));
            light.constant = 1.0;
            light.linear = 0.45;
            light.quadratic = 0.0075;
            light.ambient = Vec3::new(0.45, 0.45, 0.5);
            light.diffuse = Vec3::new(0.55, 0.55, 0.6);
            light.specular = Vec3::new(0.7, 0.6, 0.5);
            vitals.scene.add_component(lamp, light);
        }
        Ok(id)
    }
}

/// A decorative particle fountain
pub struct Fountain;

impl EntityBlueprint for Fountain {
    fn name(&self) -> &str {
        "fountain"
    }

    fn spawn(&self, vitals: &mut EntityVitals<'_>) -> Result<EntityId, ConstructionError> {
        let particle = shader(vitals, "particle")?;
        let texture = vitals
            .assets
            .texture("fluff-particle")
            .ok_or_else(|| ConstructionError::MissingAsset("fluff-particle".to_owned()))?;

        let id = vitals.scene.generate_entity();
        let mut emitter =
            ParticleEmitterComponent::fountain(texture, Vec3::new(42.0, 8.0, -30.0));
        emitter.particles_per_second = 1000.0;
        emitter.start_scale = 0.1;
        emitter.weight = 1.0;
        emitter.particle_lifetime = 2.0;
        emitter.color = Vec4::new(0.4, 0.6, 1.0, 0.4);

        vitals.scene.add_component(id, emitter);
        vitals
            .scene
            .add_component(id, UnlitShader::new(particle, ShaderKind::Particle));
        Ok(id)
    }
}

/// Static body wrapping a catalog mesh's triangles
fn fixed_mesh_body(mesh: MeshHandle, position: Vec3) -> CollisionBody {
    CollisionBody::fixed(
        CollisionShape::TriangleMesh { mesh },
        Transform::from_position(position),
    )
}
