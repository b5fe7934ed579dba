//! Sandbox demo application
//!
//! Drives the scene runtime headlessly: two scenes, a fixed-timestep
//! simulation loop, and a draw-call-counting backend in place of a real
//! graphics device.

mod backend;
mod blueprints;

use backend::HeadlessBackend;
use blueprints::{Enemy, Floor, Fountain, LightRig, Player, TriggerCube};
use scene_engine::config::Config;
use scene_engine::foundation::math::Vec3;
use scene_engine::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Frames the headless demo simulates before exiting
const DEMO_FRAMES: u64 = 600;

fn build_catalog() -> AssetCatalog {
    let mut assets = AssetCatalog::new();
    assets.register_mesh("player");
    assets.register_mesh("enemy");
    assets.register_mesh("floor");
    assets.register_mesh("cube");
    assets.register_shader("animated-lit");
    assets.register_shader("lit");
    assets.register_shader("gui");
    assets.register_shader("sky-box");
    assets.register_shader("particle");
    assets.register_texture("fluff-particle");
    assets.register_cube_map("skybox");
    assets.register_font("courier-new");
    assets
}

fn build_manifests() -> Vec<SceneManifest> {
    vec![
        SceneManifest::new("courtyard")
            .with(LightRig)
            .with(Floor)
            .with(Player)
            .with(Enemy {
                position: Vec3::new(5.0, 10.0, -5.0),
            })
            .with(TriggerCube {
                position: Vec3::new(2.0, 4.0, -2.0),
            })
            .with(Fountain),
        SceneManifest::new("arena")
            .with(LightRig)
            .with(Floor)
            .with(Player)
            .with(Enemy {
                position: Vec3::new(8.0, 10.0, 0.0),
            })
            .with(Enemy {
                position: Vec3::new(-8.0, 10.0, 0.0),
            }),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting sandbox demo");

    let settings = match Settings::load_from_file("settings.toml") {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("using default settings: {}", err);
            Settings::default()
        }
    };
    let fixed_timestep = settings.fixed_timestep;

    let mut controller = SceneController::new(settings, build_catalog(), build_manifests());
    let clock = Rc::new(RefCell::new(Timer::new()));
    let messages = Rc::new(RefCell::new(Messenger::new()));
    controller.initialize(clock.clone(), messages.clone())?;

    let mut backend = HeadlessBackend::new();
    let mut accumulator = 0.0_f32;

    for frame in 0..DEMO_FRAMES {
        clock.borrow_mut().update();
        accumulator += clock.borrow().delta_time();

        while accumulator >= fixed_timestep {
            controller.fixed_update();
            accumulator -= fixed_timestep;
        }
        controller.update();

        controller.render(RenderPass::DirectionalDepth, &mut backend);
        controller.render(RenderPass::Normal, &mut backend);

        // Halfway through, flip to the arena the way a level trigger would.
        if frame == DEMO_FRAMES / 2 {
            messages
                .borrow_mut()
                .post(EngineEvent::SceneAdvanceRequested);
        }
    }

    log::info!(
        "sandbox demo finished: {} passes, {} draw calls, final scene {}",
        backend.passes(),
        backend.draw_calls(),
        controller.current_scene_index()
    );
    Ok(())
}
