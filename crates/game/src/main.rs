//! Headless safari demo: builds the scene and drives it at a fixed step.
//!
//! Stands in for a rendering host: it forwards scripted input, calls
//! `tick` once per frame, and logs what the renderer would be drawing.

use anyhow::Result;
use engine_core::{Aabb, AssetCatalog, Time, TransformRaw, Vec3};
use game::{SafariScene, WorldConfig};
use input::InputState;

fn main() -> Result<()> {
    env_logger::init();

    let config = WorldConfig::load();
    let catalog = demo_catalog();
    let mut scene = SafariScene::setup(&config, &catalog);

    // What a renderer would upload once: decoration instance data.
    let decor_instances: Vec<TransformRaw> = scene
        .decorations
        .iter()
        .map(|item| item.transform().into())
        .collect();
    log::info!("{} static instances staged", decor_instances.len());

    let mut input = InputState::new();
    let mut time = Time::new();

    // Scripted drive: hold forward with a gentle right turn.
    input.process_key_id("w", true);
    input.process_key_id("d", true);

    let dt = time.fixed_timestep_seconds();
    for frame in 0..600u32 {
        input.begin_frame();
        time.update();
        scene.tick(&input, dt);

        if frame % 60 == 0 {
            let vehicle = &scene.vehicle.state;
            log::info!(
                "t={:>4.1}s vehicle=({:>6.1}, {:>6.1}) speed={:>4.1} m/s puffs={:>2} animals={}",
                frame as f32 * dt,
                vehicle.position.x,
                vehicle.position.z,
                vehicle.velocity,
                scene.exhaust.active_count(),
                scene.agent_count(),
            );
        }
    }

    log::info!("done: seed {} reproduces this world", scene.seed);
    Ok(())
}

/// Nominal bounding boxes standing in for the loading layer. A real host
/// registers boxes queried from its loaded models instead.
fn demo_catalog() -> AssetCatalog {
    let mut catalog = AssetCatalog::new();
    let entries: [(&str, Vec3, Vec3); 10] = [
        ("acacia", Vec3::new(-2.5, 0.0, -2.5), Vec3::new(2.5, 6.0, 2.5)),
        ("boulder", Vec3::new(-1.0, -0.2, -1.0), Vec3::new(1.0, 1.2, 1.0)),
        ("shrub", Vec3::new(-0.7, 0.0, -0.7), Vec3::new(0.7, 1.0, 0.7)),
        ("grass_tuft", Vec3::new(-0.3, 0.0, -0.3), Vec3::new(0.3, 0.5, 0.3)),
        ("elephant", Vec3::new(-1.4, -0.05, -2.4), Vec3::new(1.4, 3.2, 2.4)),
        ("giraffe", Vec3::new(-0.8, -0.05, -1.6), Vec3::new(0.8, 4.6, 1.6)),
        ("zebra", Vec3::new(-0.6, -0.05, -1.2), Vec3::new(0.6, 1.6, 1.2)),
        ("gazelle", Vec3::new(-0.4, -0.05, -0.9), Vec3::new(0.4, 1.1, 0.9)),
        ("flamingo", Vec3::new(-0.4, -0.6, -0.5), Vec3::new(0.4, 0.6, 0.5)),
        ("vulture", Vec3::new(-0.9, -0.3, -0.6), Vec3::new(0.9, 0.3, 0.6)),
    ];
    for (name, min, max) in entries {
        catalog.register(name, Aabb::new(min, max));
    }
    catalog
}
