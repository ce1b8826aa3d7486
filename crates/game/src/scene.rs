//! Scene composer: one-shot world setup, then a per-frame tick.
//!
//! Setup resolves the seed, scatters scenery, spawns wildlife herds and the
//! vehicle; after that the scene only advances through [`SafariScene::tick`].
//! There is no terminal state; teardown is dropping the scene.

use engine_core::{AssetCatalog, Transform, World};
use glam::{Vec2, Vec3};
use hecs::Entity;
use procgen::{HeightField, ScatterSpec, SeededRandom};
use rand::Rng;

use crate::config::WorldConfig;
use crate::exhaust::ExhaustPool;
use crate::species::Species;
use crate::vehicle::VehicleController;
use crate::wildlife::AgentState;

/// Scenery categories scattered at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    Tree,
    Rock,
    Shrub,
    Grass,
}

impl DecorKind {
    pub const ALL: [DecorKind; 4] = [
        DecorKind::Tree,
        DecorKind::Rock,
        DecorKind::Shrub,
        DecorKind::Grass,
    ];

    pub fn asset_name(self) -> &'static str {
        match self {
            DecorKind::Tree => "acacia",
            DecorKind::Rock => "boulder",
            DecorKind::Shrub => "shrub",
            DecorKind::Grass => "grass_tuft",
        }
    }

    fn min_separation(self) -> f32 {
        match self {
            DecorKind::Tree => 6.0,
            DecorKind::Rock => 4.0,
            DecorKind::Shrub => 2.5,
            DecorKind::Grass => 0.0,
        }
    }

    fn scale_range(self) -> (f32, f32) {
        match self {
            DecorKind::Tree => (0.8, 1.5),
            DecorKind::Rock => (0.5, 1.6),
            DecorKind::Shrub => (0.6, 1.2),
            DecorKind::Grass => (0.7, 1.3),
        }
    }

    fn count(self, config: &WorldConfig) -> usize {
        match self {
            DecorKind::Tree => config.tree_count,
            DecorKind::Rock => config.rock_count,
            DecorKind::Shrub => config.shrub_count,
            DecorKind::Grass => config.grass_count,
        }
    }
}

/// One resolved scenery item. Immutable once generated; lives for the
/// scene's duration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub kind: DecorKind,
    pub position: Vec3,
    /// Yaw rotation, radians.
    pub rotation: f32,
    pub scale: f32,
}

impl PlacedItem {
    /// Pose for the renderer.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: glam::Quat::from_rotation_y(self.rotation),
            scale: Vec3::splat(self.scale),
        }
    }
}

/// The composed safari world.
pub struct SafariScene {
    pub terrain: HeightField,
    pub decorations: Vec<PlacedItem>,
    /// Wildlife entities: `(Transform, AgentState)` per agent.
    pub world: World,
    pub vehicle: VehicleController,
    pub exhaust: ExhaustPool,
    /// Seed the world was generated from (either configured or
    /// time-derived).
    pub seed: u64,
    rng: SeededRandom,
}

impl SafariScene {
    /// One-shot setup: seed the rng, scatter every decoration category,
    /// spawn wildlife herds and the vehicle. Assets that failed to load are
    /// skipped with a warning; everything else proceeds.
    pub fn setup(config: &WorldConfig, catalog: &AssetCatalog) -> Self {
        let seed = config.seed.unwrap_or_else(time_seed);
        let mut rng = SeededRandom::new(seed);
        let terrain = HeightField::default();

        let mut decorations = Vec::new();
        for kind in DecorKind::ALL {
            if let Err(e) = catalog.bounds(kind.asset_name()) {
                log::warn!("skipping {:?} decorations: {}", kind, e);
                continue;
            }
            let placer = ScatterSpec::new(kind.count(config), config.half_extent, kind.min_separation())
                .with_exclusion(Vec2::ZERO, config.spawn_clearing_radius);
            for point in placer.place(&mut rng) {
                let (scale_min, scale_max) = kind.scale_range();
                decorations.push(PlacedItem {
                    kind,
                    position: Vec3::new(point.x, terrain.height(point.x, point.y), point.y),
                    rotation: rng.gen::<f32>() * std::f32::consts::TAU,
                    scale: scale_min + rng.gen::<f32>() * (scale_max - scale_min),
                });
            }
        }

        let mut world = World::new();
        for species in Species::ALL {
            let params = species.params();
            let bounds = match catalog.bounds(params.asset) {
                Ok(bounds) => bounds,
                Err(e) => {
                    log::warn!("not simulating {:?}: {}", species, e);
                    continue;
                }
            };
            let anchors = ScatterSpec::new(
                params.herd_size,
                config.half_extent * 0.8,
                config.herd_spacing,
            )
            .with_exclusion(Vec2::ZERO, config.spawn_clearing_radius)
            .place(&mut rng);
            for anchor in anchors {
                let (agent, transform) = AgentState::spawn(species, anchor, bounds, &mut rng);
                world.spawn((transform, agent));
            }
        }

        log::info!(
            "safari setup: seed {}, {} decorations, {} animals",
            seed,
            decorations.len(),
            world.len(),
        );

        Self {
            terrain,
            decorations,
            world,
            vehicle: VehicleController::new(Vec3::ZERO),
            exhaust: ExhaustPool::new(),
            seed,
            rng,
        }
    }

    /// Advance one frame: every agent, then the vehicle and camera, then
    /// the exhaust pool. Synchronous and non-blocking.
    pub fn tick(&mut self, input: &input::InputState, dt: f32) {
        for (_, (transform, agent)) in self.world.query_mut::<(&mut Transform, &mut AgentState)>() {
            agent.update(transform, &self.terrain, &mut self.rng, dt);
        }
        self.vehicle.update(input, dt);
        self.exhaust.update(&self.vehicle.state, &mut self.rng, dt);
    }

    pub fn agent_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Wildlife poses for the renderer, in stable spawn order.
    pub fn wildlife_poses(&self) -> Vec<(Entity, Species, Transform)> {
        let mut poses: Vec<(Entity, Species, Transform)> = self
            .world
            .query::<(&Transform, &AgentState)>()
            .iter()
            .map(|(entity, (transform, agent))| (entity, agent.species, *transform))
            .collect();
        poses.sort_by_key(|(entity, _, _)| entity.id());
        poses
    }
}

/// Fallback seed when the config does not pin one.
fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
