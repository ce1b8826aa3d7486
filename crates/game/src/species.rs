//! Species parameter tables.
//!
//! A [`Species`] tag selects a table of sampling ranges; every per-agent
//! value (orbit radius, angular speed, scale, altitude) is drawn once at
//! spawn from these `(min, max)` ranges. Behavior differences between
//! species are entirely data-driven; no dispatch beyond the match below.

use rand::Rng;

/// Wildlife species present in the safari.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Elephant,
    Giraffe,
    Zebra,
    Gazelle,
    Flamingo,
    Vulture,
}

/// Spawn-time sampling ranges and flags for one species.
#[derive(Debug, Clone)]
pub struct SpeciesParams {
    /// Asset name in the catalog (bounding-box lookup).
    pub asset: &'static str,
    /// Orbit radius around the herd anchor, world units.
    pub orbit_radius: (f32, f32),
    /// Angular speed along the orbit, rad/s.
    pub angular_speed: (f32, f32),
    /// Bound on the heading drift random walk, radians.
    pub drift_max: f32,
    /// Flyers hold an altitude band above the terrain instead of standing
    /// on it.
    pub flying: bool,
    /// Altitude band above ground for flyers (ignored for ground species).
    pub altitude_band: (f32, f32),
    /// Fixed vertical offset applied on top of ground/altitude.
    pub vertical_offset: f32,
    /// Uniform model scale range.
    pub scale: (f32, f32),
    /// Population: agents spawned for this species, each at its own anchor.
    pub herd_size: usize,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Elephant,
        Species::Giraffe,
        Species::Zebra,
        Species::Gazelle,
        Species::Flamingo,
        Species::Vulture,
    ];

    /// Parameter table for this species.
    pub fn params(self) -> SpeciesParams {
        match self {
            Species::Elephant => SpeciesParams {
                asset: "elephant",
                orbit_radius: (6.0, 12.0),
                angular_speed: (0.05, 0.12),
                drift_max: 0.25,
                flying: false,
                altitude_band: (0.0, 0.0),
                vertical_offset: 0.05,
                scale: (1.6, 2.2),
                herd_size: 4,
            },
            Species::Giraffe => SpeciesParams {
                asset: "giraffe",
                orbit_radius: (8.0, 16.0),
                angular_speed: (0.08, 0.16),
                drift_max: 0.3,
                flying: false,
                altitude_band: (0.0, 0.0),
                vertical_offset: 0.0,
                scale: (1.4, 1.8),
                herd_size: 3,
            },
            Species::Zebra => SpeciesParams {
                asset: "zebra",
                orbit_radius: (5.0, 12.0),
                angular_speed: (0.15, 0.35),
                drift_max: 0.4,
                flying: false,
                altitude_band: (0.0, 0.0),
                vertical_offset: 0.0,
                scale: (0.9, 1.1),
                herd_size: 6,
            },
            Species::Gazelle => SpeciesParams {
                asset: "gazelle",
                orbit_radius: (4.0, 10.0),
                angular_speed: (0.25, 0.5),
                drift_max: 0.5,
                flying: false,
                altitude_band: (0.0, 0.0),
                vertical_offset: 0.0,
                scale: (0.7, 0.9),
                herd_size: 8,
            },
            Species::Flamingo => SpeciesParams {
                asset: "flamingo",
                orbit_radius: (6.0, 14.0),
                angular_speed: (0.2, 0.45),
                drift_max: 0.35,
                flying: true,
                altitude_band: (4.0, 7.0),
                vertical_offset: 0.0,
                scale: (0.8, 1.0),
                herd_size: 6,
            },
            Species::Vulture => SpeciesParams {
                asset: "vulture",
                orbit_radius: (10.0, 22.0),
                angular_speed: (0.3, 0.6),
                drift_max: 0.3,
                flying: true,
                altitude_band: (9.0, 14.0),
                vertical_offset: 0.0,
                scale: (0.9, 1.2),
                herd_size: 3,
            },
        }
    }
}

/// Draw a value uniformly from an inclusive-exclusive `(min, max)` range.
pub fn sample_range(range: (f32, f32), rng: &mut impl Rng) -> f32 {
    range.0 + (range.1 - range.0) * rng.gen::<f32>()
}
