//! Safari world simulation: wildlife steering, vehicle control, exhaust
//! particles, and the scene composer that wires them to one `tick(dt)`.
//!
//! The crate has no dependency on any render-loop API: a host registers a
//! frame callback wherever it likes, forwards input events, and calls
//! [`SafariScene::tick`] once per frame with the frame's delta time.

pub mod config;
pub mod exhaust;
pub mod scene;
pub mod species;
pub mod vehicle;
pub mod wildlife;

pub use config::WorldConfig;
pub use exhaust::{ExhaustPool, Particle, MAX_PUFFS};
pub use scene::{DecorKind, PlacedItem, SafariScene};
pub use species::{Species, SpeciesParams};
pub use vehicle::{ChaseCamera, VehicleController, VehicleState};
pub use wildlife::AgentState;
