//! Procedural generation for the safari world: seeded randomness, the
//! terrain height field, and scatter placement of scenery.

pub mod heightfield;
pub mod rng;
pub mod scatter;

pub use heightfield::*;
pub use rng::*;
pub use scatter::*;
