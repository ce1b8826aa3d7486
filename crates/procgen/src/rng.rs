//! Deterministic pseudo-random stream.
//!
//! **Seed-based determinism:** all world layout (scatter placement, spawn
//! parameters) is drawn from a [`SeededRandom`] so the same world seed
//! always produces the same safari, regardless of host frame timing.

use rand::{Error, RngCore, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// Splitmix64 generator: a single `u64` of opaque state advanced per draw.
/// Same seed always gives the same sequence; distinct seeds diverge
/// immediately. Implements [`RngCore`]/[`SeedableRng`] so the full `rand`
/// API (`gen`, `gen_range`, ...) runs on top of it.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn advance(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Next float in `[0, 1)` (24 bits of mantissa).
    pub fn next_f32(&mut self) -> f32 {
        (self.advance() >> 40) as f32 * (1.0 / (1u64 << 24) as f32)
    }

    /// Derive an independent child stream. The parent advances by one draw,
    /// so repeated forks yield distinct children.
    pub fn fork(&mut self) -> SeededRandom {
        SeededRandom::new(self.advance() ^ GOLDEN_GAMMA)
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        (self.advance() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRandom {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
