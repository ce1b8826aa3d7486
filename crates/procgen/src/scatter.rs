//! Rejection-sampling ("dart throwing") scatter placement.
//!
//! Draw uniform candidates in a square, reject any inside the exclusion
//! zone or closer than the minimum separation to an accepted point, and
//! stop once the requested count is reached or the attempt budget runs out.
//! Running out of budget is a normal outcome: callers get a smaller set and
//! proceed with it. The distance check is a linear scan; at the scales used
//! here (tens to a few hundred items) a spatial grid would not pay for
//! itself.

use glam::Vec2;
use rand::Rng;

/// Candidate attempts allowed per requested item before giving up.
pub const ATTEMPTS_PER_ITEM: usize = 80;

/// Circular keep-out region (e.g. the vehicle spawn clearing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone {
    pub center: Vec2,
    pub radius: f32,
}

impl ExclusionZone {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Radius 0 disables the zone entirely.
    pub fn contains(&self, point: Vec2) -> bool {
        self.radius > 0.0 && point.distance_squared(self.center) < self.radius * self.radius
    }
}

/// One scatter request: how many points, over what square, how far apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    /// Requested number of points.
    pub count: usize,
    /// Points are drawn uniformly from `[-half_extent, half_extent]^2`.
    pub half_extent: f32,
    /// Minimum pairwise distance between accepted points. Zero degenerates
    /// to unconstrained uniform placement.
    pub min_separation: f32,
    /// Optional keep-out region.
    pub exclusion: Option<ExclusionZone>,
}

impl ScatterSpec {
    pub fn new(count: usize, half_extent: f32, min_separation: f32) -> Self {
        Self {
            count,
            half_extent,
            min_separation,
            exclusion: None,
        }
    }

    pub fn with_exclusion(mut self, center: Vec2, radius: f32) -> Self {
        self.exclusion = Some(ExclusionZone::new(center, radius));
        self
    }

    /// Run rejection sampling and return the accepted points. The result may
    /// be shorter than `count` when the attempt budget is exhausted;
    /// under-fulfillment is not an error.
    pub fn place(&self, rng: &mut impl Rng) -> Vec<Vec2> {
        let mut accepted: Vec<Vec2> = Vec::with_capacity(self.count);
        let budget = self.count * ATTEMPTS_PER_ITEM;
        let min_sep_sq = self.min_separation * self.min_separation;

        let mut attempts = 0;
        while accepted.len() < self.count && attempts < budget {
            attempts += 1;
            let candidate = Vec2::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * self.half_extent,
                (rng.gen::<f32>() * 2.0 - 1.0) * self.half_extent,
            );

            if let Some(zone) = &self.exclusion {
                if zone.contains(candidate) {
                    continue;
                }
            }
            if accepted
                .iter()
                .any(|p| p.distance_squared(candidate) < min_sep_sq)
            {
                continue;
            }
            accepted.push(candidate);
        }

        if accepted.len() < self.count {
            log::debug!(
                "scatter under-filled: {}/{} points after {} attempts (half_extent {}, min_separation {})",
                accepted.len(),
                self.count,
                attempts,
                self.half_extent,
                self.min_separation,
            );
        }
        accepted
    }
}
