//! Terrain elevation as a closed-form height field.
//!
//! One pure function is the single ground truth for "the ground": the
//! ground-mesh layer, scatter placement, and wildlife all sample the same
//! formula, so rendering and simulation can never disagree about elevation.

/// Sinusoidal terrain height field.
///
/// Elevation is the sum of three fixed sine/cosine terms:
///
/// ```text
/// height(x, z) = rolling_amplitude * sin(rolling_frequency * x) * cos(rolling_frequency * z)
///              + ridge_amplitude   * sin(ridge_frequency * x)
///              + swell_amplitude   * cos(swell_frequency * z)
/// ```
///
/// With the default terms, `height(0, 0) == swell_amplitude == 0.8`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    /// Broad rolling hills over both axes.
    pub rolling_amplitude: f32,
    pub rolling_frequency: f32,
    /// Shorter ridges along X.
    pub ridge_amplitude: f32,
    pub ridge_frequency: f32,
    /// Long swells along Z.
    pub swell_amplitude: f32,
    pub swell_frequency: f32,
}

impl Default for HeightField {
    fn default() -> Self {
        Self {
            rolling_amplitude: 2.0,
            rolling_frequency: 0.04,
            ridge_amplitude: 0.5,
            ridge_frequency: 0.10,
            swell_amplitude: 0.8,
            swell_frequency: 0.08,
        }
    }
}

impl HeightField {
    /// Elevation at a world position. Pure and stateless.
    pub fn height(&self, x: f32, z: f32) -> f32 {
        self.rolling_amplitude
            * (self.rolling_frequency * x).sin()
            * (self.rolling_frequency * z).cos()
            + self.ridge_amplitude * (self.ridge_frequency * x).sin()
            + self.swell_amplitude * (self.swell_frequency * z).cos()
    }

    /// Upper bound on `|height|`: the sum of the absolute amplitudes.
    pub fn amplitude_bound(&self) -> f32 {
        self.rolling_amplitude.abs() + self.ridge_amplitude.abs() + self.swell_amplitude.abs()
    }

    /// Upper bound on the per-axis gradient magnitude. Adjacent samples a
    /// distance `step` apart differ by at most `slope_bound() * step`.
    pub fn slope_bound(&self) -> f32 {
        let rolling = (self.rolling_amplitude * self.rolling_frequency).abs();
        let dx = rolling + (self.ridge_amplitude * self.ridge_frequency).abs();
        let dz = rolling + (self.swell_amplitude * self.swell_frequency).abs();
        dx.max(dz)
    }

    /// Sample a centered `resolution x resolution` grid spanning `size`
    /// world units per side, row-major with Z as the row axis. This is the
    /// hand-off for a ground-mesh layer; every value is exactly
    /// [`HeightField::height`] at that vertex.
    pub fn heightmap(&self, resolution: u32, size: f32) -> Vec<f32> {
        let res = resolution as usize;
        let step = size / resolution.saturating_sub(1).max(1) as f32;
        let half = size / 2.0;
        let mut heights = Vec::with_capacity(res * res);
        for z in 0..res {
            for x in 0..res {
                let world_x = x as f32 * step - half;
                let world_z = z as f32 * step - half;
                heights.push(self.height(world_x, world_z));
            }
        }
        heights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `height(0, 0)` must equal the constant the formula reduces to: the
    /// sine terms vanish and only the swell cosine remains.
    #[test]
    fn origin_height_matches_formula_constant() {
        let field = HeightField::default();
        assert_eq!(field.height(0.0, 0.0), field.swell_amplitude);
        assert!((field.height(0.0, 0.0) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn height_is_bounded_by_amplitude_sum() {
        let field = HeightField::default();
        let bound = field.amplitude_bound();
        for iz in -60..60 {
            for ix in -60..60 {
                let h = field.height(ix as f32 * 1.7, iz as f32 * 1.7);
                assert!(h.abs() <= bound, "height {} exceeds bound {}", h, bound);
            }
        }
    }

    #[test]
    fn adjacent_samples_are_continuous() {
        let field = HeightField::default();
        let step = 0.5;
        let max_diff = field.slope_bound() * step + 1e-4;
        for iz in -40..40 {
            for ix in -40..40 {
                let x = ix as f32 * step;
                let z = iz as f32 * step;
                let h = field.height(x, z);
                assert!((field.height(x + step, z) - h).abs() <= max_diff);
                assert!((field.height(x, z + step) - h).abs() <= max_diff);
            }
        }
    }

    #[test]
    fn heightmap_matches_point_samples() {
        let field = HeightField::default();
        let resolution = 17;
        let size = 64.0;
        let heights = field.heightmap(resolution, size);
        assert_eq!(heights.len(), (resolution * resolution) as usize);

        let step = size / (resolution - 1) as f32;
        let half = size / 2.0;
        // Spot-check corners and center against the pure function.
        for &(x, z) in &[(0usize, 0usize), (16, 0), (0, 16), (16, 16), (8, 8)] {
            let world_x = x as f32 * step - half;
            let world_z = z as f32 * step - half;
            let idx = z * resolution as usize + x;
            assert_eq!(heights[idx], field.height(world_x, world_z));
        }
    }
}
