//! Coherent noise driving each entity's depth wander.

use noise::{NoiseFn, Perlin};

/// Smooth, seeded 1D noise in [0, 1]
pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    /// Create new noise field with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample the field at `phase`.
    ///
    /// Perlin output in [-1, 1] is rescaled to [0, 1]. The second coordinate
    /// is offset from the lattice so integer phases do not all return 0.5.
    pub fn sample(&self, phase: f64) -> f32 {
        let raw = self.perlin.get([phase, 0.5]) as f32;
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
