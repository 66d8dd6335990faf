//! Per-entity state carried from frame to frame.

use glam::Vec3;
use rand::{Rng, SeedableRng};

use super::color::Hsba;
use crate::params::sketch_constants::NOISE_PHASE_SPREAD;

/// Everything remembered about one sphere between frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    /// Eased size (unscaled)
    pub size: f32,

    /// Eased z before collision displacement
    pub z: f32,

    /// Offset into the noise field, advanced every frame (f64 so the
    /// per-frame step still registers after days of running)
    pub noise_phase: f64,

    /// Eased color
    pub color: Hsba,

    /// Position after this frame's collision step
    pub position: Vec3,

    /// Collision velocity, damped every frame
    pub velocity: Vec3,
}

impl Entity {
    /// Starting color: saturated red, opaque
    pub const INITIAL_COLOR: Hsba = Hsba::new(0.0, 100.0, 100.0, 1.0);

    pub fn new(noise_phase: f64) -> Self {
        Self {
            size: 0.0,
            z: 0.0,
            noise_phase,
            color: Self::INITIAL_COLOR,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }
}

/// Create `count` entities with independently randomized noise phases
pub fn spawn_entities(count: usize, seed: u64) -> Vec<Entity> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Entity::new(rng.random_range(0.0..NOISE_PHASE_SPREAD)))
        .collect()
}
