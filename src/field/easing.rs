//! Fixed-rate easing of per-entity state toward per-frame targets.

use super::color::Hsba;
use crate::params::sketch_constants::EASE_FACTOR;

/// Linear interpolation between `from` and `to`
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Quantities that can be eased toward a target
pub trait Ease: Copy {
    /// One easing step: move `EASE_FACTOR` of the remaining gap toward `target`
    fn ease_toward(self, target: Self) -> Self;
}

impl Ease for f32 {
    fn ease_toward(self, target: f32) -> f32 {
        lerp(self, target, EASE_FACTOR)
    }
}

impl Ease for Hsba {
    fn ease_toward(self, target: Hsba) -> Hsba {
        self.lerp(target, EASE_FACTOR)
    }
}

/// Ease `previous` toward `target`, store the result back, and return it
pub fn ease_in_place<T: Ease>(previous: &mut T, target: T) -> T {
    *previous = previous.ease_toward(target);
    *previous
}
