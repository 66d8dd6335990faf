//! Spectrum amplitude → visual targets for one entity.

use super::color::Hsba;
use crate::params::sketch_constants::{
    SIZE_MAX_AT_FULL_SENSITIVITY, SIZE_MIN, SPECTRUM_MAX, TARGET_BRIGHTNESS, TARGET_SATURATION,
    Z_EXTENT,
};
use crate::params::SketchConfig;

/// Affine map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Not clamped, and the output range may be inverted (`out_min > out_max`).
/// A degenerate input range maps everything to the middle of the output.
pub fn linear_map(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return (out_min + out_max) / 2.0;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Targets for one entity in one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Targets {
    pub size: f32,
    pub hue: f32,
    pub alpha: f32,
    pub z: f32,
}

impl Targets {
    /// Target color at fixed saturation and brightness
    pub fn color(&self) -> Hsba {
        Hsba::new(self.hue, TARGET_SATURATION, TARGET_BRIGHTNESS, self.alpha)
    }
}

/// Size range upper bound scales with sensitivity; below 0.1 the range
/// inverts but stays within [0, 10]
pub fn target_size(amplitude: f32, sensitivity: f32) -> f32 {
    linear_map(
        amplitude,
        0.0,
        SPECTRUM_MAX,
        SIZE_MIN,
        SIZE_MAX_AT_FULL_SENSITIVITY * sensitivity,
    )
}

pub fn target_hue(amplitude: f32, hue_range: f32) -> f32 {
    linear_map(amplitude, 0.0, SPECTRUM_MAX, 0.0, hue_range)
}

pub fn target_alpha(alpha_on: bool, low_alpha: f32) -> f32 {
    if alpha_on {
        low_alpha
    } else {
        1.0
    }
}

/// Noise sample in [0, 1] → z in [-200, 200]
pub fn target_z(noise_sample: f32) -> f32 {
    linear_map(noise_sample, 0.0, 1.0, -Z_EXTENT, Z_EXTENT)
}

/// Map one amplitude and noise sample to all targets.
///
/// `config` is expected to be sanitized; the amplitude is clamped to [0, 255].
pub fn map_targets(
    amplitude: f32,
    noise_sample: f32,
    config: &SketchConfig,
    low_alpha: f32,
) -> Targets {
    let amplitude = amplitude.clamp(0.0, SPECTRUM_MAX);
    Targets {
        size: target_size(amplitude, config.sensitivity),
        hue: target_hue(amplitude, config.hue_range),
        alpha: target_alpha(config.alpha_on, low_alpha),
        z: target_z(noise_sample),
    }
}
