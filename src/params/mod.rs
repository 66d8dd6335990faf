//! Parameter definitions with documented units and ranges.
//!
//! All magic numbers from the sketches are extracted here with:
//! - Units (pixels, degrees, seconds, Hz)
//! - Documented ranges and meanings
//! - Type safety where possible

mod audio;
mod file;
mod render;
mod sketch;

// Re-export all types
pub use audio::FFTConfig;
pub use file::SketchFile;
pub use render::RenderConfig;
pub use sketch::{SketchConfig, Variant};

/// Fixed constants of the per-frame mapping (compile-time)
pub mod sketch_constants {
    /// Blend factor for all eased quantities (size, z, color)
    pub const EASE_FACTOR: f32 = 0.1;

    /// Lower bound of the target size range
    pub const SIZE_MIN: f32 = 10.0;

    /// Upper bound of the target size range at sensitivity 1.0
    pub const SIZE_MAX_AT_FULL_SENSITIVITY: f32 = 100.0;

    /// Largest spectrum amplitude
    pub const SPECTRUM_MAX: f32 = 255.0;

    /// Half-extent of the z range (pixels), targets span [-Z_EXTENT, Z_EXTENT]
    pub const Z_EXTENT: f32 = 200.0;

    /// Noise phase advance per frame
    pub const NOISE_STEP: f64 = 0.01;

    /// Initial noise phases are drawn from [0, NOISE_PHASE_SPREAD)
    pub const NOISE_PHASE_SPREAD: f64 = 1000.0;

    /// Y rotation per frame (radians)
    pub const ROTATION_STEP: f64 = 0.01;

    /// Fraction of min(width, height) per unit of entity size
    pub const SCALE_PER_PIXEL: f32 = 0.005;

    /// Fraction of the overlap converted into a velocity impulse
    pub const COLLISION_STIFFNESS: f32 = 0.05;

    /// Velocity multiplier applied after each integration step
    pub const VELOCITY_DAMPING: f32 = 0.9;

    /// Target saturation and brightness of entity colors (percent)
    pub const TARGET_SATURATION: f32 = 100.0;
    pub const TARGET_BRIGHTNESS: f32 = 80.0;

    /// Brightness of the per-entity directional light (percent)
    pub const LIGHT_BRIGHTNESS: f32 = 70.0;

    /// Seconds after the first frame before spheres become cubes
    pub const CUBE_AFTER_S: f32 = 60.0;

    /// Entities in the row variant
    pub const ROW_COUNT: usize = 5;

    /// Largest grid dimension (columns or rows)
    pub const MAX_GRID_DIM: usize = 10;

    /// Number of selectable sphere textures
    pub const TEXTURE_COUNT: usize = 6;

    /// Backdrop hue drift per frame (degrees, grid variant)
    pub const BACKDROP_HUE_STEP: f32 = 0.1;
}
