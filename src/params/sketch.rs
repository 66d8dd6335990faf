//! Sketch configuration: the externally-driven knobs sampled once per frame.

use serde::{Deserialize, Serialize};

use super::sketch_constants::{MAX_GRID_DIM, TEXTURE_COUNT};

/// Which of the two sketches is running
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Fixed row of five spheres, no collisions, untextured
    Row,

    /// Resizable grid with collisions, textures and a drifting backdrop
    #[default]
    Grid,
}

impl Variant {
    /// Alpha used for entities while the alpha toggle is on
    /// (row: 0.4, grid: 0.2)
    pub fn low_alpha(self) -> f32 {
        match self {
            Variant::Row => 0.4,
            Variant::Grid => 0.2,
        }
    }

    /// Whether the pairwise collision resolver runs
    pub fn collides(self) -> bool {
        matches!(self, Variant::Grid)
    }

    /// Whether spheres are drawn with the selected texture
    pub fn textured(self) -> bool {
        matches!(self, Variant::Grid)
    }

    /// Number of entities allocated at startup
    pub fn capacity(self) -> usize {
        match self {
            Variant::Row => super::sketch_constants::ROW_COUNT,
            Variant::Grid => MAX_GRID_DIM * MAX_GRID_DIM,
        }
    }
}

/// Per-frame configuration snapshot.
///
/// Ranges mirror the original slider bounds. Values outside them are clamped
/// by [`SketchConfig::sanitized`] rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Volume sensitivity, scales the upper bound of the size range [0, 1]
    pub sensitivity: f32,

    /// Upper bound of the hue mapping (degrees, [0, 360])
    pub hue_range: f32,

    /// Render entities translucent
    pub alpha_on: bool,

    /// Grid columns [1, 10] (grid variant only)
    pub grid_cols: usize,

    /// Grid rows [1, 10] (grid variant only)
    pub grid_rows: usize,

    /// Selected sphere texture [0, 6)
    pub texture_index: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            hue_range: 180.0, // middle, so the range can go both ways
            alpha_on: true,
            grid_cols: 5,
            grid_rows: 5,
            texture_index: 0,
        }
    }
}

impl SketchConfig {
    /// Copy with every field clamped into its valid range
    pub fn sanitized(&self) -> Self {
        Self {
            sensitivity: clamp_or(self.sensitivity, 0.0, 1.0, 0.0),
            hue_range: clamp_or(self.hue_range, 0.0, 360.0, 0.0),
            alpha_on: self.alpha_on,
            grid_cols: self.grid_cols.clamp(1, MAX_GRID_DIM),
            grid_rows: self.grid_rows.clamp(1, MAX_GRID_DIM),
            texture_index: self.texture_index.min(TEXTURE_COUNT - 1),
        }
    }
}

/// Clamp, mapping NaN to `fallback`
fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_slider_positions() {
        let config = SketchConfig::default();
        assert_eq!(config.sensitivity, 0.5);
        assert_eq!(config.hue_range, 180.0);
        assert!(config.alpha_on);
        assert_eq!((config.grid_cols, config.grid_rows), (5, 5));
    }

    #[test]
    fn test_sanitized_clamps_out_of_range_values() {
        let config = SketchConfig {
            sensitivity: 1.7,
            hue_range: -20.0,
            alpha_on: false,
            grid_cols: 0,
            grid_rows: 42,
            texture_index: 9,
        }
        .sanitized();

        assert_eq!(config.sensitivity, 1.0);
        assert_eq!(config.hue_range, 0.0);
        assert_eq!(config.grid_cols, 1);
        assert_eq!(config.grid_rows, MAX_GRID_DIM);
        assert_eq!(config.texture_index, TEXTURE_COUNT - 1);
    }

    #[test]
    fn test_sanitized_replaces_nan() {
        let config = SketchConfig {
            sensitivity: f32::NAN,
            ..SketchConfig::default()
        }
        .sanitized();
        assert_eq!(config.sensitivity, 0.0);
    }

    #[test]
    fn test_variant_profiles() {
        assert_eq!(Variant::Row.low_alpha(), 0.4);
        assert_eq!(Variant::Grid.low_alpha(), 0.2);
        assert!(!Variant::Row.collides());
        assert!(Variant::Grid.collides());
        assert_eq!(Variant::Row.capacity(), 5);
        assert_eq!(Variant::Grid.capacity(), 100);
    }
}
