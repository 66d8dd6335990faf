//! Keyboard controls standing in for the sketches' sliders and buttons.

use rand::Rng;
use winit::keyboard::KeyCode;

use crate::params::sketch_constants::{MAX_GRID_DIM, TEXTURE_COUNT};
use crate::params::SketchConfig;

/// Sensitivity change per key press
const SENSITIVITY_STEP: f32 = 0.05;

/// Hue range change per key press (degrees)
const HUE_STEP: f32 = 10.0;

/// One user adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    SensitivityUp,
    SensitivityDown,
    HueRangeUp,
    HueRangeDown,
    ToggleAlpha,
    RandomTexture,
    ColumnsUp,
    ColumnsDown,
    RowsUp,
    RowsDown,
}

impl ControlAction {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let action = match key {
            KeyCode::ArrowUp => Self::SensitivityUp,
            KeyCode::ArrowDown => Self::SensitivityDown,
            KeyCode::ArrowRight => Self::HueRangeUp,
            KeyCode::ArrowLeft => Self::HueRangeDown,
            KeyCode::KeyA => Self::ToggleAlpha,
            KeyCode::KeyT => Self::RandomTexture,
            KeyCode::BracketRight => Self::ColumnsUp,
            KeyCode::BracketLeft => Self::ColumnsDown,
            KeyCode::Equal => Self::RowsUp,
            KeyCode::Minus => Self::RowsDown,
            _ => return None,
        };
        Some(action)
    }
}

/// Apply `action` to `config`, keeping every field in range
pub fn apply<R: Rng + ?Sized>(config: &mut SketchConfig, action: ControlAction, rng: &mut R) {
    match action {
        ControlAction::SensitivityUp => {
            config.sensitivity = (config.sensitivity + SENSITIVITY_STEP).min(1.0)
        }
        ControlAction::SensitivityDown => {
            config.sensitivity = (config.sensitivity - SENSITIVITY_STEP).max(0.0)
        }
        ControlAction::HueRangeUp => config.hue_range = (config.hue_range + HUE_STEP).min(360.0),
        ControlAction::HueRangeDown => config.hue_range = (config.hue_range - HUE_STEP).max(0.0),
        ControlAction::ToggleAlpha => config.alpha_on = !config.alpha_on,
        ControlAction::RandomTexture => config.texture_index = rng.random_range(0..TEXTURE_COUNT),
        ControlAction::ColumnsUp => config.grid_cols = (config.grid_cols + 1).min(MAX_GRID_DIM),
        ControlAction::ColumnsDown => config.grid_cols = config.grid_cols.saturating_sub(1).max(1),
        ControlAction::RowsUp => config.grid_rows = (config.grid_rows + 1).min(MAX_GRID_DIM),
        ControlAction::RowsDown => config.grid_rows = config.grid_rows.saturating_sub(1).max(1),
    }
    log::debug!("{:?} -> {:?}", action, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(0)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            ControlAction::from_key(KeyCode::KeyA),
            Some(ControlAction::ToggleAlpha)
        );
        assert_eq!(
            ControlAction::from_key(KeyCode::BracketRight),
            Some(ControlAction::ColumnsUp)
        );
        assert_eq!(ControlAction::from_key(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_sensitivity_is_clamped() {
        let mut config = SketchConfig::default();
        for _ in 0..30 {
            apply(&mut config, ControlAction::SensitivityUp, &mut rng());
        }
        assert_eq!(config.sensitivity, 1.0);
        for _ in 0..30 {
            apply(&mut config, ControlAction::SensitivityDown, &mut rng());
        }
        assert_eq!(config.sensitivity, 0.0);
    }

    #[test]
    fn test_hue_range_is_clamped() {
        let mut config = SketchConfig::default();
        for _ in 0..40 {
            apply(&mut config, ControlAction::HueRangeUp, &mut rng());
        }
        assert_eq!(config.hue_range, 360.0);
        for _ in 0..40 {
            apply(&mut config, ControlAction::HueRangeDown, &mut rng());
        }
        assert_eq!(config.hue_range, 0.0);
    }

    #[test]
    fn test_grid_dims_stay_in_range() {
        let mut config = SketchConfig::default();
        for _ in 0..20 {
            apply(&mut config, ControlAction::ColumnsUp, &mut rng());
            apply(&mut config, ControlAction::RowsDown, &mut rng());
        }
        assert_eq!(config.grid_cols, MAX_GRID_DIM);
        assert_eq!(config.grid_rows, 1);
    }

    #[test]
    fn test_toggle_alpha_flips() {
        let mut config = SketchConfig::default();
        apply(&mut config, ControlAction::ToggleAlpha, &mut rng());
        assert!(!config.alpha_on);
        apply(&mut config, ControlAction::ToggleAlpha, &mut rng());
        assert!(config.alpha_on);
    }

    #[test]
    fn test_random_texture_in_range() {
        let mut config = SketchConfig::default();
        let mut rng = rng();
        for _ in 0..100 {
            apply(&mut config, ControlAction::RandomTexture, &mut rng);
            assert!(config.texture_index < TEXTURE_COUNT);
        }
    }
}
