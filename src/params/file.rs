//! Optional TOML settings file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::sketch_constants::CUBE_AFTER_S;
use super::{SketchConfig, Variant};
use crate::error::{Result, SketchError};

/// Startup settings read from a TOML file. Every field is optional in the
/// file; command-line flags override what is loaded here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchFile {
    pub variant: Variant,

    /// Initial per-frame configuration
    pub sketch: SketchConfig,

    /// Play and analyze this WAV file instead of the microphone
    pub audio_file: Option<PathBuf>,

    /// Directory holding `0.png` … `5.png`
    pub texture_dir: Option<PathBuf>,

    /// Seed for noise field and initial noise phases
    pub seed: Option<u64>,

    /// Seconds before spheres turn into cubes
    pub cube_after_s: Option<f32>,
}

impl SketchFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SketchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: Self = toml::from_str(&contents).map_err(|source| SketchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(file)
    }

    /// Delay before the cube switch. Negative or non-finite values fall back
    /// to the default; values too large for a `Duration` never switch.
    pub fn cube_after(&self) -> Duration {
        let secs = self
            .cube_after_s
            .filter(|s| s.is_finite() && *s >= 0.0)
            .unwrap_or(CUBE_AFTER_S);
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path(name: &str) -> PathBuf {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("spectrosphere_{stamp}_{name}"))
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = unique_path("partial.toml");
        fs::write(
            &path,
            "variant = \"row\"\n\n[sketch]\nhue_range = 300.0\n",
        )
        .unwrap();

        let file = SketchFile::load(&path).unwrap();
        assert_eq!(file.variant, Variant::Row);
        assert_eq!(file.sketch.hue_range, 300.0);
        assert_eq!(file.sketch.sensitivity, SketchConfig::default().sensitivity);
        assert!(file.audio_file.is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_round_trip() {
        let path = unique_path("custom.toml");
        let custom = SketchFile {
            variant: Variant::Grid,
            sketch: SketchConfig {
                grid_cols: 8,
                alpha_on: false,
                ..SketchConfig::default()
            },
            seed: Some(7),
            cube_after_s: Some(5.0),
            ..SketchFile::default()
        };
        fs::write(&path, toml::to_string_pretty(&custom).unwrap()).unwrap();

        assert_eq!(SketchFile::load(&path).unwrap(), custom);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_cube_after_handles_out_of_range_values() {
        let with = |secs: Option<f32>| SketchFile {
            cube_after_s: secs,
            ..SketchFile::default()
        };

        assert_eq!(with(None).cube_after(), Duration::from_secs(60));
        assert_eq!(with(Some(5.0)).cube_after(), Duration::from_secs(5));
        assert_eq!(with(Some(-1.0)).cube_after(), Duration::from_secs(60));
        assert_eq!(with(Some(f32::NAN)).cube_after(), Duration::from_secs(60));
        assert_eq!(with(Some(1e20)).cube_after(), Duration::MAX);
    }

    #[test]
    fn test_huge_cube_delay_from_file() {
        let path = unique_path("huge.toml");
        fs::write(&path, "cube_after_s = 1e20\n").unwrap();
        let file = SketchFile::load(&path).unwrap();
        assert_eq!(file.cube_after(), Duration::MAX);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = SketchFile::load(Path::new("/nonexistent/spectrosphere.toml")).unwrap_err();
        assert!(matches!(err, SketchError::ConfigRead { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = unique_path("broken.toml");
        fs::write(&path, "variant = [").unwrap();
        let err = SketchFile::load(&path).unwrap_err();
        assert!(matches!(err, SketchError::ConfigParse { .. }));
        let _ = fs::remove_file(&path);
    }
}
