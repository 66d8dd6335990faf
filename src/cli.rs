//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::params::{SketchFile, Variant};

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "Spectrosphere")]
#[command(about = "Audio-reactive sphere field driven by a live spectrum", long_about = None)]
pub struct Args {
    /// Sketch to run: row (five spheres) or grid (resizable, colliding)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Size sensitivity, 0.0 to 1.0
    #[arg(long, value_name = "AMOUNT")]
    pub sensitivity: Option<f32>,

    /// Hue range in degrees, 0 to 360
    #[arg(long, value_name = "DEGREES")]
    pub hue_range: Option<f32>,

    /// Draw entities fully opaque
    #[arg(long)]
    pub no_alpha: bool,

    /// Grid columns, 1 to 10
    #[arg(long, value_name = "N")]
    pub cols: Option<usize>,

    /// Grid rows, 1 to 10
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Play and analyze a WAV file instead of the microphone
    #[arg(long, value_name = "WAV")]
    pub audio_file: Option<PathBuf>,

    /// Directory holding sphere textures 0.png … 5.png
    #[arg(long, value_name = "DIR")]
    pub textures: Option<PathBuf>,

    /// Seed for the noise field and initial phases
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds before spheres turn into cubes
    #[arg(long, value_name = "SECONDS")]
    pub cube_after: Option<f32>,

    /// TOML settings file; flags given here override it
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Load the settings file (if any) and apply command-line overrides
    pub fn resolve(&self) -> Result<SketchFile> {
        let base = match &self.config {
            Some(path) => SketchFile::load(path)?,
            None => SketchFile::default(),
        };
        Ok(self.apply_to(base))
    }

    /// Overlay flags that were given on top of `file`
    pub fn apply_to(&self, mut file: SketchFile) -> SketchFile {
        if let Some(variant) = self.variant {
            file.variant = variant;
        }
        if let Some(sensitivity) = self.sensitivity {
            file.sketch.sensitivity = sensitivity;
        }
        if let Some(hue_range) = self.hue_range {
            file.sketch.hue_range = hue_range;
        }
        if self.no_alpha {
            file.sketch.alpha_on = false;
        }
        if let Some(cols) = self.cols {
            file.sketch.grid_cols = cols;
        }
        if let Some(rows) = self.rows {
            file.sketch.grid_rows = rows;
        }
        if self.audio_file.is_some() {
            file.audio_file = self.audio_file.clone();
        }
        if self.textures.is_some() {
            file.texture_dir = self.textures.clone();
        }
        if self.seed.is_some() {
            file.seed = self.seed;
        }
        if self.cube_after.is_some() {
            file.cube_after_s = self.cube_after;
        }

        file.sketch = file.sketch.sanitized();
        file
    }
}
