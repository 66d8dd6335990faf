//! Audio analysis configuration.

/// FFT analysis configuration, shaped after the browser analyser node the
/// sketches were tuned against
#[derive(Debug, Clone)]
pub struct FFTConfig {
    /// FFT window size (must be power of 2)
    /// 2048 samples → 1024 spectrum bins
    pub fft_size: usize,

    /// Analysis update interval (milliseconds)
    /// 16 ≈ one spectrum per frame at 60 fps
    pub update_interval_ms: u64,

    /// Temporal smoothing between successive spectra [0, 1)
    /// 0.8 = analyser node default
    pub smoothing: f32,

    /// Magnitude (dBFS) mapped to amplitude 0
    pub min_db: f32,

    /// Magnitude (dBFS) mapped to amplitude 255
    pub max_db: f32,
}

impl Default for FFTConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            update_interval_ms: 16,
            smoothing: 0.8,
            min_db: -100.0,
            max_db: -30.0,
        }
    }
}

impl FFTConfig {
    /// Number of spectrum bins produced per analysis
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.fft_size.is_power_of_two() {
            return Err(format!(
                "FFT size must be power of 2, got {}",
                self.fft_size
            ));
        }
        if !(0.0..1.0).contains(&self.smoothing) {
            return Err(format!(
                "Smoothing must be in [0, 1), got {}",
                self.smoothing
            ));
        }
        if self.min_db >= self.max_db {
            return Err(format!(
                "min_db ({}) must be below max_db ({})",
                self.min_db, self.max_db
            ));
        }
        Ok(())
    }
}
