//! Byte-scaled magnitude spectrum and the analyzer that produces it.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use super::fft::blackman_window;
use crate::params::sketch_constants::SPECTRUM_MAX;
use crate::params::FFTConfig;

/// Amplitudes per frequency bin, each in [0, 255]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    bins: Vec<f32>,
}

impl Spectrum {
    /// Build from raw amplitudes, clamping each into [0, 255]
    pub fn new(bins: Vec<f32>) -> Self {
        Self {
            bins: bins
                .into_iter()
                .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, SPECTRUM_MAX) })
                .collect(),
        }
    }

    /// All-zero spectrum of `len` bins
    pub fn silent(len: usize) -> Self {
        Self {
            bins: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[f32] {
        &self.bins
    }

    /// Amplitude for entity `index`, wrapping when there are more entities
    /// than bins. An empty spectrum reads as silence.
    pub fn bin(&self, index: usize) -> f32 {
        if self.bins.is_empty() {
            0.0
        } else {
            self.bins[index % self.bins.len()]
        }
    }
}

/// Windowed FFT with exponential smoothing and decibel-to-byte scaling
pub struct SpectrumAnalyzer {
    config: FFTConfig,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<Complex<f32>>,
    smoothed: Vec<f32>,
}

impl SpectrumAnalyzer {
    pub fn new(config: FFTConfig) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(config.fft_size);
        let window = (0..config.fft_size)
            .map(|i| blackman_window(i, config.fft_size))
            .collect();

        Self {
            buffer: vec![Complex::new(0.0, 0.0); config.fft_size],
            smoothed: vec![0.0; config.bin_count()],
            window,
            fft,
            config,
        }
    }

    /// Analyze the most recent `fft_size` samples.
    ///
    /// Shorter input is zero-padded at the front, so the newest sample is
    /// always last in the window.
    pub fn analyze(&mut self, samples: &[f32]) -> Spectrum {
        let n = self.config.fft_size;
        let recent = &samples[samples.len().saturating_sub(n)..];
        let pad = n - recent.len();

        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let sample = if i < pad { 0.0 } else { recent[i - pad] };
            *slot = Complex::new(sample * self.window[i], 0.0);
        }

        self.fft.process(&mut self.buffer);

        let tau = self.config.smoothing;
        let min_db = self.config.min_db;
        let db_span = self.config.max_db - min_db;
        let bins = self
            .smoothed
            .iter_mut()
            .zip(&self.buffer)
            .map(|(smoothed, c)| {
                let magnitude = c.norm() / n as f32;
                *smoothed = tau * *smoothed + (1.0 - tau) * magnitude;
                if *smoothed <= 0.0 {
                    return 0.0;
                }
                let db = 20.0 * smoothed.log10();
                (SPECTRUM_MAX / db_span * (db - min_db))
                    .clamp(0.0, SPECTRUM_MAX)
                    .floor()
            })
            .collect();

        Spectrum { bins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn tone(bin: usize, amplitude: f32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| amplitude * (2.0 * PI * bin as f32 * i as f32 / n as f32).sin())
            .collect()
    }

    #[test]
    fn test_bin_wraps_past_spectrum_length() {
        let spectrum = Spectrum::new(vec![0.0, 128.0, 255.0]);
        assert_eq!(spectrum.bin(0), 0.0);
        assert_eq!(spectrum.bin(2), 255.0);
        assert_eq!(spectrum.bin(3), 0.0);
        assert_eq!(spectrum.bin(4), 128.0);
        assert_eq!(spectrum.bin(100), spectrum.bin(100 % 3));
    }

    #[test]
    fn test_empty_spectrum_reads_silent() {
        let spectrum = Spectrum::default();
        assert!(spectrum.is_empty());
        assert_eq!(spectrum.bin(17), 0.0);
    }

    #[test]
    fn test_new_clamps_values() {
        let spectrum = Spectrum::new(vec![-4.0, 300.0, f32::NAN, 12.0]);
        assert_eq!(spectrum.bins(), &[0.0, 255.0, 0.0, 12.0]);
    }

    #[test]
    fn test_silence_is_all_zero() {
        let mut analyzer = SpectrumAnalyzer::new(FFTConfig::default());
        let spectrum = analyzer.analyze(&vec![0.0; 2048]);
        assert_eq!(spectrum.len(), 1024);
        assert!(spectrum.bins().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_tone_peaks_at_its_bin() {
        let config = FFTConfig::default();
        let n = config.fft_size;
        let mut analyzer = SpectrumAnalyzer::new(config);
        // Quiet enough that the peak stays below the 255 ceiling
        let samples = tone(64, 0.05, n);

        let mut spectrum = Spectrum::default();
        for _ in 0..20 {
            spectrum = analyzer.analyze(&samples);
        }

        let (peak, value) = spectrum
            .bins()
            .iter()
            .enumerate()
            .fold((0, 0.0_f32), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
        assert_eq!(peak, 64);
        assert!(value > 200.0 && value < 255.0, "peak value {}", value);
        assert!(spectrum.bin(300) < 50.0);
    }

    #[test]
    fn test_smoothing_ramps_up() {
        let config = FFTConfig::default();
        let n = config.fft_size;
        let mut analyzer = SpectrumAnalyzer::new(config);
        let samples = tone(32, 0.01, n);

        let first = analyzer.analyze(&samples).bin(32);
        let second = analyzer.analyze(&samples).bin(32);
        assert!(second > first);
    }

    #[test]
    fn test_short_input_is_padded() {
        let mut analyzer = SpectrumAnalyzer::new(FFTConfig::default());
        let spectrum = analyzer.analyze(&[0.0; 10]);
        assert_eq!(spectrum.len(), 1024);
    }
}
