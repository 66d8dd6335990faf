//! Audio capture and spectrum analysis.
//!
//! Microphone (or WAV playback) samples feed a background FFT thread; the
//! frame loop reads one spectrum snapshot per frame.

mod fft;
mod spectrum;
mod system;

// Re-export public types
pub use spectrum::{Spectrum, SpectrumAnalyzer};
pub use system::{read_wav_mono, AudioSource, AudioSystem, LoopingPlayer, WavClip};
