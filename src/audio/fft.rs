//! Analysis thread and sample-buffer utilities.

use std::f32::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use super::spectrum::{Spectrum, SpectrumAnalyzer};
use crate::params::FFTConfig;

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Append samples, dropping the oldest so at most `capacity` remain
pub(crate) fn push_samples<I>(buffer: &Mutex<Vec<f32>>, samples: I, capacity: usize)
where
    I: IntoIterator<Item = f32>,
{
    let mut buf = lock(buffer);
    buf.extend(samples);
    if buf.len() > capacity {
        let excess = buf.len() - capacity;
        buf.drain(0..excess);
    }
}

/// Spawn the spectrum analysis thread.
///
/// Every `update_interval_ms` the newest `fft_size` samples are analyzed and
/// the result replaces the shared spectrum. Exits when `running` clears.
pub fn spawn_fft_thread(
    config: FFTConfig,
    sample_buffer: Arc<Mutex<Vec<f32>>>,
    spectrum: Arc<Mutex<Spectrum>>,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let interval = Duration::from_millis(config.update_interval_ms);
        let fft_size = config.fft_size;
        let mut analyzer = SpectrumAnalyzer::new(config);
        let mut window = Vec::with_capacity(fft_size);

        while running.load(Ordering::Relaxed) {
            thread::sleep(interval);

            window.clear();
            {
                let buf = lock(&sample_buffer);
                let start = buf.len().saturating_sub(fft_size);
                window.extend_from_slice(&buf[start..]);
            }

            let fresh = analyzer.analyze(&window);
            *lock(&spectrum) = fresh;
        }

        log::debug!("Analysis thread stopped");
    })
}

/// Blackman window (alpha 0.16), the window browser analysers apply
/// before their FFT
pub fn blackman_window(index: usize, size: usize) -> f32 {
    let phase = 2.0 * PI * index as f32 / size as f32;
    0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos()
}
