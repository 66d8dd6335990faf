//! Audio system managing capture/playback and spectrum analysis.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use super::fft::{lock, push_samples, spawn_fft_thread};
use super::spectrum::Spectrum;
use crate::error::{Result, SketchError};
use crate::params::FFTConfig;

/// Where analyzed audio comes from
#[derive(Debug, Clone, PartialEq)]
pub enum AudioSource {
    /// Default input device
    Microphone,

    /// WAV file looped through the default output device
    File(PathBuf),
}

/// Audio system: one stream feeding a shared sample buffer, one analysis
/// thread publishing spectra
pub struct AudioSystem {
    /// Latest spectrum (thread-safe)
    spectrum: Arc<Mutex<Spectrum>>,

    /// Capture or playback stream (kept alive, starts paused)
    stream: cpal::Stream,

    /// Whether the stream has been resumed
    resumed: bool,

    running: Arc<AtomicBool>,
    fft_thread: Option<thread::JoinHandle<()>>,
}

impl AudioSystem {
    /// Open `source` and start analysis. The stream stays paused until
    /// [`AudioSystem::resume`] is called.
    pub fn new(fft_config: FFTConfig, source: AudioSource) -> Result<Self> {
        fft_config.validate().map_err(SketchError::FftConfig)?;

        // Hold a few windows so a late analysis tick never starves
        let capacity = fft_config.fft_size * 4;
        let sample_buffer = Arc::new(Mutex::new(Vec::<f32>::with_capacity(capacity)));
        let spectrum = Arc::new(Mutex::new(Spectrum::silent(fft_config.bin_count())));

        let stream = match &source {
            AudioSource::Microphone => build_capture_stream(Arc::clone(&sample_buffer), capacity)?,
            AudioSource::File(path) => {
                let clip = read_wav_mono(path)?;
                build_playback_stream(clip, Arc::clone(&sample_buffer), capacity)?
            }
        };

        // Suspended until the user interacts
        if let Err(e) = stream.pause() {
            log::warn!("Could not pause audio stream: {}", e);
        }

        let running = Arc::new(AtomicBool::new(true));
        let fft_thread = spawn_fft_thread(
            fft_config,
            sample_buffer,
            Arc::clone(&spectrum),
            Arc::clone(&running),
        );

        Ok(Self {
            spectrum,
            stream,
            resumed: false,
            running,
            fft_thread: Some(fft_thread),
        })
    }

    /// Start the paused stream; later calls are no-ops
    pub fn resume(&mut self) {
        if self.resumed {
            return;
        }
        match self.stream.play() {
            Ok(()) => {
                log::info!("Audio resumed");
                self.resumed = true;
            }
            Err(e) => log::error!("Failed to start audio stream: {}", e),
        }
    }

    /// Snapshot of the current spectrum (thread-safe)
    pub fn spectrum(&self) -> Spectrum {
        lock(&self.spectrum).clone()
    }
}

impl Drop for AudioSystem {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.fft_thread.take() {
            let _ = handle.join();
        }
    }
}

/// Open the default input device and downmix everything it records to mono
fn build_capture_stream(
    sample_buffer: Arc<Mutex<Vec<f32>>>,
    capacity: usize,
) -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or(SketchError::NoAudioDevice("input"))?;

    let supported = device
        .default_input_config()
        .map_err(|e| SketchError::AudioDevice(format!("Failed to get input config: {}", e)))?;

    log::info!(
        "Audio input: {} @ {}Hz, {} channel(s)",
        device.name().unwrap_or_else(|_| "Unknown".to_string()),
        supported.sample_rate().0,
        supported.channels()
    );

    let format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();

    match format {
        cpal::SampleFormat::F32 => {
            build_typed_capture::<f32>(&device, &config, sample_buffer, capacity)
        }
        cpal::SampleFormat::I16 => {
            build_typed_capture::<i16>(&device, &config, sample_buffer, capacity)
        }
        cpal::SampleFormat::U16 => {
            build_typed_capture::<u16>(&device, &config, sample_buffer, capacity)
        }
        other => Err(SketchError::AudioDevice(format!(
            "Unsupported input sample format {:?}",
            other
        ))),
    }
}

fn build_typed_capture<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    sample_buffer: Arc<Mutex<Vec<f32>>>,
    capacity: usize,
) -> Result<cpal::Stream>
where
    T: SizedSample,
    f32: FromSample<T>,
{
    let channels = config.channels.max(1) as usize;

    device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                let mono = data.chunks(channels).map(|frame| {
                    frame.iter().map(|s| s.to_sample::<f32>()).sum::<f32>() / frame.len() as f32
                });
                push_samples(&sample_buffer, mono, capacity);
            },
            |err| log::error!("Audio input stream error: {}", err),
            None,
        )
        .map_err(|e| SketchError::AudioDevice(format!("Failed to build input stream: {}", e)))
}

/// Decoded mono audio at its native rate
#[derive(Debug, Clone, PartialEq)]
pub struct WavClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Endless playback of a clip at an output rate that may differ from the
/// clip's own, using linear interpolation between neighbouring samples
#[derive(Debug, Clone)]
pub struct LoopingPlayer {
    samples: Vec<f32>,
    position: f64,
    step: f64,
}

impl LoopingPlayer {
    pub fn new(clip: WavClip, output_rate: u32) -> Self {
        let step = clip.sample_rate.max(1) as f64 / output_rate.max(1) as f64;
        Self {
            samples: clip.samples,
            position: 0.0,
            step,
        }
    }

    /// Clip samples consumed per output frame
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Next output sample; wraps to the start at the end of the clip
    pub fn next_sample(&mut self) -> f32 {
        let len = self.samples.len();
        if len == 0 {
            return 0.0;
        }

        let index = self.position as usize % len;
        let frac = (self.position - self.position.floor()) as f32;
        let current = self.samples[index];
        let next = self.samples[(index + 1) % len];

        self.position = (self.position + self.step) % len as f64;
        current + (next - current) * frac
    }
}

/// Loop `clip` on the default output device, feeding what is played
/// into the analysis buffer
fn build_playback_stream(
    clip: WavClip,
    sample_buffer: Arc<Mutex<Vec<f32>>>,
    capacity: usize,
) -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(SketchError::NoAudioDevice("output"))?;

    let supported = device
        .default_output_config()
        .map_err(|e| SketchError::AudioDevice(format!("Failed to get output config: {}", e)))?;

    log::info!(
        "Audio output: {} @ {}Hz",
        device.name().unwrap_or_else(|_| "Unknown".to_string()),
        supported.sample_rate().0
    );

    let config: cpal::StreamConfig = supported.into();
    let channels = config.channels.max(1) as usize;
    let clip_rate = clip.sample_rate;
    let mut player = LoopingPlayer::new(clip, config.sample_rate.0);
    if clip_rate != config.sample_rate.0 {
        log::info!(
            "Resampling {} Hz clip to {} Hz output (step {:.4})",
            clip_rate,
            config.sample_rate.0,
            player.step()
        );
    }

    device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let mut played = Vec::with_capacity(data.len() / channels);
                for frame in data.chunks_mut(channels) {
                    let sample = player.next_sample();
                    frame.fill(sample);
                    played.push(sample);
                }
                push_samples(&sample_buffer, played, capacity);
            },
            |err| log::error!("Audio output stream error: {}", err),
            None,
        )
        .map_err(|e| SketchError::AudioDevice(format!("Failed to build output stream: {}", e)))
}

/// Read a WAV file and downmix it to mono f32 in [-1, 1]
pub fn read_wav_mono(path: &Path) -> Result<WavClip> {
    let wav_error = |source: hound::Error| SketchError::AudioFile {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(wav_error)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(wav_error)?,
        hound::SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(wav_error)?
        }
    };

    let mono: Vec<f32> = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect();

    if mono.is_empty() {
        return Err(SketchError::EmptyAudioFile(path.to_path_buf()));
    }

    log::info!(
        "Loaded {} ({} Hz, {} channel(s), {:.1}s)",
        path.display(),
        spec.sample_rate,
        spec.channels,
        mono.len() as f32 / spec.sample_rate.max(1) as f32
    );

    Ok(WavClip {
        samples: mono,
        sample_rate: spec.sample_rate,
    })
}
