//! Error types for the application layer.
//!
//! The per-frame core never fails; these cover startup and device I/O.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    #[error("Invalid FFT config: {0}")]
    FftConfig(String),

    #[error("No audio {0} device found")]
    NoAudioDevice(&'static str),

    #[error("Audio device error: {0}")]
    AudioDevice(String),

    #[error("Failed to read audio file {path}: {source}")]
    AudioFile {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Audio file {0} contains no samples")]
    EmptyAudioFile(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture {path} is {width}x{height}, larger than the GPU limit of {max}")]
    TextureTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max: u32,
    },

    #[error("GPU setup failed: {0}")]
    Gpu(String),
}

pub type Result<T> = std::result::Result<T, SketchError>;
