//! Spectrosphere library - audio-reactive sphere field

pub mod audio;
pub mod cli;
pub mod controls;
pub mod error;
pub mod field;
pub mod params;
pub mod rendering;
