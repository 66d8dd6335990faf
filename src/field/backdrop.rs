//! Background color per variant.

use super::color::Hsba;
use crate::params::{sketch_constants::BACKDROP_HUE_STEP, Variant};

/// Background: black for the row variant, a slowly drifting hue for the grid
#[derive(Debug, Clone)]
pub struct Backdrop {
    variant: Variant,
    hue: f32,
}

impl Backdrop {
    pub fn new(variant: Variant) -> Self {
        Self { variant, hue: 0.0 }
    }

    /// Color for the current frame; advances the drift
    pub fn advance(&mut self) -> Hsba {
        match self.variant {
            Variant::Row => Hsba::new(0.0, 0.0, 0.0, 1.0),
            Variant::Grid => {
                let color = Hsba::new(self.hue, 67.0, 50.0, 1.0);
                self.hue = (self.hue + BACKDROP_HUE_STEP) % 360.0;
                color
            }
        }
    }
}
