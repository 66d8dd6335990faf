//! Spectrum-driven sphere field: the per-frame core.
//!
//! Each frame every active entity is mapped from its spectrum bin to a set
//! of targets, eased toward them, placed on the canvas and (grid variant)
//! pushed apart from overlapping neighbours. The renderer only sees the
//! resulting [`SphereInstance`] list.

mod backdrop;
mod collision;
mod color;
mod easing;
mod layout;
mod mapper;
mod noise;
mod shape;
mod state;

pub use backdrop::Backdrop;
pub use color::{hsb_to_rgb, Hsba};
pub use easing::{ease_in_place, lerp, Ease};
pub use layout::{grid_index, Layout, Viewport};
pub use mapper::{linear_map, map_targets, target_alpha, target_hue, target_size, Targets};
pub use noise::NoiseField;
pub use shape::{Shape, ShapeSchedule};
pub use state::{spawn_entities, Entity};

use glam::Vec3;

use crate::audio::Spectrum;
use crate::params::sketch_constants::{LIGHT_BRIGHTNESS, NOISE_STEP, ROTATION_STEP};
use crate::params::{SketchConfig, Variant};

/// Everything one frame reads from outside the core
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub spectrum: &'a Spectrum,

    /// Configuration snapshot for this frame
    pub config: SketchConfig,

    /// Frames elapsed since startup
    pub frame: u64,

    pub viewport: Viewport,
}

/// Final transform and material of one entity for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInstance {
    pub index: usize,
    pub position: Vec3,

    /// Sphere radius / cube edge length (pixels)
    pub radius: f32,

    pub color: Hsba,

    /// Hue of the directional light lighting this entity
    pub light_hue: f32,

    /// Rotation about Y (radians)
    pub rotation_y: f32,
}

impl SphereInstance {
    pub fn light_color(&self) -> Hsba {
        Hsba::new(self.light_hue, 100.0, LIGHT_BRIGHTNESS, 1.0)
    }
}

/// All entities of one sketch plus the noise field they wander through.
///
/// Entities are allocated once for the variant's largest layout. When the
/// grid shrinks, trailing entities keep their state but are neither stepped
/// nor drawn.
pub struct SphereField {
    variant: Variant,
    entities: Vec<Entity>,
    noise: NoiseField,
}

impl SphereField {
    pub fn new(variant: Variant, seed: u64) -> Self {
        Self {
            variant,
            entities: spawn_entities(variant.capacity(), seed),
            noise: NoiseField::new(seed as u32),
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Advance one frame and return the instances to draw, in index order
    pub fn step(&mut self, input: &FrameInput) -> Vec<SphereInstance> {
        let config = input.config.sanitized();
        let layout = Layout::for_variant(self.variant, &config);
        let scale = input.viewport.scale_factor();
        let low_alpha = self.variant.low_alpha();
        let collides = self.variant.collides();
        let noise_offset = input.frame as f64 * NOISE_STEP;
        let rotation_y =
            (input.frame as f64 * ROTATION_STEP).rem_euclid(std::f64::consts::TAU) as f32;

        let mut instances = Vec::with_capacity(layout.len());

        for (x, y) in layout.cells() {
            let index = grid_index(x, y, layout.cols);
            let (earlier, rest) = self.entities.split_at_mut(index);
            let Some(entity) = rest.first_mut() else {
                break;
            };

            let noise_sample = self.noise.sample(entity.noise_phase + noise_offset);
            let targets = map_targets(input.spectrum.bin(index), noise_sample, &config, low_alpha);

            let size = ease_in_place(&mut entity.size, targets.size);
            let radius = size * scale;
            let (px, py) = layout.place(x, y, radius, &input.viewport);
            let z = ease_in_place(&mut entity.z, targets.z);
            entity.position = Vec3::new(px, py, z);

            if collides {
                collision::resolve(entity, earlier, scale);
                collision::integrate(entity);
            }

            let color = ease_in_place(&mut entity.color, targets.color());
            entity.noise_phase += NOISE_STEP;

            instances.push(SphereInstance {
                index,
                position: entity.position,
                radius,
                color,
                light_hue: targets.hue,
                rotation_y,
            });
        }

        instances
    }
}
