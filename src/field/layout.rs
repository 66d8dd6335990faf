//! Entity addressing and screen placement.

use super::mapper::linear_map;
use crate::params::{sketch_constants::ROW_COUNT, SketchConfig, Variant};

/// Row-major entity index of grid cell (x, y)
pub fn grid_index(x: usize, y: usize, cols: usize) -> usize {
    y * cols + x
}

/// Canvas extent in pixels, centered on the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixels per unit of entity size
    pub fn scale_factor(&self) -> f32 {
        self.width.min(self.height) * crate::params::sketch_constants::SCALE_PER_PIXEL
    }
}

/// Arrangement of active entities for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub cols: usize,
    pub rows: usize,
}

impl Layout {
    /// Layout for `variant` under a sanitized configuration
    pub fn for_variant(variant: Variant, config: &SketchConfig) -> Self {
        match variant {
            Variant::Row => Self {
                cols: ROW_COUNT,
                rows: 1,
            },
            Variant::Grid => Self {
                cols: config.grid_cols,
                rows: config.grid_rows,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells in processing order: rows top to bottom, columns left to right
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| (x, y)))
    }

    /// Screen x/y of cell (x, y) for an entity of pixel radius `radius`.
    ///
    /// Cells spread edge to edge with the outermost entities just touching
    /// the canvas border. A single row or column sits on the center line.
    pub fn place(&self, x: usize, y: usize, radius: f32, viewport: &Viewport) -> (f32, f32) {
        let half_w = viewport.width / 2.0;
        let half_h = viewport.height / 2.0;

        let px = linear_map(
            x as f32,
            0.0,
            self.cols.saturating_sub(1) as f32,
            -half_w + radius,
            half_w - radius,
        );
        let py = linear_map(
            y as f32,
            0.0,
            self.rows.saturating_sub(1) as f32,
            -half_h + radius,
            half_h - radius,
        );

        (px, py)
    }
}
