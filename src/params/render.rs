//! Rendering configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    /// 60° = the default camera of the sketching framework
    pub fov_degrees: f32,

    /// Longitude/latitude subdivisions of the sphere mesh
    pub sphere_segments: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 60.0,
            sphere_segments: 24,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    /// Distance of the default camera from the origin, chosen so the z = 0
    /// plane spans exactly the window height
    pub fn camera_distance(&self) -> f32 {
        (self.window_height as f32 / 2.0) / (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Near clipping plane (pixels), a tenth of the camera distance
    pub fn near_plane(&self) -> f32 {
        self.camera_distance() / 10.0
    }

    /// Far clipping plane (pixels), ten times the camera distance
    pub fn far_plane(&self) -> f32 {
        self.camera_distance() * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_distance_frames_window_height() {
        let config = RenderConfig::default();

        // (720 / 2) / tan(30°) ≈ 623.5
        assert!((config.camera_distance() - 623.54).abs() < 0.1);
        assert!(config.near_plane() < config.camera_distance());
        assert!(config.far_plane() > config.camera_distance());
    }

    #[test]
    fn test_aspect_ratio_tolerates_zero_height() {
        let config = RenderConfig {
            window_height: 0,
            ..RenderConfig::default()
        };
        assert!(config.aspect_ratio().is_finite());
    }
}
