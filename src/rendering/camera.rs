//! Fixed sketch camera looking down -Z at the canvas plane.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

/// View-projection for the default sketch camera.
///
/// World units are pixels with the origin at the canvas center and +Y
/// pointing down the screen, so the z = 0 plane maps one unit to one pixel.
pub fn view_proj_matrix(render_config: &RenderConfig) -> Mat4 {
    let eye = Vec3::new(0.0, 0.0, render_config.camera_distance());
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);

    // Flip Y so positive world y runs down the screen
    let flip = Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0));

    let proj = Mat4::perspective_rh(
        render_config.fov_degrees.to_radians(),
        render_config.aspect_ratio(),
        render_config.near_plane(),
        render_config.far_plane(),
    );

    proj * flip * view
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn to_ndc(m: Mat4, p: Vec3) -> Vec3 {
        let clip = m * Vec4::new(p.x, p.y, p.z, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn test_canvas_edges_map_to_ndc_edges() {
        let config = RenderConfig::default();
        let m = view_proj_matrix(&config);
        let half_w = config.window_width as f32 / 2.0;
        let half_h = config.window_height as f32 / 2.0;

        let right = to_ndc(m, Vec3::new(half_w, 0.0, 0.0));
        assert!((right.x - 1.0).abs() < 1e-3);

        // Canvas top (negative y) is NDC top (+1)
        let top = to_ndc(m, Vec3::new(0.0, -half_h, 0.0));
        assert!((top.y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_depth_range_covers_z_extent() {
        let config = RenderConfig::default();
        let m = view_proj_matrix(&config);
        for z in [-200.0, 0.0, 200.0] {
            let ndc = to_ndc(m, Vec3::new(0.0, 0.0, z));
            assert!((0.0..=1.0).contains(&ndc.z), "z {} → depth {}", z, ndc.z);
        }
    }
}
