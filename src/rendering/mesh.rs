//! Unit sphere and cube meshes shared by every instance.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::PI;

/// Vertex data (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle list
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Unit-radius UV sphere with `segments` longitude and latitude divisions.
    ///
    /// Built as a (segments + 1)² vertex grid over (longitude, latitude) so
    /// the texture seam gets its own column of vertices.
    pub fn sphere(segments: u32) -> Self {
        let segments = segments.max(3);
        let mut vertices = Vec::with_capacity(((segments + 1) * (segments + 1)) as usize);
        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);

        for lat in 0..=segments {
            let v = lat as f32 / segments as f32;
            let theta = v * PI; // 0 at top pole
            for lon in 0..=segments {
                let u = lon as f32 / segments as f32;
                let phi = u * 2.0 * PI;

                let normal = [theta.sin() * phi.sin(), -theta.cos(), theta.sin() * phi.cos()];
                vertices.push(Vertex {
                    position: normal,
                    normal,
                    uv: [u, v],
                });
            }
        }

        // Two triangles per grid cell
        let stride = segments + 1;
        for lat in 0..segments {
            for lon in 0..segments {
                let top_left = lat * stride + lon;
                let top_right = top_left + 1;
                let bottom_left = (lat + 1) * stride + lon;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self { vertices, indices }
    }

    /// Unit cube centered on the origin (edge length 1), one quad per face
    pub fn cube() -> Self {
        // (normal, u axis, v axis)
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u_axis, v_axis) in faces {
            let base = vertices.len() as u32;
            for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
                let position = [
                    normal[0] * 0.5 + u_axis[0] * su + v_axis[0] * sv,
                    normal[1] * 0.5 + u_axis[1] * su + v_axis[1] * sv,
                    normal[2] * 0.5 + u_axis[2] * su + v_axis[2] * sv,
                ];
                vertices.push(Vertex {
                    position,
                    normal,
                    uv: [su + 0.5, sv + 0.5],
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let mesh = Mesh::sphere(16);
        assert_eq!(mesh.vertices.len(), 17 * 17);
        assert_eq!(mesh.indices.len(), 16 * 16 * 6);
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_sphere_vertices_on_unit_sphere() {
        let mesh = Mesh::sphere(12);
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.position;
            assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cube_extent_and_counts() {
        let mesh = Mesh::cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        for vertex in &mesh.vertices {
            for c in vertex.position {
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
        }
    }
}
