use std::f32::consts::{PI, TAU};

use crate::renderer::vertex::Vertex;

/// Build a UV sphere with equirectangular texture coordinates.
///
/// Rings run pole to pole; each ring carries `segments + 1` vertices so the
/// texture seam gets its own column. Normals are the unit radial direction.
pub fn build_sphere(radius: f32, segments: u32, rings: u32) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let polar = v * PI;
        let y = polar.cos();
        let ring_radius = polar.sin();

        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let azimuth = u * TAU;
            let x = ring_radius * azimuth.sin();
            let z = ring_radius * azimuth.cos();

            vertices.push(Vertex {
                position: [radius * x, radius * y, radius * z],
                normal: [x, y, z],
                uv: [u, v],
            });
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for segment in 0..segments {
            let a = ring * stride + segment;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    (vertices, indices)
}
