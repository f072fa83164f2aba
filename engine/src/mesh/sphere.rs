//! UV sphere generator

use std::f32::consts::PI;

use super::{MAX_DIVISIONS, Mesh, grid_buffer_lens};

/// Generate a UV sphere centered at the origin.
///
/// Rings sweep the polar angle from the north pole (`+Y`) to the south pole,
/// segments sweep the azimuth around Y. The seam column is duplicated so the
/// grid is a clean `(rings + 1) x (segments + 1)` raster. Normals equal the
/// unit direction of each vertex.
///
/// Produces `2 * segments * rings` triangles (pole rows included, where one
/// triangle per quad is degenerate).
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> Mesh {
    let segments = segments.clamp(1, MAX_DIVISIONS);
    let rings = rings.clamp(1, MAX_DIVISIONS);
    let (vertex_floats, index_count) = grid_buffer_lens(segments, rings);

    let mut vertices = Vec::with_capacity(vertex_floats);
    let mut normals = Vec::with_capacity(vertex_floats);
    let mut indices = Vec::with_capacity(index_count);

    for ring in 0..=rings {
        let theta = ring as f32 * PI / rings as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for seg in 0..=segments {
            let phi = seg as f32 * 2.0 * PI / segments as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let x = cos_phi * sin_theta;
            let y = cos_theta;
            let z = sin_phi * sin_theta;

            vertices.extend_from_slice(&[x * radius, y * radius, z * radius]);
            normals.extend_from_slice(&[x, y, z]);
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let first = ring * (segments + 1) + seg;
            let second = first + segments + 1;

            indices.extend_from_slice(&[first, second, first + 1]);
            indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    Mesh {
        vertices,
        indices,
        normals,
    }
}
