//! Mesh Generation Module
//!
//! Builds the static topology for the scene (UV sphere, flat water grid) and
//! resamples the water grid's heights from the wave field every frame.
//!
//! Buffers are flat `f32` triples so they can be handed to the GPU with
//! `bytemuck::cast_slice` without an interleaving pass.

pub mod sphere;
pub mod water_plane;

pub use sphere::generate_sphere;
pub use water_plane::{
    WaterSurface, generate_water_plane, resample_water_plane, update_water_plane_with_waves,
};

/// Largest per-axis subdivision whose `(n + 1) x (n + 1)` vertex grid is
/// still addressable with `u32` indices.
pub const MAX_DIVISIONS: u32 = 65_534;

/// Buffer lengths for a `(a + 1) x (b + 1)` vertex grid split into `a * b`
/// quads: `(vertex floats, index count)`. Computed in `usize`.
pub(crate) fn grid_buffer_lens(a: u32, b: u32) -> (usize, usize) {
    let (a, b) = (a as usize, b as usize);
    let vertex_count = (a + 1).saturating_mul(b + 1);
    (vertex_count.saturating_mul(3), a.saturating_mul(b).saturating_mul(6))
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, 3 floats per vertex
    pub vertices: Vec<f32>,
    /// Triangle list, 3 indices per triangle
    pub indices: Vec<u32>,
    /// Vertex normals, 3 floats per vertex
    pub normals: Vec<f32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `index` as `[x, y, z]`.
    pub fn vertex(&self, index: usize) -> [f32; 3] {
        let i = index * 3;
        [self.vertices[i], self.vertices[i + 1], self.vertices[i + 2]]
    }

    /// Line-list indices for wireframe drawing.
    ///
    /// Each triangle `(a, b, c)` becomes the segments `(a, b)`, `(b, c)`, `(c, a)`.
    /// Shared edges are emitted once per adjacent triangle.
    pub fn line_indices(&self) -> Vec<u32> {
        let mut lines = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            lines.extend_from_slice(&[a, b, b, c, c, a]);
        }
        lines
    }
}
