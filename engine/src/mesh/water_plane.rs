//! Water Plane Mesh
//!
//! Flat square grid centered at the origin whose vertex heights are
//! resampled from the [`WaveField`] every frame.
//!
//! ## Layout
//! Vertices are stored in raster order: rows advance along Z, columns along X.
//! Vertex `(col, row)` sits at index `row * (resolution + 1) + col`.
//!
//! Normals stay `(0, 1, 0)` after displacement. Lighting uses the flat normal
//! even where the surface is rippled.

use crate::physics::AnimationState;
use crate::water::WaveField;

use super::{MAX_DIVISIONS, Mesh, grid_buffer_lens};

/// World-space X or Z of grid line `i`.
fn grid_coord(i: u32, step: f32, half_size: f32) -> f32 {
    -half_size + i as f32 * step
}

/// Generate a flat `size x size` grid with `resolution` cells per side.
pub fn generate_water_plane(size: f32, resolution: u32) -> Mesh {
    let resolution = resolution.clamp(1, MAX_DIVISIONS);
    let step = size / resolution as f32;
    let half_size = size / 2.0;
    let row_len = resolution + 1;
    let (vertex_floats, index_count) = grid_buffer_lens(resolution, resolution);

    let mut vertices = Vec::with_capacity(vertex_floats);
    let mut normals = Vec::with_capacity(vertex_floats);
    let mut indices = Vec::with_capacity(index_count);

    for z in 0..=resolution {
        for x in 0..=resolution {
            vertices.extend_from_slice(&[
                grid_coord(x, step, half_size),
                0.0,
                grid_coord(z, step, half_size),
            ]);
            normals.extend_from_slice(&[0.0, 1.0, 0.0]);
        }
    }

    for z in 0..resolution {
        for x in 0..resolution {
            let top_left = z * row_len + x;
            let top_right = top_left + 1;
            let bottom_left = (z + 1) * row_len + x;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }

    Mesh {
        vertices,
        indices,
        normals,
    }
}

/// Copy of `mesh.vertices` with every grid vertex's Y replaced by the wave
/// height at its fixed X/Z, using the default [`WaveField`].
///
/// `mesh` is left untouched; a new buffer is returned on every call.
pub fn update_water_plane_with_waves(
    mesh: &Mesh,
    resolution: u32,
    size: f32,
    impact_x: f32,
    impact_z: f32,
    time_since_impact: f32,
) -> Vec<f32> {
    resample_water_plane(
        mesh,
        resolution,
        size,
        impact_x,
        impact_z,
        time_since_impact,
        &WaveField::default(),
    )
}

/// [`update_water_plane_with_waves`] with an explicit wave field.
pub fn resample_water_plane(
    mesh: &Mesh,
    resolution: u32,
    size: f32,
    impact_x: f32,
    impact_z: f32,
    time_since_impact: f32,
    field: &WaveField,
) -> Vec<f32> {
    let resolution = resolution.clamp(1, MAX_DIVISIONS);
    let mut updated = mesh.vertices.clone();
    let step = size / resolution as f32;
    let half_size = size / 2.0;

    let mut index = 0;
    for z in 0..=resolution {
        let pos_z = grid_coord(z, step, half_size);
        for x in 0..=resolution {
            let pos_x = grid_coord(x, step, half_size);
            if let Some(y) = updated.get_mut(index * 3 + 1) {
                *y = field.height(pos_x, pos_z, impact_x, impact_z, time_since_impact);
            }
            index += 1;
        }
    }

    updated
}

/// The water grid together with the dimensions it was built from.
#[derive(Debug, Clone)]
pub struct WaterSurface {
    mesh: Mesh,
    size: f32,
    resolution: u32,
}

impl WaterSurface {
    pub fn new(size: f32, resolution: u32) -> Self {
        Self {
            mesh: generate_water_plane(size, resolution),
            size,
            resolution: resolution.clamp(1, MAX_DIVISIONS),
        }
    }

    /// Canonical flat mesh (y = 0 everywhere).
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Displaced vertex buffer for `state`.
    ///
    /// Impact origin and elapsed time both come from the same snapshot, so the
    /// ripple phase always matches the sphere drawn in that frame.
    pub fn resample(&self, state: &AnimationState, field: &WaveField) -> Vec<f32> {
        let impact = state.impact_position();
        resample_water_plane(
            &self.mesh,
            self.resolution,
            self.size,
            impact.x,
            impact.z,
            state.time_since_impact(),
            field,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_extent() {
        let mesh = generate_water_plane(10.0, 4);
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.vertex(0), [-5.0, 0.0, -5.0]);
        assert_eq!(mesh.vertex(4), [5.0, 0.0, -5.0]);
        assert_eq!(mesh.vertex(24), [5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_plane_first_cell_indices() {
        let mesh = generate_water_plane(2.0, 2);
        assert_eq!(&mesh.indices[0..6], &[0, 3, 1, 1, 3, 4]);
    }

    #[test]
    fn test_flat_before_impact() {
        let surface = WaterSurface::new(10.0, 8);
        let state = AnimationState::default();
        let vertices = surface.resample(&state, &WaveField::default());
        assert_eq!(&vertices, &surface.mesh().vertices);
    }
}
