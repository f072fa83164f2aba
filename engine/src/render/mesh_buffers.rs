//! GPU copies of a [`Mesh`].
//!
//! Positions and normals live in separate vertex buffers so the water
//! surface can rewrite positions each frame without touching normals.

use crate::mesh::Mesh;

use super::GpuContext;

/// Vertex buffer slots used by the scene pipelines.
pub fn vertex_buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    const POSITION: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
    const NORMAL: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

    [
        wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION,
        },
        wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &NORMAL,
        },
    ]
}

/// A mesh buffer that can be drawn filled or as lines.
pub struct MeshBuffers {
    pub label: &'static str,
    pub position_buffer: wgpu::Buffer,
    pub normal_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub line_index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub line_index_count: u32,
    vertex_len: usize,
}

impl MeshBuffers {
    pub fn new(ctx: &GpuContext, label: &'static str, mesh: &Mesh) -> Self {
        let line_indices = mesh.line_indices();

        Self {
            label,
            position_buffer: ctx
                .create_dynamic_vertex_buffer(&format!("{} Positions", label), &mesh.vertices),
            normal_buffer: ctx
                .create_dynamic_vertex_buffer(&format!("{} Normals", label), &mesh.normals),
            index_buffer: ctx.create_index_buffer(&format!("{} Indices", label), &mesh.indices),
            line_index_buffer: ctx
                .create_index_buffer(&format!("{} Line Indices", label), &line_indices),
            index_count: mesh.indices.len() as u32,
            line_index_count: line_indices.len() as u32,
            vertex_len: mesh.vertices.len(),
        }
    }

    /// Upload new positions. Topology is fixed at creation, so the length must
    /// match; mismatched uploads are dropped with a warning.
    pub fn update_positions(&self, ctx: &GpuContext, vertices: &[f32]) {
        if vertices.len() != self.vertex_len {
            log::warn!(
                "[Render] {} position upload has {} floats, expected {}",
                self.label,
                vertices.len(),
                self.vertex_len
            );
            return;
        }
        ctx.write_buffer(&self.position_buffer, vertices);
    }

    /// Record a draw with the currently bound pipeline.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, wireframe: bool) {
        pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        pass.set_vertex_buffer(1, self.normal_buffer.slice(..));
        if wireframe {
            pass.set_index_buffer(self.line_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..self.line_index_count, 0, 0..1);
        } else {
            pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }
}
