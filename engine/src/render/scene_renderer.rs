//! Scene Renderer
//!
//! Draws the sphere and the water surface with Phong lighting, or as lines
//! in wireframe mode. Each object owns its uniform buffer and bind group.

use glam::{Mat4, Vec3};

use crate::camera::SceneCamera;
use crate::config::{MaterialConfig, SceneConfig};
use crate::mesh::Mesh;

use super::mesh_buffers::{vertex_buffer_layouts, MeshBuffers};
use super::shader_loader::{create_shader_module, embedded, entry};
use super::uniforms::DrawUniforms;
use super::{GpuContext, DEPTH_FORMAT};

/// One drawable: geometry plus its per-object uniforms.
struct SceneObject {
    buffers: MeshBuffers,
    material: MaterialConfig,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SceneObject {
    fn new(
        ctx: &GpuContext,
        layout: &wgpu::BindGroupLayout,
        label: &'static str,
        mesh: &Mesh,
        material: MaterialConfig,
    ) -> Self {
        let uniform_buffer =
            ctx.create_uniform_buffer(&format!("{} Uniforms", label), &DrawUniforms::default());
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            buffers: MeshBuffers::new(ctx, label, mesh),
            material,
            uniform_buffer,
            bind_group,
        }
    }

    fn write_uniforms(
        &self,
        ctx: &GpuContext,
        view_proj: Mat4,
        model: Mat4,
        eye: Vec3,
        light: Vec3,
        wireframe: bool,
    ) {
        let uniforms = if wireframe {
            DrawUniforms::wireframe(view_proj, model, eye, light, &self.material)
        } else {
            DrawUniforms::lit(view_proj, model, eye, light, &self.material)
        };
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }
}

/// Per-frame inputs the renderer does not own.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams<'a> {
    pub camera: &'a SceneCamera,
    /// World-space sphere center; the sphere mesh is built around the origin.
    pub sphere_position: Vec3,
    pub wireframe: bool,
}

pub struct SceneRenderer {
    lit_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    sphere: SceneObject,
    water: SceneObject,
    light_position: Vec3,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    pub fn new(ctx: &GpuContext, scene: &SceneConfig, sphere_mesh: &Mesh, water_mesh: &Mesh) -> Self {
        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let shader = create_shader_module(&ctx.device, "Scene Shader", embedded::SCENE);
        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let lit_pipeline = create_pipeline(
            ctx,
            &pipeline_layout,
            &shader,
            "Lit",
            entry::LIT,
            wgpu::PrimitiveTopology::TriangleList,
        );
        let wire_pipeline = create_pipeline(
            ctx,
            &pipeline_layout,
            &shader,
            "Wireframe",
            entry::WIRE,
            wgpu::PrimitiveTopology::LineList,
        );

        let c = scene.clear_color;
        Self {
            lit_pipeline,
            wire_pipeline,
            sphere: SceneObject::new(ctx, &bind_group_layout, "Sphere", sphere_mesh, scene.sphere_material),
            water: SceneObject::new(ctx, &bind_group_layout, "Water", water_mesh, scene.water_material),
            light_position: scene.light_position,
            clear_color: wgpu::Color {
                r: c.x as f64,
                g: c.y as f64,
                b: c.z as f64,
                a: 1.0,
            },
        }
    }

    /// Upload this frame's displaced water positions.
    pub fn update_water(&self, ctx: &GpuContext, vertices: &[f32]) {
        self.water.buffers.update_positions(ctx, vertices);
    }

    /// Clear, then draw the sphere followed by the translucent water.
    pub fn render(&self, ctx: &GpuContext, frame: FrameParams<'_>) -> Result<(), wgpu::SurfaceError> {
        let output = ctx.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = frame.camera.view_projection(ctx.aspect_ratio());
        let eye = frame.camera.position;
        self.sphere.write_uniforms(
            ctx,
            view_proj,
            Mat4::from_translation(frame.sphere_position),
            eye,
            self.light_position,
            frame.wireframe,
        );
        self.water.write_uniforms(
            ctx,
            view_proj,
            Mat4::IDENTITY,
            eye,
            self.light_position,
            frame.wireframe,
        );

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(if frame.wireframe {
                &self.wire_pipeline
            } else {
                &self.lit_pipeline
            });

            for object in [&self.sphere, &self.water] {
                render_pass.set_bind_group(0, &object.bind_group, &[]);
                object.buffers.draw(&mut render_pass, frame.wireframe);
            }
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn create_pipeline(
    ctx: &GpuContext,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    fragment_entry: &str,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    let buffers = vertex_buffer_layouts();

    ctx.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} Pipeline", label)),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(entry::VERTEX),
                buffers: &buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fragment_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.format(),
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Both meshes are viewed from either side
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
