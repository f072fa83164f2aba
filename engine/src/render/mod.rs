//! Render Module
//!
//! wgpu rendering for the splash scene. Runs on native backends and in the
//! browser (WebGPU, falling back to WebGL2).

pub mod gpu_context;
pub mod mesh_buffers;
pub mod scene_renderer;
pub mod shader_loader;
pub mod uniforms;

pub use gpu_context::{GpuContext, GpuContextConfig, RenderError, DEPTH_FORMAT};
pub use mesh_buffers::{vertex_buffer_layouts, MeshBuffers};
pub use scene_renderer::{FrameParams, SceneRenderer};
pub use shader_loader::{create_shader_module, embedded};
pub use uniforms::DrawUniforms;
