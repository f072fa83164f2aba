//! Shader Loading Utilities
//!
//! WGSL sources are embedded at compile time so the native and web builds
//! ship the same shader without file I/O.

/// Create a wgpu shader module from WGSL source.
pub fn create_shader_module(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    })
}

/// Shaders compiled into the binary.
pub mod embedded {
    /// Lit and wireframe passes for the sphere and water meshes.
    /// Entry points: `vs_main`, `fs_lit`, `fs_wire`.
    pub const SCENE: &str = include_str!("../../shaders/scene.wgsl");
}

/// Entry point names in [`embedded::SCENE`].
pub mod entry {
    pub const VERTEX: &str = "vs_main";
    pub const LIT: &str = "fs_lit";
    pub const WIRE: &str = "fs_wire";
}
