//! Uniform Structs for GPU Shaders
//!
//! GPU-compatible uniform buffer structures that must match WGSL layout exactly.

use glam::{Mat4, Vec3};
use static_assertions::assert_eq_size;

use crate::config::MaterialConfig;

/// Per-object uniforms for `scene.wgsl`. One buffer per drawn mesh.
/// Must match the WGSL struct layout exactly!
///
/// WGSL uniform layout (192 bytes total, each vec3 followed by a scalar):
///   offset   0: view_proj (mat4x4<f32>)      = 64 bytes
///   offset  64: model (mat4x4<f32>)          = 64 bytes
///   offset 128: camera_pos (vec3<f32>)       = 12 bytes
///   offset 140: ambient (f32)                = 4 bytes
///   offset 144: light_pos (vec3<f32>)        = 12 bytes
///   offset 156: specular_strength (f32)      = 4 bytes
///   offset 160: color (vec3<f32>)            = 12 bytes
///   offset 172: alpha (f32)                  = 4 bytes
///   offset 176: shininess (f32)              = 4 bytes
///   offset 180: _pad0.._pad2 (f32 x3)        = 12 bytes
///   Total: 192 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub ambient: f32,
    pub light_pos: [f32; 3],
    pub specular_strength: f32,
    pub color: [f32; 3],
    pub alpha: f32,
    pub shininess: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

assert_eq_size!(DrawUniforms, [u8; 192]);

impl Default for DrawUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0; 3],
            ambient: 0.0,
            light_pos: [0.0; 3],
            specular_strength: 0.0,
            color: [1.0; 3],
            alpha: 1.0,
            shininess: 1.0,
            _pad0: 0.0,
            _pad1: 0.0,
            _pad2: 0.0,
        }
    }
}

impl DrawUniforms {
    /// Uniforms for a lit draw of one object.
    pub fn lit(
        view_proj: Mat4,
        model: Mat4,
        camera_pos: Vec3,
        light_pos: Vec3,
        material: &MaterialConfig,
    ) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: camera_pos.to_array(),
            ambient: material.ambient,
            light_pos: light_pos.to_array(),
            specular_strength: material.specular_strength,
            color: material.color.to_array(),
            alpha: material.alpha,
            shininess: material.shininess,
            ..Default::default()
        }
    }

    /// Same transforms, solid wireframe color at full opacity.
    pub fn wireframe(
        view_proj: Mat4,
        model: Mat4,
        camera_pos: Vec3,
        light_pos: Vec3,
        material: &MaterialConfig,
    ) -> Self {
        Self {
            color: material.wireframe_color.to_array(),
            alpha: 1.0,
            ..Self::lit(view_proj, model, camera_pos, light_pos, material)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_size() {
        assert_eq!(std::mem::size_of::<DrawUniforms>(), 192);
        assert_eq!(std::mem::size_of::<DrawUniforms>() % 16, 0);
    }

    #[test]
    fn test_field_offsets() {
        assert_eq!(std::mem::offset_of!(DrawUniforms, model), 64);
        assert_eq!(std::mem::offset_of!(DrawUniforms, camera_pos), 128);
        assert_eq!(std::mem::offset_of!(DrawUniforms, light_pos), 144);
        assert_eq!(std::mem::offset_of!(DrawUniforms, color), 160);
        assert_eq!(std::mem::offset_of!(DrawUniforms, shininess), 176);
    }

    #[test]
    fn test_lit_copies_material() {
        let material = MaterialConfig::sphere();
        let u = DrawUniforms::lit(
            Mat4::IDENTITY,
            Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0)),
            Vec3::new(0.0, 3.0, 8.0),
            Vec3::splat(5.0),
            &material,
        );
        assert_eq!(u.color, material.color.to_array());
        assert_eq!(u.ambient, material.ambient);
        assert_eq!(u.shininess, material.shininess);
        assert_eq!(u.model[3], [0.0, 5.0, 0.0, 1.0]);
    }

    #[test]
    fn test_wireframe_is_opaque() {
        let material = MaterialConfig::water();
        let u = DrawUniforms::wireframe(
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Vec3::ZERO,
            Vec3::ZERO,
            &material,
        );
        assert_eq!(u.color, material.wireframe_color.to_array());
        assert_eq!(u.alpha, 1.0);
    }
}
