//! Render Tests - Uniform Layout and Shader Validation
//!
//! Tests for the CPU side of the render module: uniform structs must match
//! the WGSL layout byte for byte, and the embedded shader must validate.

use sphere_splash_engine::config::MaterialConfig;
use sphere_splash_engine::render::uniforms::DrawUniforms;
use sphere_splash_engine::render::{embedded, vertex_buffer_layouts};

fn parse_scene_shader() -> naga::Module {
    naga::front::wgsl::parse_str(embedded::SCENE).expect("scene.wgsl should parse")
}

// ============================================================================
// Shader
// ============================================================================

#[test]
fn test_scene_shader_validates() {
    let module = parse_scene_shader();
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    );
    validator
        .validate(&module)
        .expect("scene.wgsl should validate");
}

#[test]
fn test_scene_shader_entry_points() {
    let module = parse_scene_shader();
    let names: Vec<&str> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();

    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_lit"));
    assert!(names.contains(&"fs_wire"));
}

#[test]
fn test_wgsl_uniform_layout_matches_rust() {
    let module = parse_scene_shader();
    let (members, span) = module
        .types
        .iter()
        .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
            (Some(name), naga::TypeInner::Struct { members, span }) if name == "Uniforms" => {
                Some((members.clone(), *span))
            }
            _ => None,
        })
        .expect("Uniforms struct");

    assert_eq!(span as usize, std::mem::size_of::<DrawUniforms>());

    let offset = |field: &str| {
        members
            .iter()
            .find(|m| m.name.as_deref() == Some(field))
            .map(|m| m.offset as usize)
            .unwrap_or_else(|| panic!("missing member {}", field))
    };
    assert_eq!(offset("model"), std::mem::offset_of!(DrawUniforms, model));
    assert_eq!(offset("camera_pos"), std::mem::offset_of!(DrawUniforms, camera_pos));
    assert_eq!(offset("ambient"), std::mem::offset_of!(DrawUniforms, ambient));
    assert_eq!(offset("light_pos"), std::mem::offset_of!(DrawUniforms, light_pos));
    assert_eq!(
        offset("specular_strength"),
        std::mem::offset_of!(DrawUniforms, specular_strength)
    );
    assert_eq!(offset("color"), std::mem::offset_of!(DrawUniforms, color));
    assert_eq!(offset("alpha"), std::mem::offset_of!(DrawUniforms, alpha));
    assert_eq!(offset("shininess"), std::mem::offset_of!(DrawUniforms, shininess));
}

// ============================================================================
// Uniforms and vertex layout
// ============================================================================

#[test]
fn test_uniform_bytes() {
    let uniforms = DrawUniforms::default();
    let bytes = bytemuck::bytes_of(&uniforms);
    assert_eq!(bytes.len(), 192);

    // view_proj starts with the identity's first column
    let first: &[f32] = bytemuck::cast_slice(&bytes[..16]);
    assert_eq!(first, &[1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_default_materials() {
    let sphere = MaterialConfig::sphere();
    let water = MaterialConfig::water();

    assert_eq!(sphere.alpha, 1.0);
    assert_eq!(water.alpha, 0.9);
    assert_eq!(sphere.shininess, 32.0);
    assert_eq!(water.shininess, 64.0);
}

#[test]
fn test_vertex_buffer_layouts() {
    let layouts = vertex_buffer_layouts();

    for (slot, layout) in layouts.iter().enumerate() {
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, slot as u32);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.attributes[0].offset, 0);
    }
}
