//! Mesh Tests - Sphere and Water Plane Generation
//!
//! Integration tests for mesh topology, geometry and the per-frame water
//! resampling.

use glam::Vec3;
use sphere_splash_engine::mesh::{
    Mesh, WaterSurface, generate_sphere, generate_water_plane, resample_water_plane,
    update_water_plane_with_waves,
};
use sphere_splash_engine::physics::{AnimationState, Impact, SpherePhase};
use sphere_splash_engine::water::{WaveField, WaveParams};

fn position(mesh: &Mesh, index: u32) -> Vec3 {
    Vec3::from_array(mesh.vertex(index as usize))
}

fn submerged_state(impact_x: f32, impact_z: f32, time_since_impact: f32) -> AnimationState {
    AnimationState {
        sphere_position: Vec3::new(impact_x, -0.5, impact_z),
        sphere_velocity: Vec3::new(0.0, -0.7, 0.0),
        phase: SpherePhase::Submerged(Impact {
            time: 1.0,
            position: Vec3::new(impact_x, 0.0, impact_z),
        }),
        current_time: 1.0 + time_since_impact,
        ..Default::default()
    }
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn test_sphere_counts() {
    for (segments, rings) in [(30, 30), (8, 4), (3, 2), (1, 1)] {
        let mesh = generate_sphere(0.5, segments, rings);
        assert_eq!(mesh.vertex_count() as u32, (rings + 1) * (segments + 1));
        assert_eq!(mesh.triangle_count() as u32, 2 * segments * rings);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
    }
}

#[test]
fn test_sphere_vertices_on_surface() {
    let radius = 0.5;
    let mesh = generate_sphere(radius, 30, 30);
    for i in 0..mesh.vertex_count() as u32 {
        assert!((position(&mesh, i).length() - radius).abs() < 1e-5);
    }
}

#[test]
fn test_sphere_normals_are_unit_and_outward() {
    let mesh = generate_sphere(2.0, 16, 12);
    for (p, n) in mesh.vertices.chunks_exact(3).zip(mesh.normals.chunks_exact(3)) {
        let p = Vec3::new(p[0], p[1], p[2]);
        let n = Vec3::new(n[0], n[1], n[2]);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!((p / 2.0 - n).length() < 1e-5);
    }
}

#[test]
fn test_sphere_indices_in_range() {
    let mesh = generate_sphere(1.0, 30, 30);
    let count = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < count));
}

#[test]
fn test_sphere_poles() {
    let mesh = generate_sphere(1.0, 10, 10);
    let north = position(&mesh, 0);
    let south = position(&mesh, (mesh.vertex_count() - 1) as u32);
    assert!((north - Vec3::Y).length() < 1e-6);
    assert!((south + Vec3::Y).length() < 1e-5);
}

#[test]
fn test_sphere_winding_is_consistent() {
    let mesh = generate_sphere(1.0, 24, 16);
    let mut sign = 0.0f32;

    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (position(&mesh, tri[0]), position(&mesh, tri[1]), position(&mesh, tri[2]));
        let normal = (b - a).cross(c - a);
        if normal.length() < 1e-6 {
            // Degenerate pole triangle
            continue;
        }
        let facing = normal.dot((a + b + c) / 3.0).signum();
        if sign == 0.0 {
            sign = facing;
        }
        assert_eq!(facing, sign);
    }
    assert_ne!(sign, 0.0);
}

// ============================================================================
// Water plane
// ============================================================================

#[test]
fn test_water_plane_topology() {
    let mesh = generate_water_plane(10.0, 50);
    assert_eq!(mesh.vertex_count(), 51 * 51);
    assert_eq!(mesh.triangle_count(), 2 * 50 * 50);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}

#[test]
fn test_water_plane_is_flat_and_centered() {
    let mesh = generate_water_plane(10.0, 4);
    assert_eq!(mesh.vertex(0), [-5.0, 0.0, -5.0]);
    assert_eq!(mesh.vertex(4), [5.0, 0.0, -5.0]);
    assert_eq!(mesh.vertex(24), [5.0, 0.0, 5.0]);
    assert!(mesh.vertices.chunks_exact(3).all(|v| v[1] == 0.0));
    assert!(mesh.normals.chunks_exact(3).all(|n| n == [0.0, 1.0, 0.0]));
}

#[test]
fn test_water_plane_zero_resolution_clamped() {
    let mesh = generate_water_plane(2.0, 0);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
}

#[test]
fn test_wireframe_lines_cover_every_triangle() {
    let mesh = generate_water_plane(1.0, 3);
    let lines = mesh.line_indices();
    assert_eq!(lines.len(), mesh.indices.len() * 2);
    assert_eq!(&lines[..6], &[mesh.indices[0], mesh.indices[1], mesh.indices[1], mesh.indices[2], mesh.indices[2], mesh.indices[0]]);
}

// ============================================================================
// Resampling
// ============================================================================

#[test]
fn test_resample_is_pure() {
    let mesh = generate_water_plane(10.0, 20);
    let original = mesh.clone();

    let first = update_water_plane_with_waves(&mesh, 20, 10.0, 0.0, 0.0, 0.8);
    let second = update_water_plane_with_waves(&mesh, 20, 10.0, 0.0, 0.0, 0.8);

    assert_eq!(first, second);
    assert_eq!(mesh, original);
}

#[test]
fn test_resample_only_touches_heights() {
    let mesh = generate_water_plane(10.0, 20);
    let updated = update_water_plane_with_waves(&mesh, 20, 10.0, 1.0, -1.0, 1.2);

    assert_eq!(updated.len(), mesh.vertices.len());
    for (before, after) in mesh.vertices.chunks_exact(3).zip(updated.chunks_exact(3)) {
        assert_eq!(before[0], after[0]);
        assert_eq!(before[2], after[2]);
    }
    assert!(updated.chunks_exact(3).any(|v| v[1] != 0.0));
}

#[test]
fn test_resample_matches_wave_field() {
    let mesh = generate_water_plane(10.0, 10);
    let field = WaveField::default();
    let updated = resample_water_plane(&mesh, 10, 10.0, 0.0, 0.0, 0.6, &field);

    for v in updated.chunks_exact(3) {
        assert_eq!(v[1], field.height(v[0], v[2], 0.0, 0.0, 0.6));
    }
}

#[test]
fn test_default_resample_uses_default_field() {
    let mesh = generate_water_plane(6.0, 12);
    assert_eq!(
        update_water_plane_with_waves(&mesh, 12, 6.0, 0.5, 0.5, 0.9),
        resample_water_plane(&mesh, 12, 6.0, 0.5, 0.5, 0.9, &WaveField::default())
    );
}

#[test]
fn test_surface_flat_while_falling() {
    let surface = WaterSurface::new(10.0, 50);
    let vertices = surface.resample(&AnimationState::default(), &WaveField::default());
    assert_eq!(vertices, surface.mesh().vertices);
}

#[test]
fn test_surface_follows_impact_point() {
    let surface = WaterSurface::new(10.0, 50);
    let field = WaveField::new(WaveParams::default());
    let state = submerged_state(1.0, -2.0, 1.0);

    let vertices = surface.resample(&state, &field);
    // Center vertex of the 51 x 51 grid sits at the origin
    let center = (25 * 51 + 25) * 3;
    let (x, z) = (vertices[center], vertices[center + 2]);
    assert!(x.abs() < 1e-5 && z.abs() < 1e-5);

    let tsi = state.time_since_impact();
    assert_eq!(vertices[center + 1], field.height(x, z, 1.0, -2.0, tsi));
    assert_ne!(vertices[center + 1], 0.0);
    assert_eq!(surface.resolution(), 50);
    assert_eq!(surface.size(), 10.0);
}
