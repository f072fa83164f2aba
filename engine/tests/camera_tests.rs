//! Camera Tests - View and Projection Matrices
//!
//! Integration tests for the fixed scene camera.

use glam::{Vec3, Vec4};
use sphere_splash_engine::camera::SceneCamera;
use sphere_splash_engine::config::SceneConfig;

fn project(camera: &SceneCamera, aspect: f32, point: Vec3) -> Vec3 {
    let clip = camera.view_projection(aspect) * Vec4::new(point.x, point.y, point.z, 1.0);
    clip.truncate() / clip.w
}

#[test]
fn test_default_camera_matches_scene() {
    let camera = SceneCamera::default();
    assert_eq!(camera.position, Vec3::new(0.0, 3.0, 8.0));
    assert_eq!(camera.target, Vec3::ZERO);
    assert!((camera.fov_y - 45.0f32.to_radians()).abs() < 1e-6);
    assert_eq!(camera.near, 0.1);
    assert_eq!(camera.far, 100.0);
}

#[test]
fn test_forward_points_at_target() {
    let camera = SceneCamera::default();
    let expected = Vec3::new(0.0, -3.0, -8.0).normalize();
    assert!((camera.forward() - expected).length() < 1e-6);
}

#[test]
fn test_target_projects_to_screen_center() {
    let camera = SceneCamera::default();
    let ndc = project(&camera, 800.0 / 600.0, camera.target);

    assert!(ndc.x.abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn test_view_space_looks_down_negative_z() {
    let camera = SceneCamera::default();
    let view_target = camera.view_matrix().transform_point3(camera.target);
    let distance = (camera.target - camera.position).length();

    assert!(view_target.x.abs() < 1e-5);
    assert!(view_target.y.abs() < 1e-5);
    assert!((view_target.z + distance).abs() < 1e-4);
}

#[test]
fn test_depth_range_zero_to_one() {
    let camera = SceneCamera::default();
    let near_point = camera.position + camera.forward() * camera.near;
    let far_point = camera.position + camera.forward() * camera.far;

    assert!(project(&camera, 1.0, near_point).z.abs() < 1e-4);
    assert!((project(&camera, 1.0, far_point).z - 1.0).abs() < 1e-4);
}

#[test]
fn test_sphere_start_is_above_water_on_screen() {
    let camera = SceneCamera::default();
    let sphere = project(&camera, 1.0, Vec3::new(0.0, 5.0, 0.0));
    let water = project(&camera, 1.0, Vec3::ZERO);
    assert!(sphere.y > water.y);
}

#[test]
fn test_from_config() {
    let config = SceneConfig {
        camera_position: Vec3::new(10.0, 10.0, 10.0),
        fov_degrees: 60.0,
        ..Default::default()
    };
    let camera = SceneCamera::from_config(&config);
    assert_eq!(camera.position, Vec3::new(10.0, 10.0, 10.0));
    assert!((camera.fov_y - 60.0f32.to_radians()).abs() < 1e-6);
}
