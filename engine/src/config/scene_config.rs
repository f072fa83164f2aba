//! Scene Configuration
//!
//! Presentation settings for the splash scene: mesh resolution, camera,
//! lighting and materials. None of these affect the simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Phong material for one mesh.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    /// Base color (RGB, linear)
    pub color: Vec3,
    /// Ambient light strength
    pub ambient: f32,
    /// Specular highlight strength
    pub specular_strength: f32,
    /// Specular exponent
    pub shininess: f32,
    /// Output alpha (water is slightly transparent)
    pub alpha: f32,
    /// Line color used in wireframe mode
    pub wireframe_color: Vec3,
}

impl MaterialConfig {
    /// Opaque red with a tight highlight.
    pub fn sphere() -> Self {
        Self {
            color: Vec3::new(1.0, 0.3, 0.3),
            ambient: 0.3,
            specular_strength: 0.5,
            shininess: 32.0,
            alpha: 1.0,
            wireframe_color: Vec3::ONE,
        }
    }

    /// Translucent blue, shinier than the sphere.
    pub fn water() -> Self {
        Self {
            color: Vec3::new(0.0, 0.5, 0.8),
            ambient: 0.4,
            specular_strength: 0.8,
            shininess: 64.0,
            alpha: 0.9,
            wireframe_color: Vec3::new(0.0, 1.0, 1.0),
        }
    }
}

/// Everything the renderer needs that is not simulation state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    // Meshes
    /// Azimuthal segments of the sphere mesh
    pub sphere_segments: u32,
    /// Polar rings of the sphere mesh
    pub sphere_rings: u32,
    /// Edge length of the square water plane (meters)
    pub water_size: f32,
    /// Grid cells per side of the water plane
    pub water_resolution: u32,

    // Camera
    /// Eye position
    pub camera_position: Vec3,
    /// Look-at point
    pub camera_target: Vec3,
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,

    // Lighting
    /// Point light position
    pub light_position: Vec3,
    /// Background clear color (RGB)
    pub clear_color: Vec3,

    // Materials
    pub sphere_material: MaterialConfig,
    pub water_material: MaterialConfig,
}

impl Default for SceneConfig {
    /// Sky-blue backdrop, red sphere, translucent blue water.
    fn default() -> Self {
        Self {
            sphere_segments: 30,
            sphere_rings: 30,
            water_size: 10.0,
            water_resolution: 50,

            camera_position: Vec3::new(0.0, 3.0, 8.0),
            camera_target: Vec3::ZERO,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,

            light_position: Vec3::new(5.0, 5.0, 5.0),
            clear_color: Vec3::new(0.53, 0.81, 0.92),

            sphere_material: MaterialConfig::sphere(),
            water_material: MaterialConfig::water(),
        }
    }
}
