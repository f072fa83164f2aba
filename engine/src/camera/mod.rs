//! Camera Module
//!
//! View and projection math for the scene. Window-system agnostic: the
//! renderer only asks for a view-projection matrix at the current aspect.

pub mod scene_camera;

pub use scene_camera::SceneCamera;
