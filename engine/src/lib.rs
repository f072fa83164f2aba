//! Sphere Splash Engine Library
//!
//! A sphere falls under gravity into a body of water; on impact a radial
//! ripple field spreads from the entry point and the sphere sinks. The
//! simulation core is pure and platform-independent. The render layer draws
//! it with wgpu on desktop and in the browser.
//!
//! # Modules
//!
//! - [`physics`] - Animation state and the pure fall/impact/sink step
//! - [`water`] - Closed-form radial wave field
//! - [`mesh`] - UV sphere and water grid generation, per-frame resampling
//! - [`animation`] - Wall-clock driven controller and frame clock
//! - [`camera`] - Fixed look-at camera
//! - [`config`] - JSON-overridable configuration
//! - [`input`] - Platform-agnostic key bindings
//! - [`render`] - wgpu context, pipelines and shaders
//! - [`logging`] - Logger setup for native and web
//!
//! # Example
//!
//! ```ignore
//! use sphere_splash_engine::animation::{AnimationController, FrameClock};
//! use sphere_splash_engine::mesh::WaterSurface;
//! use sphere_splash_engine::water::WaveField;
//!
//! let clock = FrameClock::new();
//! let mut controller = AnimationController::default();
//! let water = WaterSurface::new(10.0, 50);
//! let field = WaveField::default();
//!
//! // Once per frame
//! let state = controller.update(clock.now_millis());
//! let vertices = water.resample(&state, &field);
//! renderer.update_water(&gpu, &vertices);
//! ```

pub mod animation;
pub mod camera;
pub mod config;
pub mod input;
pub mod logging;
pub mod mesh;
pub mod physics;
pub mod render;
pub mod water;

// Re-export the types the shell touches every frame
pub use animation::{AnimationController, FrameClock};
pub use config::{ConfigError, SplashConfig};
pub use mesh::{Mesh, WaterSurface};
pub use physics::{AnimationState, PhysicsSimulation, SpherePhase};
pub use water::WaveField;
