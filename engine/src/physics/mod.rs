//! Physics module for the splash simulation
//!
//! A point-mass sphere falls under gravity, hits the water plane once per
//! cycle, and then sinks with exponentially decaying velocity.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Times in seconds
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`state`] - Immutable animation snapshot and phase enum
//! - [`simulation`] - The pure `update(state, dt)` step

pub mod simulation;
pub mod state;
pub mod types;

// Re-export commonly used types at the physics module level
pub use simulation::{PhysicsSimulation, SimulationConfig, POST_IMPACT_SINK_SPEED, SINK_DECAY};
pub use state::{AnimationState, GRAVITY, Impact, SpherePhase, WATER_LEVEL};
pub use types::Vec3;
