//! Falling sphere simulation
//!
//! Pure state transition for a point-mass sphere dropped into water.
//! No external physics dependencies - explicit Euler steps and a two-phase
//! state machine.
//!
//! # Example
//!
//! ```ignore
//! use sphere_splash_engine::physics::{PhysicsSimulation, AnimationState};
//!
//! let physics = PhysicsSimulation::default();
//! let mut state = physics.reset();
//! for _ in 0..60 {
//!     state = physics.update(&state, 1.0 / 60.0);
//! }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::{
    AnimationState, DEFAULT_SPHERE_RADIUS, DEFAULT_START_POSITION, GRAVITY, Impact, SpherePhase,
    WATER_LEVEL,
};

/// Downward speed the sphere is given at the moment of impact (m/s).
pub const POST_IMPACT_SINK_SPEED: f32 = 0.8;

/// Per-step velocity multiplier while submerged.
pub const SINK_DECAY: f32 = 0.995;

/// Parameters of the fall and sink phases.
///
/// `Default` reproduces the tuned constants exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gravity acceleration along Y (m/s²)
    pub gravity: f32,
    /// Y coordinate of the water surface
    pub water_level: f32,
    /// Sphere center at the start of each cycle
    pub start_position: Vec3,
    /// Sphere radius (meters)
    pub sphere_radius: f32,
    /// Downward speed forced on impact, replacing the integrated velocity (m/s)
    pub sink_speed: f32,
    /// Velocity multiplier applied once per submerged step
    pub sink_decay: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            water_level: WATER_LEVEL,
            start_position: DEFAULT_START_POSITION,
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            sink_speed: POST_IMPACT_SINK_SPEED,
            sink_decay: SINK_DECAY,
        }
    }
}

/// Steps an [`AnimationState`] forward in time.
///
/// Holds only configuration; every call produces a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct PhysicsSimulation {
    config: SimulationConfig,
}

impl PhysicsSimulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance `state` by `dt` seconds.
    ///
    /// Falling uses semi-implicit Euler (velocity first, then position).
    /// The step whose integrated position puts the sphere's lower surface at
    /// or below the water level records the impact, pins the sphere to the
    /// surface and replaces its velocity with the fixed sink speed.
    /// Submerged steps move with the current velocity, then decay it.
    pub fn update(&self, state: &AnimationState, dt: f32) -> AnimationState {
        let config = &self.config;

        let (position, velocity, phase) = match state.phase {
            SpherePhase::Falling => {
                let velocity = state.sphere_velocity + Vec3::new(0.0, config.gravity * dt, 0.0);
                let position = state.sphere_position + velocity * dt;

                if position.y - state.sphere_radius <= config.water_level {
                    let impact = Impact {
                        time: state.current_time + dt,
                        position: Vec3::new(position.x, config.water_level, position.z),
                    };
                    (
                        impact.position,
                        Vec3::new(0.0, -config.sink_speed, 0.0),
                        SpherePhase::Submerged(impact),
                    )
                } else {
                    (position, velocity, SpherePhase::Falling)
                }
            }
            SpherePhase::Submerged(impact) => {
                let position = state.sphere_position + state.sphere_velocity * dt;
                let velocity = state.sphere_velocity * config.sink_decay;
                (position, velocity, SpherePhase::Submerged(impact))
            }
        };

        AnimationState {
            sphere_position: position,
            sphere_velocity: velocity,
            sphere_radius: state.sphere_radius,
            phase,
            current_time: state.current_time + dt,
        }
    }

    /// The state every fall cycle starts from.
    pub fn reset(&self) -> AnimationState {
        AnimationState {
            sphere_position: self.config.start_position,
            sphere_velocity: Vec3::ZERO,
            sphere_radius: self.config.sphere_radius,
            phase: SpherePhase::Falling,
            current_time: 0.0,
        }
    }
}
