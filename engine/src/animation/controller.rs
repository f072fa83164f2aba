//! Animation Controller
//!
//! Owns the current [`AnimationState`] and turns wall-clock frame timestamps
//! into bounded simulation steps.
//!
//! ## Time stepping
//! - The first `update` after construction or reset only records a baseline.
//! - Deltas are clamped to `[0, max_delta]`; a zero or backwards delta has no
//!   effect on the state.
//! - Once the sphere has been submerged for longer than `auto_reset_after`
//!   seconds the cycle restarts from the default state.

use serde::{Deserialize, Serialize};

use crate::physics::{AnimationState, PhysicsSimulation, SimulationConfig};

/// Largest simulation step accepted from a single frame (seconds).
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Seconds of submersion after which the cycle restarts.
pub const AUTO_RESET_AFTER: f32 = 12.0;

/// Time-stepping and reset policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Delta clamp (seconds)
    pub max_delta: f32,
    /// Submersion time before the automatic restart (seconds)
    pub auto_reset_after: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_delta: MAX_FRAME_DELTA,
            auto_reset_after: AUTO_RESET_AFTER,
        }
    }
}

/// Single writer of the animation state.
#[derive(Debug, Clone)]
pub struct AnimationController {
    physics: PhysicsSimulation,
    config: ControllerConfig,
    state: AnimationState,
    /// Timestamp of the previous `update`, `None` until a baseline is taken
    last_update_ms: Option<u64>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(SimulationConfig::default(), ControllerConfig::default())
    }
}

impl AnimationController {
    pub fn new(simulation: SimulationConfig, config: ControllerConfig) -> Self {
        let physics = PhysicsSimulation::new(simulation);
        let state = physics.reset();
        Self {
            physics,
            config,
            state,
            last_update_ms: None,
        }
    }

    /// Start from an arbitrary snapshot instead of the default state.
    pub fn with_state(mut self, state: AnimationState) -> Self {
        self.state = state;
        self
    }

    /// Advance the animation to the frame at `now_ms`.
    ///
    /// Returns the snapshot to render for this frame.
    pub fn update(&mut self, now_ms: u64) -> AnimationState {
        let Some(last_ms) = self.last_update_ms else {
            self.last_update_ms = Some(now_ms);
            return self.state;
        };

        let delta = (now_ms.saturating_sub(last_ms) as f32 / 1000.0).clamp(0.0, self.config.max_delta);
        self.last_update_ms = Some(now_ms);

        if delta > 0.0 {
            let was_submerged = self.state.has_hit_water();
            self.state = self.physics.update(&self.state, delta);

            if !was_submerged {
                if let Some(impact) = self.state.impact() {
                    log::info!(
                        "[Splash] Impact at ({:.2}, {:.2}) t={:.3}s",
                        impact.position.x,
                        impact.position.z,
                        impact.time
                    );
                }
            }
        }

        if self.state.has_hit_water()
            && self.state.current_time - self.state.impact_time() > self.config.auto_reset_after
        {
            log::info!(
                "[Splash] Auto-reset after {:.1}s submerged",
                self.config.auto_reset_after
            );
            self.reset();
        }

        self.state
    }

    /// Restart the fall cycle. The next `update` takes a new baseline.
    pub fn reset(&mut self) {
        self.state = self.physics.reset();
        self.last_update_ms = None;
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Seconds since impact, or 0 while the sphere is still falling.
    pub fn time_since_impact(&self) -> f32 {
        self.state.time_since_impact()
    }

    /// Whether the next `update` will only record a baseline.
    pub fn awaiting_baseline(&self) -> bool {
        self.last_update_ms.is_none()
    }
}
