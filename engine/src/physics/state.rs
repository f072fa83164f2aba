//! Animation state snapshot
//!
//! A falling sphere is in exactly one of two phases. The impact record only
//! exists once the sphere has reached the water, so it lives inside the
//! `Submerged` variant instead of sitting next to a boolean flag.

use glam::Vec3;

/// Gravity acceleration along Y (m/s²).
pub const GRAVITY: f32 = -9.81;

/// Y coordinate of the undisturbed water surface.
pub const WATER_LEVEL: f32 = 0.0;

/// Radius of the falling sphere (meters).
pub const DEFAULT_SPHERE_RADIUS: f32 = 0.5;

/// Where every fall cycle starts.
pub const DEFAULT_START_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);

/// The moment the sphere's lower surface first reached the water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Simulation time of the impact (seconds since the cycle started)
    pub time: f32,
    /// Wave-field origin, y pinned to the water level
    pub position: Vec3,
}

/// Phase of the current fall cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpherePhase {
    /// Accelerating under gravity toward the water
    #[default]
    Falling,
    /// Sinking with decaying velocity after the impact
    Submerged(Impact),
}

/// Immutable snapshot of the simulation, produced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Sphere center in world space (meters)
    pub sphere_position: Vec3,
    /// Sphere velocity (meters/second)
    pub sphere_velocity: Vec3,
    /// Sphere radius, constant for a run (meters)
    pub sphere_radius: f32,
    /// Falling or submerged
    pub phase: SpherePhase,
    /// Simulation clock, advanced by each accepted delta (seconds)
    pub current_time: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            sphere_position: DEFAULT_START_POSITION,
            sphere_velocity: Vec3::ZERO,
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            phase: SpherePhase::Falling,
            current_time: 0.0,
        }
    }
}

impl AnimationState {
    /// Whether the sphere has crossed the water surface this cycle.
    pub fn has_hit_water(&self) -> bool {
        matches!(self.phase, SpherePhase::Submerged(_))
    }

    /// The impact record, if the sphere has hit the water.
    pub fn impact(&self) -> Option<&Impact> {
        match &self.phase {
            SpherePhase::Falling => None,
            SpherePhase::Submerged(impact) => Some(impact),
        }
    }

    /// Impact time, or 0 while still falling.
    pub fn impact_time(&self) -> f32 {
        self.impact().map_or(0.0, |impact| impact.time)
    }

    /// Impact position, or the origin while still falling.
    pub fn impact_position(&self) -> Vec3 {
        self.impact().map_or(Vec3::ZERO, |impact| impact.position)
    }

    /// Seconds elapsed since the impact, or 0 while still falling.
    pub fn time_since_impact(&self) -> f32 {
        match self.impact() {
            Some(impact) => self.current_time - impact.time,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AnimationState::default();
        assert_eq!(state.sphere_position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(state.sphere_velocity, Vec3::ZERO);
        assert_eq!(state.sphere_radius, 0.5);
        assert!(!state.has_hit_water());
        assert_eq!(state.current_time, 0.0);
    }

    #[test]
    fn test_falling_has_no_impact() {
        let state = AnimationState {
            current_time: 3.0,
            ..Default::default()
        };
        assert!(state.impact().is_none());
        assert_eq!(state.impact_time(), 0.0);
        assert_eq!(state.impact_position(), Vec3::ZERO);
        assert_eq!(state.time_since_impact(), 0.0);
    }

    #[test]
    fn test_submerged_accessors() {
        let state = AnimationState {
            phase: SpherePhase::Submerged(Impact {
                time: 1.5,
                position: Vec3::new(2.0, WATER_LEVEL, -1.0),
            }),
            current_time: 4.0,
            ..Default::default()
        };
        assert!(state.has_hit_water());
        assert_eq!(state.impact_time(), 1.5);
        assert_eq!(state.impact_position(), Vec3::new(2.0, 0.0, -1.0));
        assert!((state.time_since_impact() - 2.5).abs() < 1e-6);
    }
}
