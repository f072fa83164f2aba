//! Radial ripple wave field
//!
//! Closed-form height of a damped circular wave travelling outward from an
//! impact point. There is no grid state to integrate: the height at any
//! (x, z) depends only on the distance to the impact and the time since it.
//!
//! Shape of a single ring:
//!
//! ```text
//! R      = speed * t                      wavefront radius
//! h(d,t) = 0                              if t <= 0 or d > R
//!        = A * sin(k*d - speed*t)
//!            * exp(-damping * t)
//!            * (1 - d / max(R, min_radius))
//! ```
//!
//! The last factor tapers the amplitude to zero at the wavefront, so the hard
//! cutoff beyond `R` never shows a step.

use serde::{Deserialize, Serialize};

/// Wavefront expansion speed (m/s).
pub const WAVE_SPEED: f32 = 3.0;
/// Peak ripple height (meters).
pub const WAVE_AMPLITUDE: f32 = 1.2;
/// Spatial frequency of the ripples (radians per meter).
pub const WAVE_FREQUENCY: f32 = 2.5;
/// Exponential decay rate of the whole field (1/s).
pub const WAVE_DAMPING: f32 = 0.3;
/// Floor for the taper denominator right after the impact.
pub const MIN_WAVE_RADIUS: f32 = 0.1;
/// Delay between successive rings in the multi-ring pattern (seconds).
pub const RING_DELAY: f32 = 0.2;
/// Ring count used by [`WaveField::multi_ring_height_default`].
pub const DEFAULT_RING_COUNT: u32 = 3;

/// Tunable wave parameters. `Default` reproduces the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    pub speed: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub damping: f32,
    pub min_radius: f32,
    pub ring_delay: f32,
    pub ring_count: u32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            speed: WAVE_SPEED,
            amplitude: WAVE_AMPLITUDE,
            frequency: WAVE_FREQUENCY,
            damping: WAVE_DAMPING,
            min_radius: MIN_WAVE_RADIUS,
            ring_delay: RING_DELAY,
            ring_count: DEFAULT_RING_COUNT,
        }
    }
}

/// Stateless evaluator for the impact ripple.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveField {
    params: WaveParams,
}

impl WaveField {
    pub fn new(params: WaveParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Radius the wavefront has reached `time_since_impact` seconds after impact.
    pub fn wavefront_radius(&self, time_since_impact: f32) -> f32 {
        self.params.speed * time_since_impact.max(0.0)
    }

    /// Wave height at `(x, z)` for a single ring.
    ///
    /// Zero before the impact, at the impact instant, and anywhere the
    /// wavefront has not reached yet.
    pub fn height(
        &self,
        x: f32,
        z: f32,
        impact_x: f32,
        impact_z: f32,
        time_since_impact: f32,
    ) -> f32 {
        if time_since_impact <= 0.0 {
            return 0.0;
        }

        let p = &self.params;
        let dx = x - impact_x;
        let dz = z - impact_z;
        let distance = (dx * dx + dz * dz).sqrt();

        let wave_radius = p.speed * time_since_impact;
        if distance > wave_radius {
            return 0.0;
        }

        let distance_factor = distance / wave_radius.max(p.min_radius);
        let damping = (-p.damping * time_since_impact).exp();
        let phase = p.frequency * distance - p.speed * time_since_impact;

        p.amplitude * phase.sin() * damping * (1.0 - distance_factor)
    }

    /// Sum of `num_rings` staggered rings, each delayed by `ring_delay` and
    /// weighted by `1 / (ring + 1)`. Rings that have not started yet are skipped.
    pub fn multi_ring_height(
        &self,
        x: f32,
        z: f32,
        impact_x: f32,
        impact_z: f32,
        time_since_impact: f32,
        num_rings: u32,
    ) -> f32 {
        let mut total = 0.0;
        for ring in 0..num_rings {
            let adjusted_time = time_since_impact - ring as f32 * self.params.ring_delay;
            if adjusted_time > 0.0 {
                total += self.height(x, z, impact_x, impact_z, adjusted_time) / (ring + 1) as f32;
            }
        }
        total
    }

    /// [`Self::multi_ring_height`] with the configured ring count.
    pub fn multi_ring_height_default(
        &self,
        x: f32,
        z: f32,
        impact_x: f32,
        impact_z: f32,
        time_since_impact: f32,
    ) -> f32 {
        self.multi_ring_height(
            x,
            z,
            impact_x,
            impact_z,
            time_since_impact,
            self.params.ring_count,
        )
    }
}
