//! Water Module
//!
//! Closed-form ripple field seeded by the sphere impact. The water plane
//! mesh samples it once per frame (see [`crate::mesh::water_plane`]).

pub mod wave_field;

pub use wave_field::{
    DEFAULT_RING_COUNT, MIN_WAVE_RADIUS, RING_DELAY, WAVE_AMPLITUDE, WAVE_DAMPING, WAVE_FREQUENCY,
    WAVE_SPEED, WaveField, WaveParams,
};
