//! Physics type re-exports from glam
//!
//! `Vec3` is the simulation's 3-component value type. It is `Copy`, so every
//! arithmetic operation yields a fresh value, and `normalize_or_zero` is the
//! guarded normalization used wherever a zero-length vector can appear.

pub use glam::Vec3;
