//! Animation Module
//!
//! Frame-driven orchestration of the simulation: the platform loop calls
//! [`AnimationController::update`] once per rendered frame with a timestamp
//! from [`FrameClock`].

pub mod clock;
pub mod controller;

pub use clock::FrameClock;
pub use controller::{AUTO_RESET_AFTER, AnimationController, ControllerConfig, MAX_FRAME_DELTA};
