//! Frame clock
//!
//! Millisecond timestamps for [`super::AnimationController::update`].
//! Native builds measure from a monotonic `Instant`; browser builds read
//! `performance.now()` because `std::time::Instant` is unavailable on
//! `wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Monotonic millisecond source for the render loop.
#[derive(Debug, Clone)]
pub struct FrameClock {
    #[cfg(not(target_arch = "wasm32"))]
    start: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            start: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Milliseconds since page load.
    #[cfg(target_arch = "wasm32")]
    pub fn now_millis(&self) -> u64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map_or(0, |performance| performance.now().max(0.0) as u64)
    }
}
