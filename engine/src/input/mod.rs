//! Input Module
//!
//! Platform-agnostic key handling. This module is decoupled from any specific
//! windowing system (like winit); the shell translates native key codes into
//! [`KeyCode`] and asks [`KeyBindings`] for the bound [`SceneAction`].
//!
//! # Example
//!
//! ```rust,ignore
//! use sphere_splash_engine::input::{KeyBindings, KeyCode, SceneAction};
//!
//! let bindings = KeyBindings::new();
//! if bindings.get_action(KeyCode::R) == Some(SceneAction::Reset) {
//!     controller.reset();
//! }
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::{KeyBindings, SceneAction};
pub use keyboard::KeyCode;
