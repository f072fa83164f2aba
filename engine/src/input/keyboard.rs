//! Keyboard Input Module
//!
//! Generic key codes, decoupled from winit. The platform shell converts its
//! native key events into these before looking up bindings.

/// Keys the splash scene can bind, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    R,
    W,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Every key the shell translates, excluding [`KeyCode::Unknown`].
    pub const ALL: [KeyCode; 3] = [KeyCode::R, KeyCode::W, KeyCode::Escape];

    /// Human-readable name for help output.
    pub fn label(self) -> &'static str {
        match self {
            KeyCode::R => "R",
            KeyCode::W => "W",
            KeyCode::Escape => "ESC",
            KeyCode::Unknown => "?",
        }
    }
}
