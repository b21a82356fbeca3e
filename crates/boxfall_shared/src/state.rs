//! Game lifecycle states.
//!
//! The host drives the transitions; this enum only names the states and
//! enforces nothing.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameState {
    /// No game exists yet.
    #[default]
    Inactive = 0,
    /// A game has been created but not started.
    Created = 1,
    /// The game is running.
    Running = 2,
    /// The game is paused.
    Paused = 3,
}

impl GameState {
    /// Converts from u8 to GameState.
    ///
    /// Unknown discriminants map to `Inactive`.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Created,
            2 => Self::Running,
            3 => Self::Paused,
            _ => Self::Inactive,
        }
    }

    /// Returns the raw discriminant.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns true once a game exists and has been started, paused or not.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}
