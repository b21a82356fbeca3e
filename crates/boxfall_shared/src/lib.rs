//! # Boxfall Shared
//!
//! Common types used by both the game logic and the UI host.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - any UI toolkit or windowing crate
//! - any rendering crate
//!
//! Rendering and input belong to the host shell. This crate carries the
//! board, the math, the box palette, and the startup configuration.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod grid;
pub mod math;
pub mod palette;
pub mod rng;
pub mod state;

pub use config::{BoardConfig, BoxRules, ConfigError, GameConfig, SpeedConfig};
pub use grid::{compact, make_filled, Direction, Grid};
pub use math::{squares_overlap, Point};
pub use palette::{BoxPalette, BoxStyle, Color, PaletteError};
pub use rng::{draw_spawn_value, SpawnError, SpawnRng, MAX_SPAWN_VALUE};
pub use state::GameState;
