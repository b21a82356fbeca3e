//! # Game Configuration
//!
//! The immutable setup the host assembles once at startup and hands to the
//! game: board dimensions, drop speed multipliers, box value rules, the
//! pending-step queue capacity, and the box palette.
//!
//! Nothing in here is a process-wide global. Configuration is read from a
//! TOML file (or [`GameConfig::default`]), validated eagerly, and never
//! mutated afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::BoxPalette;
use crate::rng::MAX_SPAWN_VALUE;

/// Default board rows.
pub const DEFAULT_ROWS: usize = 9;

/// Default board columns.
pub const DEFAULT_COLUMNS: usize = 6;

/// Default speed multiplier for the fast drop mode.
pub const DEFAULT_FAST_MULTIPLIER: u32 = 2;

/// Default speed multiplier for the slow drop mode.
pub const DEFAULT_SLOW_MULTIPLIER: u32 = 3;

/// Default highest box value, reachable only by merging.
pub const DEFAULT_MAX_BOX_VALUE: u8 = 20;

/// Default capacity of the pending-step queue.
pub const DEFAULT_TASK_CAPACITY: usize = 128;

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Read {
        /// Path of the file that failed to read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    /// The board would have no cells.
    #[error("board dimensions must be at least 1x1, got {rows}x{columns}")]
    InvalidBoard {
        /// Configured rows.
        rows: usize,
        /// Configured columns.
        columns: usize,
    },

    /// A speed multiplier of zero would stop the game clock.
    #[error("speed multipliers must be at least 1, got fast {fast} / slow {slow}")]
    InvalidSpeed {
        /// Configured fast multiplier.
        fast: u32,
        /// Configured slow multiplier.
        slow: u32,
    },

    /// The merge maximum leaves nothing to merge toward.
    #[error("max box value must be at least 2, got {0}")]
    InvalidMaxValue(u8),

    /// The spawn cap must leave the top value to merging.
    #[error("max spawn value {max_spawn_value} must be in 1..{max_value}")]
    InvalidSpawnCap {
        /// Configured spawn cap.
        max_spawn_value: u8,
        /// Configured merge maximum.
        max_value: u8,
    },

    /// The palette does not cover the box value range.
    #[error("palette has {got} styles but the box range needs {expected}")]
    PaletteSize {
        /// Styles the box range requires.
        expected: usize,
        /// Styles the palette carries.
        got: usize,
    },

    /// The pending-step queue would hold nothing.
    #[error("task queue capacity must be at least 1")]
    InvalidTaskCapacity,
}

/// Board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// Drop speed multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeedConfig {
    /// Multiplier applied to the base fall rate in fast drop mode.
    pub fast_multiplier: u32,
    /// Multiplier applied to the base fall interval in slow drop mode.
    pub slow_multiplier: u32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            fast_multiplier: DEFAULT_FAST_MULTIPLIER,
            slow_multiplier: DEFAULT_SLOW_MULTIPLIER,
        }
    }
}

/// Box value rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxRules {
    /// Highest value a box can reach by merging.
    pub max_value: u8,
    /// Highest value a box can spawn with. Must stay below `max_value`.
    pub max_spawn_value: u8,
}

impl Default for BoxRules {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_BOX_VALUE,
            max_spawn_value: MAX_SPAWN_VALUE,
        }
    }
}

/// Complete game configuration, assembled once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Capacity of the pending-step queue.
    ///
    /// Declared before the table-valued sections so the TOML form keeps
    /// root-level keys ahead of its tables.
    pub task_capacity: usize,
    /// Board dimensions.
    pub board: BoardConfig,
    /// Drop speed multipliers.
    pub speed: SpeedConfig,
    /// Box value rules.
    pub boxes: BoxRules,
    /// Face and numeral colors per box value.
    pub palette: BoxPalette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            task_capacity: DEFAULT_TASK_CAPACITY,
            board: BoardConfig::default(),
            speed: SpeedConfig::default(),
            boxes: BoxRules::default(),
            palette: BoxPalette::classic(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a configuration from a TOML document.
    ///
    /// Missing sections fall back to the classic defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and the specific
    /// validation variant for semantically invalid values.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, plus the
    /// conditions of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&raw)?;
        tracing::info!(
            "game config loaded from {}: {}x{} board, {} box values",
            path.display(),
            config.board.rows,
            config.board.columns,
            config.boxes.max_value
        );
        Ok(config)
    }

    /// Checks every cross-field rule.
    ///
    /// # Errors
    ///
    /// Returns the variant naming the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 || self.board.columns == 0 {
            return Err(ConfigError::InvalidBoard {
                rows: self.board.rows,
                columns: self.board.columns,
            });
        }

        if self.speed.fast_multiplier == 0 || self.speed.slow_multiplier == 0 {
            return Err(ConfigError::InvalidSpeed {
                fast: self.speed.fast_multiplier,
                slow: self.speed.slow_multiplier,
            });
        }

        if self.boxes.max_value < 2 {
            return Err(ConfigError::InvalidMaxValue(self.boxes.max_value));
        }

        if self.boxes.max_spawn_value == 0 || self.boxes.max_spawn_value >= self.boxes.max_value {
            return Err(ConfigError::InvalidSpawnCap {
                max_spawn_value: self.boxes.max_spawn_value,
                max_value: self.boxes.max_value,
            });
        }

        if self.palette.len() != usize::from(self.boxes.max_value) {
            return Err(ConfigError::PaletteSize {
                expected: usize::from(self.boxes.max_value),
                got: self.palette.len(),
            });
        }

        if self.task_capacity == 0 {
            return Err(ConfigError::InvalidTaskCapacity);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board.rows, 9);
        assert_eq!(config.board.columns, 6);
        assert_eq!(config.boxes.max_value, 20);
        assert_eq!(config.boxes.max_spawn_value, 19);
        assert_eq!(config.palette.len(), 20);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_document_overrides_sections() {
        let config = GameConfig::from_toml_str(
            r#"
            [board]
            rows = 12
            columns = 8

            [speed]
            fast_multiplier = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.board.rows, 12);
        assert_eq!(config.board.columns, 8);
        assert_eq!(config.speed.fast_multiplier, 4);
        // Untouched sections keep their defaults.
        assert_eq!(config.speed.slow_multiplier, 3);
        assert_eq!(config.boxes.max_value, 20);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = GameConfig::from_toml_str("gravity = 9.8\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_board_dimension_is_rejected() {
        let result = GameConfig::from_toml_str("[board]\nrows = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBoard { rows: 0, columns: 6 })
        ));
    }

    #[test]
    fn test_zero_multiplier_is_rejected() {
        let result = GameConfig::from_toml_str("[speed]\nslow_multiplier = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidSpeed { .. })));
    }

    #[test]
    fn test_spawn_cap_must_stay_below_max_value() {
        let result = GameConfig::from_toml_str("[boxes]\nmax_spawn_value = 20\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSpawnCap {
                max_spawn_value: 20,
                max_value: 20
            })
        ));
    }

    #[test]
    fn test_palette_must_cover_box_range() {
        // Shrinking the box range without swapping the palette is an error.
        let result = GameConfig::from_toml_str("[boxes]\nmax_value = 10\nmax_spawn_value = 9\n");
        assert!(matches!(
            result,
            Err(ConfigError::PaletteSize {
                expected: 10,
                got: 20
            })
        ));
    }

    #[test]
    fn test_zero_task_capacity_is_rejected() {
        let result = GameConfig::from_toml_str("task_capacity = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidTaskCapacity)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::default();
        let document = toml::to_string(&config).unwrap();
        let reparsed = GameConfig::from_toml_str(&document).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_palette_override_from_toml() {
        let config = GameConfig::from_toml_str(
            r##"
            [boxes]
            max_value = 2
            max_spawn_value = 1

            [[palette]]
            body = "#ff0000"
            text = "white"

            [[palette]]
            body = "#00ff00"
            text = "#000000"
            "##,
        )
        .unwrap();

        assert_eq!(config.palette.len(), 2);
        let style = config.palette.style_for(1).unwrap();
        assert_eq!(style.body, crate::palette::Color::rgb(0xff, 0, 0));
        assert_eq!(style.text, crate::palette::Color::WHITE);
    }
}
