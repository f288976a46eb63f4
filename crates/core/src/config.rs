//! Engine configuration
//!
//! `GameConfig` carries the board size, the gravity cadence and an optional RNG seed.
//! Values can be read from environment variables; anything missing or unparsable falls
//! back to the default.

use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_DROP_TICKS, DEFAULT_ROWS};

/// Smallest accepted board side: the 4x4 piece frame must fit at spawn
pub const MIN_DIMENSION: u16 = 4;

/// Largest accepted board side; keeps every coordinate well inside `i16`
pub const MAX_DIMENSION: u16 = 1024;

/// Reasons a game cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be between 4x4 and 1024x1024 cells, got {rows}x{cols}")]
    InvalidDimensions { rows: u16, cols: u16 },
    #[error("drop ticks must be at least 1")]
    ZeroDropTicks,
    #[error("preset board is {board_rows}x{board_cols} but the config asks for {rows}x{cols}")]
    BoardMismatch {
        rows: u16,
        cols: u16,
        board_rows: u16,
        board_cols: u16,
    },
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    /// Ticks between two gravity steps
    pub drop_ticks: u32,
    /// Seed for the default shape source; `None` lets the driver pick one
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            drop_ticks: DEFAULT_DROP_TICKS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_drop_ticks(mut self, drop_ticks: u32) -> Self {
        self.drop_ticks = drop_ticks;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create from environment variables
    ///
    /// - `FALLING_BLOCKS_ROWS`
    /// - `FALLING_BLOCKS_COLS`
    /// - `FALLING_BLOCKS_DROP_TICKS`
    /// - `FALLING_BLOCKS_SEED`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse().ok());

        Self {
            rows: parse("FALLING_BLOCKS_ROWS").unwrap_or(defaults.rows),
            cols: parse("FALLING_BLOCKS_COLS").unwrap_or(defaults.cols),
            drop_ticks: lookup("FALLING_BLOCKS_DROP_TICKS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.drop_ticks),
            seed: lookup("FALLING_BLOCKS_SEED").and_then(|s| s.trim().parse().ok()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.rows) || !range.contains(&self.cols) {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.drop_ticks == 0 {
            return Err(ConfigError::ZeroDropTicks);
        }
        Ok(())
    }
}
