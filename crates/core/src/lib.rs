//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: piece geometry, the
//! board, shape selection, scoring and the per-tick state machine. It performs no
//! I/O, which makes it:
//!
//! - **Deterministic**: the same seed and command stream replay the same game
//! - **Testable**: every rule is reachable through plain function calls
//! - **Portable**: any driver (terminal, headless, tests) can run it
//!
//! # Module Structure
//!
//! - [`pieces`]: 16-bit shape masks and the closed-form rotation index
//! - [`board`]: `rows x cols` grid of locked cells, fit predicate and line clearing
//! - [`rng`]: the [`ShapeSource`] seam plus a seeded LCG and a fixed sequence source
//! - [`scoring`]: the fixed line clear table
//! - [`config`]: board size, gravity cadence and seed, with environment overrides
//! - [`game_state`]: [`Game`], the state machine driven by [`Game::tick`]
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{Game, GameConfig, SimpleRng};
//! use falling_blocks_core::types::Command;
//!
//! let mut game = Game::new(GameConfig::default(), SimpleRng::new(12345)).unwrap();
//!
//! assert!(game.tick(Command::MoveRight));
//! assert!(game.tick(Command::RotateClockwise));
//! assert!(game.tick(Command::Drop));
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! There is no clock inside the engine. Each [`Game::tick`] decrements the drop
//! timer; when it runs out the piece falls one row (or locks). The driver decides
//! how long a tick lasts.

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_state::{Game, Tetromino};
pub use pieces::{get_shape, rotation_index};
pub use rng::{SequenceSource, ShapeSource, SimpleRng};
pub use scoring::line_clear_score;
