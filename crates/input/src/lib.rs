//! Terminal input module (engine-facing).
//!
//! This crate is intentionally independent of any UI framework beyond `crossterm`'s
//! event types. It maps key events into the single [`crate::types::Command`] the
//! engine consumes per tick, and paces the ticks themselves with [`TickClock`].

pub mod map;
pub mod pacing;

pub use falling_blocks_types as types;

pub use map::{map_key, should_quit};
pub use pacing::TickClock;
