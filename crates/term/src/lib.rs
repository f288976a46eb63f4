//! Terminal presentation for the falling blocks game.
//!
//! Rendering is split in two steps: [`GameView`] turns a read-only game into a
//! [`FrameBuffer`] without touching the terminal, then [`TerminalRenderer`] writes
//! the glyphs that changed since the last frame.
//!
//! Each board cell is drawn two columns wide so blocks look roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
