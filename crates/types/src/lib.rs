//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield size is chosen at construction time. The classic default is
//! 22 rows by 10 columns:
//!
//! - **Rows**: indexed `0..rows`, row 0 is the top
//! - **Columns**: indexed `0..cols`, column 0 is the left wall
//! - **Spawn position**: row 0, column `cols / 2 - 2` (top-left of the 4x4 piece frame)
//!
//! # Timing
//!
//! The engine has no notion of wall-clock time. Gravity is a countdown of
//! discrete ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_TICKS` | 500 | Ticks between gravity steps |
//! | `DEFAULT_TICK_US` | 1000 | Driver sleep per tick (microseconds) |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Cell, Command, PieceKind, Rotation};
//!
//! // Piece letters as used in board pictures
//! assert_eq!(PieceKind::from_letter('t'), Some(PieceKind::T));
//!
//! // Rotate
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//!
//! // Cells are either empty or hold the kind of the piece that locked there
//! assert!(Cell::Empty.is_empty());
//! assert!(Cell::Block(PieceKind::I).is_filled());
//!
//! // No key this tick
//! assert_eq!(Command::default(), Command::None);
//! ```

/// Default board height in cells
pub const DEFAULT_ROWS: u16 = 22;

/// Default board width in cells
pub const DEFAULT_COLS: u16 = 10;

/// Ticks between two gravity steps
pub const DEFAULT_DROP_TICKS: u32 = 500;

/// Driver sleep per tick in microseconds (500 ticks ≈ half a second per row)
pub const DEFAULT_TICK_US: u64 = 1000;

/// Number of top rows inspected by the game-over check
pub const TOP_OUT_ROWS: u16 = 2;

/// Number of distinct piece kinds
pub const PIECE_KIND_COUNT: usize = 7;

/// Line clear scoring table, indexed by lines cleared in a single tick:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds, in canonical id order
///
/// - **I**: 4-long bar
/// - **J**: hook, foot on the left
/// - **L**: hook, foot on the right
/// - **O**: 2x2 square
/// - **S**: skew, rising to the right
/// - **T**: T-shaped
/// - **Z**: skew, falling to the right (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric id (0..=6)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Kind for a board-picture letter, case-insensitive
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// Empty is an explicit variant rather than an out-of-range piece id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Block(PieceKind),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(self) -> bool {
        !self.is_empty()
    }
}

/// Quarter-turn orientation of a piece inside its 4x4 frame
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 90° counter-clockwise (index 3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_ccw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_ccw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

}

/// The single discrete input fed to the engine each tick
///
/// Absence of input maps to [`Command::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateClockwise,
    /// Rotate piece 90° counter-clockwise
    RotateCounterClockwise,
    /// Instantly drop piece to lowest valid position and lock it
    Drop,
    /// No input this tick
    #[default]
    None,
}

/// Engine lifecycle state; `GameOver` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_ids_follow_canonical_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, i);
        }
    }

    #[test]
    fn letters_parse_case_insensitive() {
        for (kind, ch) in PieceKind::ALL.into_iter().zip("IJLOSTZ".chars()) {
            assert_eq!(PieceKind::from_letter(ch), Some(kind));
            assert_eq!(PieceKind::from_letter(ch.to_ascii_lowercase()), Some(kind));
        }
        assert_eq!(PieceKind::from_letter('.'), None);
    }

    #[test]
    fn rotation_turns_cancel() {
        for r in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(r.rotate_cw().rotate_ccw(), r);
            assert_eq!(r.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), r);
        }
    }

    #[test]
    fn score_table_defaults() {
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
        assert_eq!(DEFAULT_ROWS, 22);
        assert_eq!(DEFAULT_COLS, 10);
        assert_eq!(DEFAULT_DROP_TICKS, 500);
    }
}
