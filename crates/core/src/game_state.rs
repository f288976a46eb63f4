//! Game state module - the per-tick rules engine
//!
//! This module ties together the board, piece geometry, shape source and scoring.
//! One call to [`Game::tick`] advances the game by one discrete step: gravity, then
//! the player's command, then line clears, scoring and the top-out check.
//!
//! The board only ever holds locked cells. Collision is a pure predicate
//! ([`Board::fits`]) evaluated on a candidate piece, so nothing is erased and redrawn
//! while testing a move.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::pieces::{get_shape, spawn_column, PieceShape, SPAWN_ROW};
use crate::rng::ShapeSource;
use crate::scoring::line_clear_score;
use crate::types::{Cell, Command, GameStatus, PieceKind, Rotation, TOP_OUT_ROWS};

/// Column offsets tried, in order, when a rotation does not fit in place
pub const KICK_OFFSETS: [i16; 3] = [0, -1, 1];

/// A piece on (or above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Top row of the 4x4 frame
    pub row: i16,
    /// Left column of the 4x4 frame
    pub col: i16,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position of a board `cols` wide
    pub fn spawn(kind: PieceKind, cols: u16) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ROW,
            col: spawn_column(cols),
        }
    }

    /// Get the shape (frame-relative mino offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute (row, col) of each mino
    pub fn cells(&self) -> [(i16, i16); 4] {
        self.shape().map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Whether this piece covers board cell (row, col)
    pub fn covers(&self, row: i16, col: i16) -> bool {
        self.cells().contains(&(row, col))
    }

    pub fn shifted(self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..self
        }
    }

    pub fn rotated(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }
}

/// Complete game state
pub struct Game<S> {
    board: Board,
    active: Tetromino,
    next: Tetromino,
    source: S,
    status: GameStatus,
    score: u32,
    drop_ticks: u32,
    drop_timer: u32,
    lines_cleared: u32,
    pieces_locked: u32,
    tick_count: u64,
}

impl<S: ShapeSource> Game<S> {
    /// Create a new game on an empty board.
    ///
    /// Two shapes are drawn: the first becomes the active piece, the second is
    /// buffered as the next piece.
    pub fn new(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols);
        Ok(Self::build(config, board, source))
    }

    /// Create a new game on a preset board, e.g. a puzzle or a partially played well.
    pub fn with_board(config: GameConfig, board: Board, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(ConfigError::BoardMismatch {
                rows: config.rows,
                cols: config.cols,
                board_rows: board.rows(),
                board_cols: board.cols(),
            });
        }
        Ok(Self::build(config, board, source))
    }

    fn build(config: GameConfig, board: Board, mut source: S) -> Self {
        let cols = config.cols;
        let first = Tetromino::spawn(source.next_kind(), cols);
        let next = Tetromino::spawn(source.next_kind(), cols);

        debug!(rows = config.rows, cols, active = ?first.kind, next = ?next.kind, "new game");

        // A preset board can leave no room for the first piece.
        let status = if board.fits(&first) {
            GameStatus::Playing
        } else {
            info!(kind = ?first.kind, "game over: spawn blocked");
            GameStatus::GameOver
        };

        Self {
            board,
            active: first,
            next,
            source,
            status,
            score: 0,
            drop_ticks: config.drop_ticks,
            drop_timer: config.drop_ticks,
            lines_cleared: 0,
            pieces_locked: 0,
            tick_count: 0,
        }
    }

    pub fn rows(&self) -> u16 {
        self.board.rows()
    }

    pub fn cols(&self) -> u16 {
        self.board.cols()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// The falling piece
    pub fn active(&self) -> Tetromino {
        self.active
    }

    /// The buffered piece that spawns after the next lock (for preview)
    pub fn next(&self) -> Tetromino {
        self.next
    }

    /// The locked cells only
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ticks left before the next gravity step
    pub fn drop_timer(&self) -> u32 {
        self.drop_timer
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Number of ticks processed while playing
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// What the player sees at (row, col): the active piece while playing, otherwise
    /// the locked board. `None` when out of bounds.
    pub fn cell_at(&self, row: i16, col: i16) -> Option<Cell> {
        let locked = self.board.get(row, col)?;
        if self.status == GameStatus::Playing && self.active.covers(row, col) {
            return Some(Cell::Block(self.active.kind));
        }
        Some(locked)
    }

    /// Advance the game by one tick. Returns whether the game is still running.
    ///
    /// Once the game is over this is a no-op that keeps returning `false`.
    pub fn tick(&mut self, command: Command) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }
        self.tick_count += 1;

        self.apply_gravity();
        if self.status == GameStatus::Playing {
            self.apply_command(command);
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            let points = line_clear_score(cleared);
            self.score = self.score.saturating_add(points);
            self.lines_cleared += cleared as u32;
            debug!(lines = cleared, points, score = self.score, "lines cleared");
        }

        if self.board.is_top_occupied(TOP_OUT_ROWS) {
            self.end_game("top rows occupied");
        }

        self.status == GameStatus::Playing
    }

    fn apply_gravity(&mut self) {
        self.drop_timer = self.drop_timer.saturating_sub(1);
        if self.drop_timer > 0 {
            return;
        }

        let lowered = self.active.shifted(1, 0);
        if self.board.fits(&lowered) {
            self.active = lowered;
            self.drop_timer = self.drop_ticks;
            trace!(row = lowered.row, "gravity step");
        } else {
            self.lock_and_spawn();
        }
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                self.try_move(0, -1);
            }
            Command::MoveRight => {
                self.try_move(0, 1);
            }
            Command::RotateClockwise => {
                self.try_rotate(true);
            }
            Command::RotateCounterClockwise => {
                self.try_rotate(false);
            }
            Command::Drop => self.hard_drop(),
            Command::None => {}
        }
    }

    /// Shift the active piece when the target position fits
    fn try_move(&mut self, d_row: i16, d_col: i16) -> bool {
        let moved = self.active.shifted(d_row, d_col);
        if self.board.fits(&moved) {
            self.active = moved;
            return true;
        }
        false
    }

    /// Turn the active piece a quarter turn, trying each of [`KICK_OFFSETS`] once.
    /// When no offset fits the rotation is rejected and nothing changes.
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let rotation = if clockwise {
            self.active.rotation.rotate_cw()
        } else {
            self.active.rotation.rotate_ccw()
        };
        let turned = self.active.rotated(rotation);

        for d_col in KICK_OFFSETS {
            let candidate = turned.shifted(0, d_col);
            if self.board.fits(&candidate) {
                self.active = candidate;
                return true;
            }
        }

        debug!(kind = ?self.active.kind, ?rotation, "rotation rejected");
        false
    }

    /// Drop the active piece as far as it goes, then lock it immediately
    fn hard_drop(&mut self) {
        while self.try_move(1, 0) {}
        self.lock_and_spawn();
    }

    fn lock_and_spawn(&mut self) {
        self.board.lock_piece(&self.active);
        self.pieces_locked += 1;
        debug!(kind = ?self.active.kind, row = self.active.row, col = self.active.col, "piece locked");

        let fresh = Tetromino::spawn(self.source.next_kind(), self.board.cols());
        self.active = std::mem::replace(&mut self.next, fresh);
        debug!(active = ?self.active.kind, next = ?self.next.kind, "piece spawned");

        if !self.board.fits(&self.active) {
            self.end_game("spawn blocked");
        }
    }

    fn end_game(&mut self, reason: &'static str) {
        if self.status == GameStatus::GameOver {
            return;
        }
        self.status = GameStatus::GameOver;
        info!(reason, score = self.score, lines = self.lines_cleared, "game over");
    }
}

impl<S> std::fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("active", &self.active)
            .field("next", &self.next)
            .field("status", &self.status)
            .field("score", &self.score)
            .field("drop_timer", &self.drop_timer)
            .finish_non_exhaustive()
    }
}
