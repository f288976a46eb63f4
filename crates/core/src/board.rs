//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds the kind of a
//! locked piece. Uses a flat row-major vector sized once at construction.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left wall.
//!
//! Only locked cells live here. The falling piece is never written into the board, so
//! every collision test sees the locked stack alone.

use crate::game_state::Tetromino;
use crate::types::Cell;

/// The game board - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows as usize * cols as usize],
        }
    }

    /// Build a board from a text picture, one string per row, top row first.
    ///
    /// `.` (or a space) is empty, a piece letter is a locked block of that kind.
    /// Returns `None` for ragged rows, an empty picture or an unknown character.
    ///
    /// ```
    /// use falling_blocks_core::Board;
    /// use falling_blocks_core::types::{Cell, PieceKind};
    ///
    /// let board = Board::from_rows(&["....", "IIII"]).unwrap();
    /// assert_eq!(board.get(1, 0), Some(Cell::Block(PieceKind::I)));
    /// assert!(board.is_row_full(1));
    /// ```
    pub fn from_rows(picture: &[&str]) -> Option<Self> {
        let rows = u16::try_from(picture.len()).ok()?;
        let cols = u16::try_from(picture.first()?.chars().count()).ok()?;
        if rows == 0 || cols == 0 {
            return None;
        }

        let mut board = Self::new(rows, cols);
        for (row, line) in picture.iter().enumerate() {
            if line.chars().count() != cols as usize {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => Cell::Empty,
                    other => Cell::Block(crate::types::PieceKind::from_letter(other)?),
                };
                board.cells[row * cols as usize + col] = cell;
            }
        }
        Some(board)
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i16 || col >= self.cols as i16 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Get height of the board
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get width of the board
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Check if every mino of `piece` lands on an in-bounds empty cell
    pub fn fits(&self, piece: &Tetromino) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(row, col)| self.is_vacant(row, col))
    }

    /// Write the piece's minos into the grid.
    /// Minos outside the board are dropped; callers only lock pieces that fit.
    pub fn lock_piece(&mut self, piece: &Tetromino) {
        for (row, col) in piece.cells() {
            self.set(row, col, Cell::Block(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u16) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row_slice(row).iter().all(|cell| cell.is_filled())
    }

    /// Clear a row and shift all rows above down by one; row 0 becomes empty
    pub fn clear_row(&mut self, row: u16) {
        if row >= self.rows {
            return;
        }

        let width = self.cols as usize;
        for r in (1..=row as usize).rev() {
            let src_start = (r - 1) * width;
            self.cells.copy_within(src_start..src_start + width, r * width);
        }
        self.cells[..width].fill(Cell::Empty);
    }

    /// Clear all full rows, scanning bottom to top, and return how many were cleared.
    ///
    /// After a clear the same row index is tested again, since the row above has
    /// just shifted into it. Every full row goes, however many there are.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.rows;
        while row > 0 {
            let current = row - 1;
            if self.is_row_full(current) {
                self.clear_row(current);
                cleared += 1;
                continue;
            }
            row -= 1;
        }
        cleared
    }

    /// Check whether any of the top `depth` rows holds a block
    pub fn is_top_occupied(&self, depth: u16) -> bool {
        let end = depth.min(self.rows) as usize * self.cols as usize;
        self.cells[..end].iter().any(|cell| cell.is_filled())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn row_slice(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }
}
