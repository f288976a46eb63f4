//! Scoring module - fixed line clear table
//!
//! Points depend only on how many rows were cleared within a single tick.
//! There is no level multiplier, combo or back-to-back bonus.
//!
//! A tick can lock two pieces (gravity, then a drop), so more than four rows may
//! go at once. Those ticks score the top entry of the table.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in one tick
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
