//! Pieces module - Tetromino shape masks and closed-form rotation
//!
//! Every piece kind is a 4x4 occupancy pattern packed into a `u16`. Bit `row * 4 + col`
//! is set when that cell of the unrotated frame is occupied. Rotating a piece never
//! touches the mask: [`rotation_index`] maps a cell of the *rotated* frame back to the
//! bit it reads from.

use crate::types::{PieceKind, Rotation, PIECE_KIND_COUNT};

/// Offset of a single mino inside the piece frame: (row, col)
pub type MinoOffset = (i16, i16);

/// Shape of a piece - 4 mino offsets from the frame origin, row-major order
pub type PieceShape = [MinoOffset; 4];

/// Side length of the piece frame
pub const FRAME_SIZE: i16 = 4;

/// Shape masks in canonical kind order (I, J, L, O, S, T, Z).
///
/// ```text
///  I      J      L      O      S      T      Z
/// ....   ....   ....   ....   ....   ....   ....
/// ####   #...   ..#.   .##.   .##.   .#..   ##..
/// ....   ###.   ###.   .##.   ##..   ###.   .##.
/// ....   ....   ....   ....   ....   ....   ....
/// ```
pub const SHAPE_MASKS: [u16; PIECE_KIND_COUNT] = [
    0x00F0, // I
    0x0710, // J
    0x0740, // L
    0x0660, // O
    0x0360, // S
    0x0720, // T
    0x0630, // Z
];

/// Mask for a piece kind
pub fn mask(kind: PieceKind) -> u16 {
    SHAPE_MASKS[kind.id() as usize]
}

/// Bit index read for column `x`, row `y` of a frame rotated by `rotation`.
///
/// East is a clockwise quarter turn, South a half turn, West a counter-clockwise
/// quarter turn.
#[inline(always)]
pub fn rotation_index(x: usize, y: usize, rotation: Rotation) -> usize {
    match rotation {
        Rotation::North => y * 4 + x,
        Rotation::East => 12 + y - 4 * x,
        Rotation::South => 15 - 4 * y - x,
        Rotation::West => 3 - y + 4 * x,
    }
}

/// Whether local frame cell (`row`, `col`) is occupied for this kind and rotation.
/// Cells outside the frame are never occupied.
pub fn is_occupied(kind: PieceKind, rotation: Rotation, row: i16, col: i16) -> bool {
    if !(0..FRAME_SIZE).contains(&row) || !(0..FRAME_SIZE).contains(&col) {
        return false;
    }
    let bit = rotation_index(col as usize, row as usize, rotation);
    mask(kind) & (1 << bit) != 0
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mut shape = [(0, 0); 4];
    let mut n = 0;
    for row in 0..FRAME_SIZE {
        for col in 0..FRAME_SIZE {
            if n < shape.len() && is_occupied(kind, rotation, row, col) {
                shape[n] = (row, col);
                n += 1;
            }
        }
    }
    shape
}

/// Column of the frame origin for a freshly spawned piece
pub fn spawn_column(cols: u16) -> i16 {
    (cols / 2) as i16 - 2
}

/// Row of the frame origin for a freshly spawned piece
pub const SPAWN_ROW: i16 = 0;
