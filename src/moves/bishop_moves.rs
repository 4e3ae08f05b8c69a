//! Bishop destinations: rays along the four diagonals.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_set::MoveSet;
use crate::moves::ray_cast::{scan_all, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_rays(board: &Board, origin: Square, color: Color) -> MoveSet {
    scan_all(board, origin, &DIAGONAL_DIRECTIONS, color)
}
