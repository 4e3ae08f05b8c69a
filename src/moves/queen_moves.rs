use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::move_set::MoveSet;
use crate::moves::rook_moves::rook_rays;

#[inline]
pub fn queen_rays(board: &Board, origin: Square, color: Color) -> MoveSet {
    bishop_rays(board, origin, color) | rook_rays(board, origin, color)
}
