//! Pawn destinations: pushes, double pushes, diagonal captures, en passant.
//!
//! Pawns never capture straight ahead, so a forward square counts only when
//! it is empty. Diagonals count only when they hold an opposing piece or are
//! the board's en-passant square. A pawn on its last rank has no forward
//! square on the board and therefore no moves; promotion is left to callers.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_set::MoveSet;

pub fn pawn_moves(board: &Board, origin: Square, color: Color) -> MoveSet {
    let mut moves = pawn_pushes(board, origin, color);
    moves |= pawn_captures(board, origin, color);
    moves
}

/// Single and double forward steps onto empty squares.
pub fn pawn_pushes(board: &Board, origin: Square, color: Color) -> MoveSet {
    let mut moves = MoveSet::new();
    let step = color.forward_step();

    let Some(one_step) = origin.offset(0, step) else {
        return moves;
    };
    if board.is_occupied(one_step) {
        return moves;
    }
    moves.insert(one_step);

    if origin.rank() == color.pawn_start_rank() {
        if let Some(two_step) = one_step.offset(0, step) {
            if !board.is_occupied(two_step) {
                moves.insert(two_step);
            }
        }
    }

    moves
}

/// Diagonal captures, including onto the en-passant square.
pub fn pawn_captures(board: &Board, origin: Square, color: Color) -> MoveSet {
    let step = color.forward_step();

    [-1i8, 1i8]
        .into_iter()
        .filter_map(|file_delta| origin.offset(file_delta, step))
        .filter(|&target| {
            board.can_capture(target, color) || board.en_passant_square() == Some(target)
        })
        .collect()
}
