//! Single entry point from a piece to its destination squares.
//!
//! `valid_moves` branches on `PieceKind` and hands the work to the matching
//! rule in `crate::moves`. Results are pseudo-legal: whether a move leaves
//! the mover's own king attacked is not considered.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_set::MoveSet;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_rays;
use crate::moves::rook_moves::rook_rays;

/// Destinations for `piece` on `board`.
///
/// The piece need not be present on `board`; only its fields are used.
pub fn valid_moves(piece: &Piece, board: &Board) -> MoveSet {
    valid_moves_for(piece.kind, piece.position, piece.color, board)
}

pub fn valid_moves_for(kind: PieceKind, position: Square, color: Color, board: &Board) -> MoveSet {
    let moves = match kind {
        PieceKind::Bishop => bishop_rays(board, position, color),
        PieceKind::Rook => rook_rays(board, position, color),
        PieceKind::Queen => queen_rays(board, position, color),
        PieceKind::Knight => knight_moves(board, position, color),
        PieceKind::Pawn => pawn_moves(board, position, color),
    };

    trace!(
        "{:?} {} on {}: {} destinations",
        color,
        kind.name(),
        position,
        moves.len()
    );
    moves
}

/// Destinations for every piece of `color`, in square order.
pub fn valid_moves_for_color(board: &Board, color: Color) -> Vec<(Piece, MoveSet)> {
    board
        .pieces_of(color)
        .map(|piece| (piece, valid_moves(&piece, board)))
        .collect()
}
