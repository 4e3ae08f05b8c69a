use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_set::MoveSet;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knight destinations. Intervening squares never block a jump.
pub fn knight_moves(board: &Board, origin: Square, color: Color) -> MoveSet {
    let file = origin.file() as i8;
    let rank = origin.rank() as i8;

    KNIGHT_OFFSETS
        .iter()
        .filter(|&&(file_step, rank_step)| {
            board.is_empty_or_capturable(file + file_step, rank + rank_step, color)
        })
        .filter_map(|&(file_step, rank_step)| origin.offset(file_step, rank_step))
        .collect()
}
