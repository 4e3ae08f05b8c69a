//! Directional scans for sliding pieces.
//!
//! A ray walks from its origin one step at a time. Empty squares are added
//! and the walk continues; the first occupied square ends the ray and is
//! added only when it holds an opposing piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_set::MoveSet;

/// `(file_step, rank_step)` of a ray.
pub type Direction = (i8, i8);

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Destinations reachable by sliding from `origin` along one direction.
pub fn scan(board: &Board, origin: Square, direction: Direction, color: Color) -> MoveSet {
    let (file_step, rank_step) = direction;
    let mut moves = MoveSet::new();
    let mut current = origin;

    while let Some(target) = current.offset(file_step, rank_step) {
        if board.is_occupied(target) {
            if board.can_capture(target, color) {
                moves.insert(target);
            }
            break;
        }

        moves.insert(target);
        current = target;
    }

    moves
}

/// Union of `scan` over several directions.
pub fn scan_all(board: &Board, origin: Square, directions: &[Direction], color: Color) -> MoveSet {
    directions
        .iter()
        .fold(MoveSet::new(), |acc, &direction| {
            acc | scan(board, origin, direction, color)
        })
}

#[cfg(test)]
mod tests {
    use super::{scan, scan_all, ORTHOGONAL_DIRECTIONS};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::moves::move_set::MoveSet;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square on board")
    }

    #[test]
    fn open_ray_runs_to_the_edge() {
        let moves = scan(&Board::empty(), sq(3, 3), (1, 0), Color::White);
        let expected: MoveSet = [sq(4, 3), sq(5, 3), sq(6, 3), sq(7, 3)].into_iter().collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn ray_from_the_edge_outward_is_empty() {
        assert!(scan(&Board::empty(), sq(7, 3), (1, 0), Color::Black).is_empty());
        assert!(scan(&Board::empty(), sq(0, 0), (-1, -1), Color::White).is_empty());
    }

    #[test]
    fn same_color_blocker_stops_one_square_early() {
        let board = Board::new(
            [Piece::new(5, 3, Color::White, PieceKind::Bishop).expect("f4")],
            None,
        )
        .expect("single piece");

        let moves = scan(&board, sq(3, 3), (1, 0), Color::White);
        assert_eq!(moves, [sq(4, 3)].into_iter().collect());
    }

    #[test]
    fn opposing_blocker_is_captured_and_ends_the_ray() {
        let board = Board::new(
            [
                Piece::new(5, 3, Color::Black, PieceKind::Bishop).expect("f4"),
                Piece::new(7, 3, Color::Black, PieceKind::Rook).expect("h4"),
            ],
            None,
        )
        .expect("distinct squares");

        let moves = scan(&board, sq(3, 3), (1, 0), Color::White);
        assert_eq!(moves, [sq(4, 3), sq(5, 3)].into_iter().collect());
    }

    #[test]
    fn adjacent_same_color_blocker_yields_nothing() {
        let board = Board::new(
            [Piece::new(3, 4, Color::Black, PieceKind::Pawn).expect("d5")],
            None,
        )
        .expect("single piece");
        assert!(scan(&board, sq(3, 3), (0, 1), Color::Black).is_empty());
    }

    #[test]
    fn scan_all_unions_each_direction() {
        let moves = scan_all(&Board::empty(), sq(0, 0), &ORTHOGONAL_DIRECTIONS, Color::White);
        assert_eq!(moves.len(), 14);
    }
}
