use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_set::MoveSet;
use crate::moves::ray_cast::{scan_all, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_rays(board: &Board, origin: Square, color: Color) -> MoveSet {
    scan_all(board, origin, &ORTHOGONAL_DIRECTIONS, color)
}

#[cfg(test)]
mod tests {
    use super::rook_rays;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::moves::move_set::MoveSet;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square on board")
    }

    fn squares(coords: &[(i8, i8)]) -> MoveSet {
        coords.iter().map(|&(file, rank)| sq(file, rank)).collect()
    }

    fn rook_with_bishop_on_f4(bishop_color: Color) -> MoveSet {
        let board = Board::new(
            [
                Piece::new(3, 3, Color::White, PieceKind::Rook).expect("d4"),
                Piece::new(5, 3, bishop_color, PieceKind::Bishop).expect("f4"),
            ],
            None,
        )
        .expect("distinct squares");
        rook_rays(&board, sq(3, 3), Color::White)
    }

    #[test]
    fn rook_on_d4_reaches_fourteen_squares() {
        assert_eq!(rook_rays(&Board::empty(), sq(3, 3), Color::White).len(), 14);
    }

    #[test]
    fn rook_stops_before_own_bishop() {
        let expected = squares(&[
            (4, 3),
            (2, 3),
            (1, 3),
            (0, 3),
            (3, 4),
            (3, 5),
            (3, 6),
            (3, 7),
            (3, 2),
            (3, 1),
            (3, 0),
        ]);
        assert_eq!(rook_with_bishop_on_f4(Color::White), expected);
    }

    #[test]
    fn rook_captures_opposing_bishop() {
        let expected = squares(&[
            (4, 3),
            (5, 3),
            (2, 3),
            (1, 3),
            (0, 3),
            (3, 4),
            (3, 5),
            (3, 6),
            (3, 7),
            (3, 2),
            (3, 1),
            (3, 0),
        ]);
        assert_eq!(rook_with_bishop_on_f4(Color::Black), expected);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let board = Board::new(
            [Piece::new(0, 3, Color::Black, PieceKind::Pawn).expect("a4")],
            None,
        )
        .expect("single piece");
        let moves = rook_rays(&board, sq(0, 0), Color::White);

        assert!(moves.contains(sq(0, 3)));
        assert!(!moves.contains(sq(0, 4)));
    }
}
