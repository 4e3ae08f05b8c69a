//! Random position generation for property tests and benchmarks.
//!
//! Positions are not required to be reachable in a real game: pawns may sit
//! on their last rank and the en-passant square is any empty square on rank
//! 3 or 6, picked independently of the pawns around it. Seed the generator
//! (`StdRng::seed_from_u64`) for reproducible boards.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Place up to `piece_count` random pieces on distinct squares.
pub fn random_board<R: Rng + ?Sized>(
    rng: &mut R,
    piece_count: usize,
    include_en_passant: bool,
) -> Result<Board, ChessErrors> {
    let mut indices: Vec<u8> = (0..64).collect();
    indices.shuffle(rng);

    let mut pieces = Vec::with_capacity(piece_count.min(64));
    for &index in indices.iter().take(piece_count) {
        let color = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        pieces.push(Piece::at(Square::from_index(index)?, color, kind));
    }

    let board = Board::new(pieces, None)?;
    if !include_en_passant {
        return Ok(board);
    }

    let mut candidates = Vec::with_capacity(16);
    for rank in [2i8, 5i8] {
        for file in 0..8i8 {
            let square = Square::new(file, rank)?;
            if !board.is_occupied(square) {
                candidates.push(square);
            }
        }
    }
    let en_passant_square = candidates.choose(rng).copied();

    Ok(board.with_en_passant_square(en_passant_square))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::random_board;

    #[test]
    fn requested_piece_count_is_placed() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = random_board(&mut rng, 12, false).expect("distinct squares");
        assert_eq!(board.len(), 12);
        assert_eq!(board.en_passant_square(), None);
    }

    #[test]
    fn piece_count_is_clamped_to_the_board() {
        let mut rng = StdRng::seed_from_u64(2);
        let board = random_board(&mut rng, 100, false).expect("distinct squares");
        assert_eq!(board.len(), 64);
    }

    #[test]
    fn en_passant_square_is_empty_on_rank_three_or_six() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let board = random_board(&mut rng, 8, true).expect("distinct squares");
            let target = board.en_passant_square().expect("requested en-passant square");
            assert!(target.rank() == 2 || target.rank() == 5);
            assert!(!board.is_occupied(target));
        }
    }

    #[test]
    fn same_seed_gives_same_board() {
        let first = random_board(&mut StdRng::seed_from_u64(42), 16, true).expect("board");
        let second = random_board(&mut StdRng::seed_from_u64(42), 16, true).expect("board");
        assert_eq!(first, second);
    }
}
