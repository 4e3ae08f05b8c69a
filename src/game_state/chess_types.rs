//! Value types shared by the board snapshot and the move rules.
//!
//! Squares are addressed by `(file, rank)` with `a1 == (0, 0)` and
//! `h8 == (7, 7)`. The bitboard index of a square is `rank * 8 + file`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::board_geometry::is_in_board;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank on which pawns of this color may still double step.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

/// Piece kinds handled by the move rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
        }
    }
}

/// One of the 64 board squares. Always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    // Field order gives rank-major ordering, matching `index()`.
    rank: u8,
    file: u8,
}

impl Square {
    /// Build a square from signed coordinates, rejecting anything off the board.
    pub fn new(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if is_in_board(file, rank) {
            Ok(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessErrors::InvalidFileOrRank(file, rank))
        }
    }

    /// Build a square from its bitboard index (`0..=63`).
    pub fn from_index(index: u8) -> Result<Self, ChessErrors> {
        if index > 63 {
            return Err(ChessErrors::InvalidSquareIndex(index));
        }
        Ok(Square {
            file: index % 8,
            rank: index / 8,
        })
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.rank * 8 + self.file
    }

    /// One-hot bitboard for this square.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// Step by `(file_step, rank_step)`; `None` when the target leaves the board.
    #[inline]
    pub fn offset(self, file_step: i8, rank_step: i8) -> Option<Self> {
        let file = (self.file as i8).checked_add(file_step)?;
        let rank = (self.rank as i8).checked_add(rank_step)?;
        if is_in_board(file, rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = ChessErrors;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        Square::new(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// A piece placed on the board. Read-only input to move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub position: Square,
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Place a piece at `(file, rank)`, rejecting off-board coordinates.
    pub fn new(file: i8, rank: i8, color: Color, kind: PieceKind) -> Result<Self, ChessErrors> {
        Ok(Piece::at(Square::new(file, rank)?, color, kind))
    }

    #[inline]
    pub const fn at(position: Square, color: Color, kind: PieceKind) -> Self {
        Piece {
            position,
            color,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_is_rank_major() {
        let c4 = Square::new(2, 3).expect("c4 is on the board");
        assert_eq!(c4.index(), 26);
        assert_eq!(c4.bit(), 1u64 << 26);
        assert_eq!(Square::from_index(26).expect("26 is valid"), c4);
    }

    #[test]
    fn off_board_coordinates_are_rejected() {
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessErrors::InvalidFileOrRank(8, 0))
        ));
        assert!(Square::new(0, -1).is_err());
        assert!(Square::try_from((-1, 3)).is_err());
        assert!(matches!(
            Square::from_index(64),
            Err(ChessErrors::InvalidSquareIndex(64))
        ));
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::new(0, 0).expect("a1");
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2).expect("b3")));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, 8), None);
        assert_eq!(a1.offset(i8::MAX, 0), None);
    }

    #[test]
    fn squares_order_like_their_index() {
        let h1 = Square::new(7, 0).expect("h1");
        let a2 = Square::new(0, 1).expect("a2");
        assert!(h1 < a2);
        assert!(h1.index() < a2.index());
    }

    #[test]
    fn piece_placement_keeps_its_inputs() {
        let bishop = Piece::new(3, 5, Color::White, PieceKind::Bishop).expect("d6");
        assert_eq!(bishop.position.file(), 3);
        assert_eq!(bishop.position.rank(), 5);
        assert_eq!(bishop.color, Color::White);
        assert_eq!(bishop.kind, PieceKind::Bishop);
        assert!(Piece::new(3, 9, Color::Black, PieceKind::Rook).is_err());
    }

    #[test]
    fn pawn_direction_and_start_rank_depend_on_color() {
        assert_eq!(Color::White.forward_step(), 1);
        assert_eq!(Color::Black.forward_step(), -1);
        assert_eq!(Color::White.pawn_start_rank(), 1);
        assert_eq!(Color::Black.pawn_start_rank(), 6);
        assert_eq!(Color::White.opposite(), Color::Black);
    }
}
