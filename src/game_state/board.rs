//! Immutable position snapshot used by move generation.
//!
//! `Board` stores piece bitboards indexed `[color][piece_kind]` together with
//! occupancy caches, so every occupancy query is a mask test. A board is
//! never edited in place once built: adding a piece or changing the
//! en-passant square produces a new snapshot.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [color][piece_kind]
    pieces: [[u64; 5]; 2],

    occupancy_by_color: [u64; 2],
    occupancy_all: u64,

    en_passant_square: Option<Square>,
}

impl Board {
    /// A board with no pieces and no en-passant square.
    pub const fn empty() -> Self {
        Board {
            pieces: [[0; 5]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            en_passant_square: None,
        }
    }

    /// Build a snapshot from a collection of pieces.
    ///
    /// Fails with `DuplicatePieceOnSquare` when two pieces share a square.
    pub fn new<I>(pieces: I, en_passant_square: Option<Square>) -> Result<Self, ChessErrors>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Board::empty();
        for piece in pieces {
            board.place(piece)?;
        }
        board.en_passant_square = en_passant_square;
        Ok(board)
    }

    /// New snapshot with `piece` added.
    pub fn with_piece(&self, piece: Piece) -> Result<Self, ChessErrors> {
        let mut next = self.clone();
        next.place(piece)?;
        Ok(next)
    }

    /// New snapshot with the en-passant square replaced.
    pub fn with_en_passant_square(&self, en_passant_square: Option<Square>) -> Self {
        Board {
            en_passant_square,
            ..self.clone()
        }
    }

    fn place(&mut self, piece: Piece) -> Result<(), ChessErrors> {
        let bit = piece.position.bit();
        if (self.occupancy_all & bit) != 0 {
            debug!("rejecting second piece on {}", piece.position);
            return Err(ChessErrors::DuplicatePieceOnSquare(piece.position));
        }

        self.pieces[piece.color.index()][piece.kind.index()] |= bit;
        self.occupancy_by_color[piece.color.index()] |= bit;
        self.occupancy_all |= bit;
        Ok(())
    }

    #[inline]
    pub const fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub const fn occupancy(&self) -> u64 {
        self.occupancy_all
    }

    #[inline]
    pub const fn occupancy_of(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    /// Number of pieces on the board.
    #[inline]
    pub const fn len(&self) -> usize {
        self.occupancy_all.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupancy_all == 0
    }

    #[inline]
    pub const fn is_occupied(&self, square: Square) -> bool {
        (self.occupancy_all & square.bit()) != 0
    }

    /// Color of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        let bit = square.bit();
        Color::ALL
            .into_iter()
            .find(|color| (self.occupancy_by_color[color.index()] & bit) != 0)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let color = self.color_at(square)?;
        let bit = square.bit();
        PieceKind::ALL
            .into_iter()
            .find(|kind| (self.pieces[color.index()][kind.index()] & bit) != 0)
            .map(|kind| Piece::at(square, color, kind))
    }

    /// True iff `square` holds a piece of the color opposing `color`.
    #[inline]
    pub const fn can_capture(&self, square: Square, color: Color) -> bool {
        (self.occupancy_by_color[color.opposite().index()] & square.bit()) != 0
    }

    /// Landing test shared by every piece rule: on the board, and either
    /// empty or held by the opposing color.
    #[inline]
    pub fn is_empty_or_capturable(&self, file: i8, rank: i8, color: Color) -> bool {
        match Square::new(file, rank) {
            Ok(square) => self.is_square_empty_or_capturable(square, color),
            Err(_) => false,
        }
    }

    #[inline]
    pub const fn is_square_empty_or_capturable(&self, square: Square, color: Color) -> bool {
        (self.occupancy_by_color[color.index()] & square.bit()) == 0
    }

    /// All pieces in square order, `a1` first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        let mut remaining = self.occupancy_all;
        std::iter::from_fn(move || {
            while remaining != 0 {
                let index = remaining.trailing_zeros() as u8;
                remaining &= remaining - 1;
                if let Some(piece) = Square::from_index(index)
                    .ok()
                    .and_then(|square| self.piece_at(square))
                {
                    return Some(piece);
                }
            }
            None
        })
    }

    /// Pieces of one color in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }
}
