//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned by every fallible
//! constructor and parser. Move generation itself never fails: once a `Board`
//! and a `Piece` exist, asking for their moves is a total operation.
//!
//! All variants describe caller input that broke a precondition (an
//! off-board coordinate, two pieces on one square, malformed notation). They
//! are surfaced as soon as they are detected and never corrected silently.

use crate::game_state::chess_types::Square;

/// Unified error type for board construction and notation parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// File or rank outside `0..=7`.
    ///
    /// Payload: (file, rank) as supplied.
    #[error("coordinates ({0}, {1}) are off the board")]
    InvalidFileOrRank(i8, i8),

    /// Square index outside `0..=63`.
    #[error("square index {0} is out of bounds")]
    InvalidSquareIndex(u8),

    /// A second piece was placed on an already occupied square.
    #[error("more than one piece placed on {0}")]
    DuplicatePieceOnSquare(Square),

    /// A single character of an algebraic square was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// An algebraic square did not have the `<file><rank>` form.
    #[error("invalid algebraic square \"{0}\"")]
    InvalidAlgebraicString(String),

    /// Unknown character in a FEN placement field.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// FEN placement with the wrong shape.
    #[error("malformed FEN: {0}")]
    InvalidFenForm(String),

    /// A FEN piece letter naming a kind without move rules here (kings).
    #[error("unsupported piece '{0}'")]
    UnsupportedPiece(char),

    /// Bad command line input to one of the binaries.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
