//! Bounds checking over the 8x8 coordinate space.

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i8 = 8;

/// True iff both coordinates lie in `0..=7`.
#[inline]
pub const fn is_in_board(file: i8, rank: i8) -> bool {
    file >= 0 && file < BOARD_SIZE && rank >= 0 && rank < BOARD_SIZE
}
