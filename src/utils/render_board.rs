//! Terminal-oriented Unicode board renderer.
//!
//! Draws a `Board` with a set of destination squares marked, for the
//! `show_moves` tool and for eyeballing positions while debugging.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_set::MoveSet;

const EMPTY: char = '·';
const QUIET_TARGET: char = '•';
const CAPTURE_TARGET: char = '×';

/// Render the board with rank 8 on top.
///
/// Highlighted empty squares show `•`, highlighted occupied squares show `×`.
pub fn render_board(board: &Board, highlights: &MoveSet) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8i8).rev() {
        let rank_char = char::from(b'1' + rank as u8);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8i8 {
            let glyph = match Square::new(file, rank) {
                Ok(square) => square_glyph(board, highlights, square),
                Err(_) => EMPTY,
            };
            out.push(glyph);

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn square_glyph(board: &Board, highlights: &MoveSet, square: Square) -> char {
    match (board.piece_at(square), highlights.contains(square)) {
        (Some(_), true) => CAPTURE_TARGET,
        (Some(piece), false) => piece_to_unicode(piece.color, piece.kind),
        (None, true) => QUIET_TARGET,
        (None, false) => EMPTY,
    }
}

pub fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::moves::move_set::MoveSet;

    #[test]
    fn empty_board_renders_dots_and_labels() {
        let rendered = render_board(&Board::empty(), &MoveSet::new());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 · · · · · · · · 8");
        assert_eq!(lines[8], "1 · · · · · · · · 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn pieces_and_targets_are_marked() {
        let rook = Piece::new(0, 0, Color::White, PieceKind::Rook).expect("a1");
        let pawn = Piece::new(0, 2, Color::Black, PieceKind::Pawn).expect("a3");
        let board = Board::new([rook, pawn], None).expect("distinct squares");
        let highlights: MoveSet = [
            Square::new(0, 1).expect("a2"),
            Square::new(0, 2).expect("a3"),
        ]
        .into_iter()
        .collect();

        let rendered = render_board(&board, &highlights);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[8], "1 ♖ · · · · · · · 1");
        assert_eq!(lines[7], "2 • · · · · · · · 2");
        assert_eq!(lines[6], "3 × · · · · · · · 3");
    }
}
