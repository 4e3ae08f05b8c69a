//! FEN-to-Board parser.
//!
//! Reads the piece-placement and en-passant fields of a Forsyth-Edwards
//! Notation string into a `Board`. Side to move, castling rights, and clocks
//! are accepted but ignored since a `Board` does not track them. Kings have
//! no move rules here, so `K`/`k` are rejected.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Parse a FEN string. Only the placement field is required.
pub fn parse_fen(fen: &str) -> Result<Board, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenForm("missing board layout".to_owned()))?;
    let _side_part = parts.next();
    let _castling_part = parts.next();
    let en_passant_part = parts.next().unwrap_or("-");

    parse_board(board_part, en_passant_part)
}

/// Parse a placement field (`rank 8 / ... / rank 1`) and an en-passant field.
pub fn parse_board(placement: &str, en_passant: &str) -> Result<Board, ChessErrors> {
    let pieces = parse_placement(placement)?;
    let en_passant_square = parse_en_passant_square(en_passant)?;
    Board::new(pieces, en_passant_square)
}

fn parse_placement(placement: &str) -> Result<Vec<Piece>, ChessErrors> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenForm(format!(
            "expected 8 ranks, found {} in {placement}",
            ranks.len()
        )));
    }

    let mut pieces = Vec::new();
    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - row as i8;
        let mut file = 0i8;

        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += skip as i8;
            } else {
                let (color, kind) = piece_from_fen_char(ch)?;
                if file > 7 {
                    return Err(ChessErrors::InvalidFenForm(format!(
                        "rank {} is wider than 8 files",
                        rank + 1
                    )));
                }
                pieces.push(Piece::new(file, rank, color, kind)?);
                file += 1;
            }

            if file > 8 {
                return Err(ChessErrors::InvalidFenForm(format!(
                    "rank {} is wider than 8 files",
                    rank + 1
                )));
            }
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenForm(format!(
                "rank {} covers {file} files instead of 8",
                rank + 1
            )));
        }
    }

    Ok(pieces)
}

fn piece_from_fen_char(ch: char) -> Result<(Color, PieceKind), ChessErrors> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => return Err(ChessErrors::UnsupportedPiece(ch)),
        _ => return Err(ChessErrors::InvalidFenToken(ch)),
    };

    Ok((color, kind))
}

fn parse_en_passant_square(part: &str) -> Result<Option<Square>, ChessErrors> {
    if part == "-" {
        return Ok(None);
    }
    algebraic_to_square(part).map(Some)
}
