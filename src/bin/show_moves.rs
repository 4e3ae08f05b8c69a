//! Print the destination squares of one piece.
//!
//! Usage:
//! `cargo run --bin show_moves -- --piece bishop --color white --square d6`
//! `cargo run --bin show_moves -- --piece pawn --color white --square d5 --fen 8/8/8/3Pp3/8/8/8/8 --en-passant e6`
//!
//! Set `RUST_LOG=trace` to see move generation records.

use chess_kata::chess_errors::ChessErrors;
use chess_kata::game_state::board::Board;
use chess_kata::game_state::chess_types::{Color, Piece, PieceKind, Square};
use chess_kata::move_generation::move_generator::valid_moves;
use chess_kata::utils::fen_parser::parse_board;
use chess_kata::utils::render_board::render_board;

fn parse_arg_str(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn required_arg(args: &[String], flag: &str) -> Result<String, ChessErrors> {
    parse_arg_str(args, flag).ok_or_else(|| ChessErrors::InvalidArgument(format!("missing {flag}")))
}

fn parse_kind(text: &str) -> Result<PieceKind, ChessErrors> {
    PieceKind::ALL
        .into_iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(text))
        .ok_or_else(|| ChessErrors::InvalidArgument(format!("unknown piece kind: {text}")))
}

fn parse_color(text: &str) -> Result<Color, ChessErrors> {
    if text.eq_ignore_ascii_case("white") {
        Ok(Color::White)
    } else if text.eq_ignore_ascii_case("black") {
        Ok(Color::Black)
    } else {
        Err(ChessErrors::InvalidArgument(format!("unknown color: {text}")))
    }
}

fn run(args: &[String]) -> Result<(), ChessErrors> {
    let kind = parse_kind(&required_arg(args, "--piece")?)?;
    let color = parse_color(&required_arg(args, "--color")?)?;
    let square: Square = required_arg(args, "--square")?.parse()?;
    let piece = Piece::at(square, color, kind);

    let en_passant = parse_arg_str(args, "--en-passant").unwrap_or_else(|| "-".to_owned());
    let board = match parse_arg_str(args, "--fen") {
        Some(placement) => parse_board(&placement, &en_passant)?,
        None => parse_board("8/8/8/8/8/8/8/8", &en_passant)?,
    };
    let board = place_if_absent(board, piece)?;

    let moves = valid_moves(&piece, &board);
    println!("{}", render_board(&board, &moves));

    let names: Vec<String> = moves.iter().map(|sq| sq.to_string()).collect();
    println!(
        "{:?} {} on {}: {} moves [{}]",
        color,
        kind.name(),
        square,
        moves.len(),
        names.join(" ")
    );
    Ok(())
}

fn place_if_absent(board: Board, piece: Piece) -> Result<Board, ChessErrors> {
    match board.piece_at(piece.position) {
        Some(existing) if existing == piece => Ok(board),
        Some(_) => Err(ChessErrors::DuplicatePieceOnSquare(piece.position)),
        None => board.with_piece(piece),
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    run(&args).map_err(|e| e.to_string())
}
