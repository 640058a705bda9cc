//! FEN-to-BoardState parser.
//!
//! Builds a fully-populated position snapshot from a Forsyth-Edwards
//! Notation string, including piece bitboards, rights, clocks, and the
//! initial entry of the repetition history.

use crate::board::board_helper::algebraic_to_square;
use crate::board::board_state::{
    BoardState, Color, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
};
use crate::board::piece::Piece;
use crate::board::zobrist::compute_position_hash;

/// Standard chess starting position in Forsyth-Edwards Notation.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn parse_fen(fen: &str) -> Result<BoardState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut board = BoardState::new_empty();

    parse_board(board_part, &mut board)?;
    board.side_to_move = parse_side_to_move(side_part)?;
    board.castling_rights = parse_castling_rights(castling_part)?;
    board.en_passant_file = parse_en_passant_file(en_passant_part)?;
    board.fifty_move_count = halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    board.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    board.repetition_position_history = vec![compute_position_hash(&board)];

    Ok(board)
}

fn parse_board(board_part: &str, board: &mut BoardState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7usize.saturating_sub(fen_rank_idx);
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += step;
                continue;
            }

            let piece_type = Piece::piece_type_from_symbol(ch);
            if piece_type == Piece::NONE {
                return Err(format!("Invalid piece character '{ch}' in board layout"));
            }

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            let colour_index = if ch.is_ascii_uppercase() {
                BoardState::WHITE_INDEX
            } else {
                BoardState::BLACK_INDEX
            };
            let square = board_rank * 8 + file;
            board.pieces[colour_index][BoardState::kind_index(piece_type)] |= 1u64 << square;
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not cover 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(format!("Invalid side-to-move field: {other}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<u8, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights = 0u8;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            other => return Err(format!("Invalid castling rights character: {other}")),
        };
    }
    Ok(rights)
}

fn parse_en_passant_file(en_passant_part: &str) -> Result<Option<u8>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    Ok(Some(square % 8))
}
