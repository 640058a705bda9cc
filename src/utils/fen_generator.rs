//! BoardState-to-FEN generator.

use crate::board::board_state::{
    BoardState, Color, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
};
use crate::board::piece::Piece;

pub fn generate_fen(board: &BoardState) -> String {
    let layout = generate_board_field(board);
    let side_to_move = match board.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(board.castling_rights);
    let en_passant = generate_en_passant_field(board);

    format!(
        "{} {} {} {} {} {}",
        layout, side_to_move, castling, en_passant, board.fifty_move_count, board.fullmove_number
    )
}

fn generate_board_field(board: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let piece = board.piece_on_square(rank * 8 + file);
            if piece == Piece::EMPTY {
                empty_count += 1;
                continue;
            }

            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
                empty_count = 0;
            }
            out.push(piece.symbol());
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(castling_rights: u8) -> String {
    if castling_rights == 0 {
        return "-".to_owned();
    }

    let mut out = String::new();
    if castling_rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if castling_rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if castling_rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if castling_rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }
    out
}

fn generate_en_passant_field(board: &BoardState) -> String {
    match board.en_passant_file {
        None => "-".to_owned(),
        Some(file) => {
            // The en-passant target sits behind the pawn that just made a
            // double push, so its rank depends on who moves next.
            let rank_char = match board.side_to_move {
                Color::White => '6',
                Color::Black => '3',
            };
            format!("{}{}", char::from(b'a' + file), rank_char)
        }
    }
}
