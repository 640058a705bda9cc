//! Zobrist hashing for position identity and repetition tracking.
//!
//! The keys are generated once per process from a fixed seed so hashes are
//! deterministic across runs, which keeps repetition histories comparable
//! and makes tests reproducible.

use std::sync::OnceLock;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::board_state::{BoardState, Color};

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for colour in &mut piece_square {
        for kind in colour.iter_mut() {
            for square_key in kind.iter_mut() {
                *square_key = rng.random();
            }
        }
    }

    let black_to_move = rng.random();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        black_to_move,
        castling,
        en_passant_file,
    }
}

/// Position-identity hash over piece placement, side to move, castling
/// rights, and en-passant file. Two positions the repetition rule treats as
/// identical hash to the same value.
pub fn compute_position_hash(board: &BoardState) -> u64 {
    let tables = tables();
    let mut hash = 0u64;

    for colour in [Color::White, Color::Black] {
        let colour_index = colour.index();
        for kind_index in 0..6 {
            let mut bitboard = board.pieces[colour_index][kind_index];
            while bitboard != 0 {
                let square = bitboard.trailing_zeros() as usize;
                hash ^= tables.piece_square[colour_index][kind_index][square];
                bitboard &= bitboard - 1;
            }
        }
    }

    if board.side_to_move == Color::Black {
        hash ^= tables.black_to_move;
    }

    hash ^= tables.castling[(board.castling_rights & 0xF) as usize];

    if let Some(file) = board.en_passant_file {
        hash ^= tables.en_passant_file[(file & 7) as usize];
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::compute_position_hash;
    use crate::board::board_state::{BoardState, Color};

    #[test]
    fn hash_is_deterministic_across_calls() {
        let board = BoardState::new_game();
        assert_eq!(compute_position_hash(&board), compute_position_hash(&board));
    }

    #[test]
    fn side_to_move_and_rights_change_the_hash() {
        let board = BoardState::new_game();
        let base = compute_position_hash(&board);

        let mut flipped = board.clone();
        flipped.side_to_move = Color::Black;
        assert_ne!(compute_position_hash(&flipped), base);

        let mut no_rights = board.clone();
        no_rights.castling_rights = 0;
        assert_ne!(compute_position_hash(&no_rights), base);
    }

    #[test]
    fn clock_fields_do_not_affect_position_identity() {
        let board = BoardState::new_game();
        let mut later = board.clone();
        later.fifty_move_count = 40;
        later.fullmove_number = 30;
        assert_eq!(compute_position_hash(&later), compute_position_hash(&board));
    }
}
