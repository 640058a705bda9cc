//! Read-only position snapshot consumed by the arbiter.
//!
//! `BoardState` is the model the classification kernel reads: piece
//! bitboards, turn flag, the fifty-move counter, and the per-game history of
//! position hashes. The owning server mutates it between plies; the kernel
//! itself never writes to a snapshot it is handed.

use crate::board::piece::Piece;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, STARTING_POSITION_FEN};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
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
}

/// Board square index (`0..=63`), rank-major.
pub type Square = u8;

/// One bit per square, bit `i` = square `i`.
pub type Bitboard = u64;

/// Compact castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

/// Position snapshot read by the arbiter.
#[derive(Debug, Clone)]
pub struct BoardState {
    // Bitboard representation, [color][kind] with kinds indexed pawn..king.
    pub pieces: [[Bitboard; 6]; 2],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_file: Option<u8>,

    /// Plies since the last pawn move or capture. The fifty-move rule
    /// triggers at 100.
    pub fifty_move_count: u16,
    pub fullmove_number: u16,

    /// Position-identity hashes for the game so far, append-only, current
    /// position last.
    pub repetition_position_history: Vec<u64>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_file: None,
            fifty_move_count: 0,
            fullmove_number: 1,
            repetition_position_history: Vec::new(),
        }
    }
}

impl BoardState {
    pub const WHITE_INDEX: usize = 0;
    pub const BLACK_INDEX: usize = 1;

    /// Bitboard array index for a piece type (`Piece::PAWN..=Piece::KING`).
    #[inline]
    pub const fn kind_index(piece_type: u8) -> usize {
        (piece_type - 1) as usize
    }

    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn is_white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn bitboard(&self, colour_index: usize, piece_type: u8) -> Bitboard {
        self.pieces[colour_index][Self::kind_index(piece_type)]
    }

    #[inline]
    pub fn piece_count(&self, colour_index: usize, piece_type: u8) -> u32 {
        self.bitboard(colour_index, piece_type).count_ones()
    }

    #[inline]
    pub fn pawns(&self, colour_index: usize) -> Bitboard {
        self.bitboard(colour_index, Piece::PAWN)
    }

    #[inline]
    pub fn knights(&self, colour_index: usize) -> Bitboard {
        self.bitboard(colour_index, Piece::KNIGHT)
    }

    #[inline]
    pub fn bishops(&self, colour_index: usize) -> Bitboard {
        self.bitboard(colour_index, Piece::BISHOP)
    }

    /// Combined rook and queen squares for one side.
    #[inline]
    pub fn orthogonal_sliders(&self, colour_index: usize) -> Bitboard {
        self.bitboard(colour_index, Piece::ROOK) | self.bitboard(colour_index, Piece::QUEEN)
    }

    #[inline]
    pub fn friendly_orthogonal_sliders(&self) -> Bitboard {
        self.orthogonal_sliders(self.side_to_move.index())
    }

    #[inline]
    pub fn enemy_orthogonal_sliders(&self) -> Bitboard {
        self.orthogonal_sliders(self.side_to_move.opposite().index())
    }

    /// Occupant of a square, or `Piece::EMPTY`.
    pub fn piece_on_square(&self, square: Square) -> Piece {
        let mask = 1u64 << square;
        for colour in [Color::White, Color::Black] {
            for piece_type in Piece::PAWN..=Piece::KING {
                if self.bitboard(colour.index(), piece_type) & mask != 0 {
                    return Piece::make_piece_is_white(piece_type, colour == Color::White);
                }
            }
        }
        Piece::EMPTY
    }
}
