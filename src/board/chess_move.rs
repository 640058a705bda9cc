//! Packed move codes.
//!
//! A move occupies sixteen bits: bits 0-5 hold the start square, bits 6-11
//! the target square, and bits 12-15 a flag describing the move kind. The
//! flag values are a de facto wire format (serialized moves depend on them
//! bit-for-bit), so their assignment must never be reordered.

use crate::board::piece::Piece;

/// Packed 16-bit move code.
///
/// Constructors never validate square or flag ranges; an out-of-range input
/// silently corrupts the neighbouring bit fields. Callers are trusted
/// internal code (the move generator and move parsing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u16);

impl Move {
    // Flags. The promotion ordering (queen, knight, rook, bishop) is
    // deliberate and load-bearing for serialized moves.
    pub const NO_FLAG: u8 = 0b0000;
    pub const EN_PASSANT_CAPTURE_FLAG: u8 = 0b0001;
    pub const CASTLE_FLAG: u8 = 0b0010;
    pub const PAWN_TWO_UP_FLAG: u8 = 0b0011;
    pub const PROMOTE_TO_QUEEN_FLAG: u8 = 0b0100;
    pub const PROMOTE_TO_KNIGHT_FLAG: u8 = 0b0101;
    pub const PROMOTE_TO_ROOK_FLAG: u8 = 0b0110;
    pub const PROMOTE_TO_BISHOP_FLAG: u8 = 0b0111;

    const START_SQUARE_MASK: u16 = 0b0000_0000_0011_1111;
    const TARGET_SQUARE_MASK: u16 = 0b0000_1111_1100_0000;

    /// The all-zero value, denoting the absence of a move. Never a real
    /// move from square 0 to square 0.
    pub const NULL: Move = Move(0);

    #[inline]
    pub const fn new(start_square: u8, target_square: u8) -> Move {
        Move(start_square as u16 | ((target_square as u16) << 6))
    }

    #[inline]
    pub const fn new_with_flag(start_square: u8, target_square: u8, flag: u8) -> Move {
        Move(start_square as u16 | ((target_square as u16) << 6) | ((flag as u16) << 12))
    }

    #[inline]
    pub const fn from_value(move_value: u16) -> Move {
        Move(move_value)
    }

    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn start_square(self) -> u8 {
        (self.0 & Self::START_SQUARE_MASK) as u8
    }

    #[inline]
    pub const fn target_square(self) -> u8 {
        ((self.0 & Self::TARGET_SQUARE_MASK) >> 6) as u8
    }

    #[inline]
    pub const fn move_flag(self) -> u8 {
        (self.0 >> 12) as u8
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.move_flag() >= Self::PROMOTE_TO_QUEEN_FLAG
    }

    /// Piece type promoted to, or `Piece::NONE` for non-promotion flags.
    #[inline]
    pub const fn promotion_piece_type(self) -> u8 {
        match self.move_flag() {
            Self::PROMOTE_TO_QUEEN_FLAG => Piece::QUEEN,
            Self::PROMOTE_TO_KNIGHT_FLAG => Piece::KNIGHT,
            Self::PROMOTE_TO_ROOK_FLAG => Piece::ROOK,
            Self::PROMOTE_TO_BISHOP_FLAG => Piece::BISHOP,
            _ => Piece::NONE,
        }
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Two moves are the same move exactly when their packed values match.
    #[inline]
    pub const fn same_move(a: Move, b: Move) -> bool {
        a.0 == b.0
    }
}
