//! Packed piece codes.
//!
//! A piece occupies four bits: the low three bits hold the piece type
//! (1 = pawn .. 6 = king) and bit 3 holds the colour (white = 0, black = 8).
//! The value 0 means "no piece". Type and colour are independently
//! extractable with the `0b0111` and `0b1000` masks.

/// Packed 4-bit piece code.
///
/// Construction never validates its inputs; callers are trusted internal
/// code and must pass a type in `1..=6` and a colour of `WHITE` or `BLACK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    // Piece types.
    pub const NONE: u8 = 0;
    pub const PAWN: u8 = 1;
    pub const KNIGHT: u8 = 2;
    pub const BISHOP: u8 = 3;
    pub const ROOK: u8 = 4;
    pub const QUEEN: u8 = 5;
    pub const KING: u8 = 6;

    // Piece colours.
    pub const WHITE: u8 = 0;
    pub const BLACK: u8 = 8;

    // Coloured pieces.
    pub const EMPTY: Piece = Piece(Self::NONE);
    pub const WHITE_PAWN: Piece = Piece(Self::PAWN | Self::WHITE);
    pub const WHITE_KNIGHT: Piece = Piece(Self::KNIGHT | Self::WHITE);
    pub const WHITE_BISHOP: Piece = Piece(Self::BISHOP | Self::WHITE);
    pub const WHITE_ROOK: Piece = Piece(Self::ROOK | Self::WHITE);
    pub const WHITE_QUEEN: Piece = Piece(Self::QUEEN | Self::WHITE);
    pub const WHITE_KING: Piece = Piece(Self::KING | Self::WHITE);
    pub const BLACK_PAWN: Piece = Piece(Self::PAWN | Self::BLACK);
    pub const BLACK_KNIGHT: Piece = Piece(Self::KNIGHT | Self::BLACK);
    pub const BLACK_BISHOP: Piece = Piece(Self::BISHOP | Self::BLACK);
    pub const BLACK_ROOK: Piece = Piece(Self::ROOK | Self::BLACK);
    pub const BLACK_QUEEN: Piece = Piece(Self::QUEEN | Self::BLACK);
    pub const BLACK_KING: Piece = Piece(Self::KING | Self::BLACK);

    /// Every coloured piece, white pieces first.
    pub const PIECE_INDICES: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    const TYPE_MASK: u8 = 0b0111;
    const COLOUR_MASK: u8 = 0b1000;

    #[inline]
    pub const fn make_piece(piece_type: u8, piece_colour: u8) -> Piece {
        Piece(piece_type | piece_colour)
    }

    #[inline]
    pub const fn make_piece_is_white(piece_type: u8, is_white: bool) -> Piece {
        Piece::make_piece(piece_type, if is_white { Self::WHITE } else { Self::BLACK })
    }

    #[inline]
    pub const fn from_value(value: u8) -> Piece {
        Piece(value)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// True if the piece matches the given colour. A piece of type `NONE`
    /// never matches either colour.
    #[inline]
    pub const fn is_colour(self, colour: u8) -> bool {
        (self.0 & Self::COLOUR_MASK) == colour && self.0 != 0
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        self.is_colour(Self::WHITE)
    }

    #[inline]
    pub const fn piece_colour(self) -> u8 {
        self.0 & Self::COLOUR_MASK
    }

    #[inline]
    pub const fn piece_type(self) -> u8 {
        self.0 & Self::TYPE_MASK
    }

    // Rook or queen.
    #[inline]
    pub const fn is_orthogonal_slider(self) -> bool {
        (self.0 & Self::QUEEN) == Self::QUEEN || (self.0 & Self::ROOK) == Self::ROOK
    }

    // Bishop or queen.
    #[inline]
    pub const fn is_diagonal_slider(self) -> bool {
        (self.0 & Self::QUEEN) == Self::QUEEN || (self.0 & Self::BISHOP) == Self::BISHOP
    }

    /// Raw bit test on the type field. Matches rook and queen; a bishop is
    /// NOT matched here and is only reachable through the diagonal
    /// predicate. Mask computations elsewhere rely on this exact split.
    #[inline]
    pub const fn is_sliding_piece(self) -> bool {
        (self.0 & 4) != 0
    }

    /// Render as a board symbol: uppercase for white, lowercase for black,
    /// a space for an empty square.
    #[inline]
    pub const fn symbol(self) -> char {
        let symbol = match self.piece_type() {
            Self::ROOK => 'R',
            Self::KNIGHT => 'N',
            Self::BISHOP => 'B',
            Self::QUEEN => 'Q',
            Self::KING => 'K',
            Self::PAWN => 'P',
            _ => ' ',
        };
        if self.is_white() {
            symbol
        } else {
            symbol.to_ascii_lowercase()
        }
    }

    /// Case-insensitive reverse of `symbol`. Unrecognized characters map to
    /// `NONE` rather than failing.
    #[inline]
    pub const fn piece_type_from_symbol(symbol: char) -> u8 {
        match symbol.to_ascii_uppercase() {
            'R' => Self::ROOK,
            'N' => Self::KNIGHT,
            'B' => Self::BISHOP,
            'Q' => Self::QUEEN,
            'K' => Self::KING,
            'P' => Self::PAWN,
            _ => Self::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;

    #[test]
    fn type_and_colour_extract_independently() {
        let piece = Piece::make_piece(Piece::QUEEN, Piece::BLACK);
        assert_eq!(piece.piece_type(), Piece::QUEEN);
        assert_eq!(piece.piece_colour(), Piece::BLACK);
        assert_eq!(piece, Piece::BLACK_QUEEN);
    }

    #[test]
    fn empty_square_matches_no_colour() {
        assert!(!Piece::EMPTY.is_colour(Piece::WHITE));
        assert!(!Piece::EMPTY.is_colour(Piece::BLACK));
        assert!(Piece::WHITE_PAWN.is_colour(Piece::WHITE));
        assert!(!Piece::WHITE_PAWN.is_colour(Piece::BLACK));
    }

    #[test]
    fn bishop_is_diagonal_but_not_a_sliding_piece_by_bit_test() {
        assert!(Piece::WHITE_BISHOP.is_diagonal_slider());
        assert!(!Piece::WHITE_BISHOP.is_orthogonal_slider());
        assert!(!Piece::WHITE_BISHOP.is_sliding_piece());
        assert!(Piece::BLACK_ROOK.is_sliding_piece());
        assert!(Piece::WHITE_QUEEN.is_sliding_piece());
        assert!(Piece::WHITE_QUEEN.is_diagonal_slider());
        assert!(Piece::BLACK_ROOK.is_orthogonal_slider());
        assert!(!Piece::WHITE_KNIGHT.is_sliding_piece());
    }

    #[test]
    fn symbols_are_cased_by_colour() {
        assert_eq!(Piece::WHITE_KING.symbol(), 'K');
        assert_eq!(Piece::BLACK_KNIGHT.symbol(), 'n');
        assert_eq!(Piece::EMPTY.symbol(), ' ');
    }

    #[test]
    fn symbol_parsing_is_case_insensitive_and_total() {
        assert_eq!(Piece::piece_type_from_symbol('q'), Piece::QUEEN);
        assert_eq!(Piece::piece_type_from_symbol('Q'), Piece::QUEEN);
        assert_eq!(Piece::piece_type_from_symbol('x'), Piece::NONE);
        for piece in Piece::PIECE_INDICES {
            assert_eq!(Piece::piece_type_from_symbol(piece.symbol()), piece.piece_type());
        }
    }
}
