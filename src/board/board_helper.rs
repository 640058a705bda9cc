//! Square index helpers and coordinate conversions.
//!
//! Squares are indexed rank-major (`0 = a1`, `63 = h8`). Converts between
//! human-readable coordinates (e.g., `e4`) and internal square indices, and
//! classifies squares into the light/dark colour complexes used by the
//! same-coloured-bishop draw rule.

use crate::board::board_state::Square;

#[inline]
pub const fn file_index(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_index(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_from_coords(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// True for squares on the light colour complex. `a1` (index 0) is dark.
#[inline]
pub const fn is_light_square(square: Square) -> bool {
    (file_index(square) + rank_index(square)) % 2 != 0
}

/// Convert long algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(square_from_coords(file - b'a', rank - b'1'))
}

/// Convert a square index (`0..=63`) to long algebraic notation.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square > 63 {
        return Err(format!("Square index out of bounds: {square}"));
    }

    let file_char = char::from(b'a' + file_index(square));
    let rank_char = char::from(b'1' + rank_index(square));

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").unwrap(), 0);
        assert_eq!(algebraic_to_square("h1").unwrap(), 7);
        assert_eq!(algebraic_to_square("a8").unwrap(), 56);
        assert_eq!(algebraic_to_square("h8").unwrap(), 63);
        assert_eq!(square_to_algebraic(28).unwrap(), "e4");
        assert!(algebraic_to_square("i9").is_err());
        assert!(square_to_algebraic(64).is_err());
    }

    #[test]
    fn colour_complex_follows_coordinate_parity() {
        assert!(!is_light_square(algebraic_to_square("a1").unwrap()));
        assert!(is_light_square(algebraic_to_square("h1").unwrap()));
        assert!(is_light_square(algebraic_to_square("b1").unwrap()));
        assert!(is_light_square(algebraic_to_square("a8").unwrap()));
        assert!(!is_light_square(algebraic_to_square("h8").unwrap()));
    }
}
