//! Square conversions for algebraic coordinates.
//!
//! File `a` is column 0 and rank `8` is row 0, so `"e2"` is `(6, 4)`.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
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

    Square::new(b'8' - rank, file - b'a')
        .ok_or_else(|| format!("Algebraic square off the board: {square}"))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
