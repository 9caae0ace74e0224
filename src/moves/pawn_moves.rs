//! Pawn movement: forward pushes and the diagonal capture footprint.
//!
//! White pawns advance toward row 0, Black pawns toward row 7.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::king_moves::bit_if_on_board;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

/// Diagonal squares a pawn threatens, independent of what occupies them.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

/// Forward pushes onto empty squares. The double step needs an unmoved
/// pawn on its home row and both squares empty.
pub fn pawn_pushes(color: Color, from: Square, has_moved: bool, occupancy: u64) -> u64 {
    let dir = color.pawn_direction();
    let Some(one) = from.offset(dir, 0) else {
        return 0;
    };
    if (occupancy & one.bit()) != 0 {
        return 0;
    }

    let mut pushes = one.bit();
    if !has_moved && from.row() == color.pawn_home_row() {
        if let Some(two) = one.offset(dir, 0) {
            if (occupancy & two.bit()) == 0 {
                pushes |= two.bit();
            }
        }
    }
    pushes
}

/// True when `to` is two rows straight ahead of `from`.
#[inline]
pub fn is_double_step(color: Color, from: Square, to: Square) -> bool {
    from.col() == to.col() && to.row() as i8 - from.row() as i8 == 2 * color.pawn_direction()
}

const fn generate_pawn_attacks(row_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i32;
        let col = (index % 8) as i32;

        table[index] = bit_if_on_board(row + row_step, col - 1)
            | bit_if_on_board(row + row_step, col + 1);
        index += 1;
    }

    table
}
