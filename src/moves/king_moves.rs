//! King attack table: the eight neighbouring squares of every square.

use crate::game_state::chess_types::Square;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i32;
        let col = (index % 8) as i32;
        let mut attacks = 0u64;

        attacks |= bit_if_on_board(row - 1, col - 1);
        attacks |= bit_if_on_board(row - 1, col);
        attacks |= bit_if_on_board(row - 1, col + 1);
        attacks |= bit_if_on_board(row, col - 1);
        attacks |= bit_if_on_board(row, col + 1);
        attacks |= bit_if_on_board(row + 1, col - 1);
        attacks |= bit_if_on_board(row + 1, col);
        attacks |= bit_if_on_board(row + 1, col + 1);

        table[index] = attacks;
        index += 1;
    }

    table
}

pub(crate) const fn bit_if_on_board(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (col as usize))
}
