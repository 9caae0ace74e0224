use crate::game_state::chess_types::Square;
use crate::moves::king_moves::bit_if_on_board;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i32;
        let col = (index % 8) as i32;
        let mut attacks = 0u64;

        attacks |= bit_if_on_board(row + 2, col + 1);
        attacks |= bit_if_on_board(row + 1, col + 2);
        attacks |= bit_if_on_board(row - 1, col + 2);
        attacks |= bit_if_on_board(row - 2, col + 1);
        attacks |= bit_if_on_board(row - 2, col - 1);
        attacks |= bit_if_on_board(row - 1, col - 2);
        attacks |= bit_if_on_board(row + 1, col - 2);
        attacks |= bit_if_on_board(row + 2, col - 1);

        table[index] = attacks;
        index += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let d4 = Square::new(4, 3).expect("d4");
        assert_eq!(knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn knight_from_g1() {
        let g1 = Square::new(7, 6).expect("g1");
        let attacks = knight_attacks(g1);
        assert_ne!(attacks & Square::new(5, 5).expect("f3").bit(), 0);
        assert_ne!(attacks & Square::new(6, 4).expect("e2").bit(), 0);
        assert_eq!(attacks & Square::new(5, 6).expect("g3").bit(), 0);
        assert_eq!(attacks.count_ones(), 3);
    }
}
