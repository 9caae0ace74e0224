//! Bishop movement: diagonals with a clear path.

use crate::game_state::chess_types::Square;
use crate::moves::rays::{trace_rays, DIAGONAL_STEPS};

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    trace_rays(square, &DIAGONAL_STEPS, occupancy)
}
