//! Rook movement: straight lines with a clear path.

use crate::game_state::chess_types::Square;
use crate::moves::rays::{trace_rays, ORTHOGONAL_STEPS};

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    trace_rays(square, &ORTHOGONAL_STEPS, occupancy)
}
