//! Occupancy-aware ray tracing shared by the sliding pieces.
//!
//! A ray includes the first occupied square it meets and stops there, so a
//! destination is reachable exactly when every square strictly between the
//! origin and the destination is empty.

use crate::game_state::chess_types::Square;

pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn trace_ray(origin: Square, row_step: i8, col_step: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut cursor = origin.offset(row_step, col_step);

    while let Some(square) = cursor {
        attacks |= square.bit();
        if (occupancy & square.bit()) != 0 {
            break;
        }
        cursor = square.offset(row_step, col_step);
    }

    attacks
}

#[inline]
pub fn trace_rays(origin: Square, steps: &[(i8, i8)], occupancy: u64) -> u64 {
    steps
        .iter()
        .fold(0u64, |acc, &(dr, dc)| acc | trace_ray(origin, dr, dc, occupancy))
}
