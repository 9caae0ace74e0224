//! Attack and check detection.
//!
//! A square counts as attacked when some piece of the attacking color could
//! capture into it, whatever currently stands there. Pawns contribute their
//! diagonal footprint rather than their pushes.

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(board: &BoardState, color: Color) -> Option<Square> {
    board.king_square(color)
}

#[inline]
pub fn is_king_in_check(board: &BoardState, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        debug_assert!(false, "{color} king is missing from the board");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &BoardState, square: Square, attacker_color: Color) -> bool {
    let occupancy = board.occupancy();

    // Reverse lookups: a pawn of `attacker_color` hits `square` exactly when
    // a pawn of the other color on `square` would hit the pawn.
    let attacker_pawns = board.pieces_bitboard(attacker_color, PieceKind::Pawn);
    if pawn_attacks(attacker_color.opposite(), square) & attacker_pawns != 0 {
        return true;
    }

    let attacker_knights = board.pieces_bitboard(attacker_color, PieceKind::Knight);
    if knight_attacks(square) & attacker_knights != 0 {
        return true;
    }

    let attacker_kings = board.pieces_bitboard(attacker_color, PieceKind::King);
    if king_attacks(square) & attacker_kings != 0 {
        return true;
    }

    let queens = board.pieces_bitboard(attacker_color, PieceKind::Queen);
    let bishops_queens = board.pieces_bitboard(attacker_color, PieceKind::Bishop) | queens;
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = board.pieces_bitboard(attacker_color, PieceKind::Rook) | queens;
    if rook_attacks(square, occupancy) & rooks_queens != 0 {
        return true;
    }

    false
}

/// Every piece of `attacker_color` attacking `square`, in board order.
pub fn attackers_to_square(
    board: &BoardState,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let occupancy = board.occupancy();
    let target_mask = square.bit();

    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| {
            let attacks = match piece.kind {
                PieceKind::Pawn => pawn_attacks(attacker_color, *from),
                PieceKind::Knight => knight_attacks(*from),
                PieceKind::Bishop => bishop_attacks(*from, occupancy),
                PieceKind::Rook => rook_attacks(*from, occupancy),
                PieceKind::Queen => queen_attacks(*from, occupancy),
                PieceKind::King => king_attacks(*from),
            };
            attacks & target_mask != 0
        })
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}
