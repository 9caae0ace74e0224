//! Castling, en passant, and promotion eligibility.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::piece_of_color_on;
use crate::moves::pawn_moves::pawn_attacks;

/// Rook squares `(from, to)` when the King on `king_from` may castle to
/// `king_to`, else `None`.
///
/// Requires an unmoved King and an unmoved Rook of the same color on the
/// corner of the same row, an empty path between them, and none of the
/// King's origin, transit, and destination squares attacked.
pub fn castling_rook_squares(
    board: &BoardState,
    king_from: Square,
    king_to: Square,
) -> Option<(Square, Square)> {
    let king = board.piece_at(king_from)?;
    if king.kind != PieceKind::King || king.has_moved {
        return None;
    }
    if king_from.row() != king_to.row() {
        return None;
    }

    let d_col = king_to.col() as i8 - king_from.col() as i8;
    if d_col.abs() != 2 {
        return None;
    }

    let step = d_col.signum();
    let rook_col = if step > 0 {
        KINGSIDE_ROOK_COL
    } else {
        QUEENSIDE_ROOK_COL
    };
    let rook_from = Square::new(king_from.row(), rook_col)?;
    let rook = piece_of_color_on(board, king.color, rook_from)?;
    if rook.kind != PieceKind::Rook || rook.has_moved {
        return None;
    }

    let (low, high) = if rook_col < king_from.col() {
        (rook_col, king_from.col())
    } else {
        (king_from.col(), rook_col)
    };
    for col in (low + 1)..high {
        let square = Square::new(king_from.row(), col)?;
        if !board.is_empty(square) {
            return None;
        }
    }

    let transit = king_from.offset(0, step)?;
    let enemy = king.color.opposite();
    if [king_from, transit, king_to]
        .iter()
        .any(|square| is_square_attacked(board, *square, enemy))
    {
        return None;
    }

    let rook_to = king_to.offset(0, -step)?;
    Some((rook_from, rook_to))
}

/// Square of the pawn captured when the pawn on `from` takes en passant
/// onto `to`, else `None`.
pub fn en_passant_capture_square(board: &BoardState, from: Square, to: Square) -> Option<Square> {
    let pawn = board.piece_at(from)?;
    if pawn.kind != PieceKind::Pawn {
        return None;
    }
    if pawn_attacks(pawn.color, from) & to.bit() == 0 || !board.is_empty(to) {
        return None;
    }

    let captured = Square::new(from.row(), to.col())?;
    if board.en_passant_target != Some(captured) {
        return None;
    }

    let victim = piece_of_color_on(board, pawn.color.opposite(), captured)?;
    let fresh = victim
        .last_double_step
        .is_some_and(|index| index + 1 == board.move_count);
    (victim.kind == PieceKind::Pawn && fresh).then_some(captured)
}

/// True when moving `piece` onto `to` promotes it.
#[inline]
pub fn is_promotion_move(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
}

/// Castling destinations worth probing for the King on `from`.
pub fn castling_candidates(board: &BoardState, from: Square) -> u64 {
    let Some(king) = board.piece_at(from) else {
        return 0;
    };
    if king.kind != PieceKind::King || king.has_moved {
        return 0;
    }
    [2i8, -2]
        .iter()
        .filter_map(|d_col| from.offset(0, *d_col))
        .fold(0u64, |acc, square| acc | square.bit())
}

/// En passant destination worth probing for the pawn on `from`.
pub fn en_passant_candidates(board: &BoardState, from: Square) -> u64 {
    let Some(pawn) = board.piece_at(from) else {
        return 0;
    };
    let Some(target) = board.en_passant_target else {
        return 0;
    };
    if pawn.kind != PieceKind::Pawn || target.row() != from.row() {
        return 0;
    }
    target
        .offset(pawn.color.pawn_direction(), 0)
        .map_or(0, |square| square.bit() & pawn_attacks(pawn.color, from))
}
