//! Game-termination evaluation.
//!
//! Polled at every turn boundary for the side to move. Conditions are tried
//! in a fixed order and the first one that holds ends the game.

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVE_LIMIT;
use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationStatus {
    Ongoing,
    /// Carries the side that has been mated.
    Checkmate(Color),
    Stalemate,
    InsufficientMaterial,
    FiftyMoveDraw,
}

impl TerminationStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, TerminationStatus::Ongoing)
    }

    /// Winning color, `None` for draws and unfinished games.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            TerminationStatus::Checkmate(loser) => Some(loser.opposite()),
            _ => None,
        }
    }
}

#[inline]
pub fn is_checkmate(board: &BoardState, color: Color) -> bool {
    is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

#[inline]
pub fn is_stalemate(board: &BoardState, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

/// Bare-minor endings counted as dead draws: no Pawn, Rook, or Queen, and
/// at most one minor piece, exactly two Knights, or exactly two Bishops on
/// squares of the same color.
pub fn is_insufficient_material(board: &BoardState) -> bool {
    let mut knights = 0usize;
    let mut bishop_parities = Vec::<u8>::with_capacity(2);

    for (square, piece) in board.pieces() {
        match piece.kind {
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => knights += 1,
            PieceKind::Bishop => bishop_parities.push(square.parity()),
            PieceKind::King => {}
        }
    }

    match (knights, bishop_parities.as_slice()) {
        (0, []) => true,
        (1, []) | (0, [_]) => true,
        (2, []) => true,
        (0, [a, b]) => a == b,
        _ => false,
    }
}

#[inline]
pub fn is_fifty_move_draw(board: &BoardState) -> bool {
    board.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT
}

/// Checkmate, then stalemate, then insufficient material, then the
/// fifty-move rule.
pub fn termination_status(board: &BoardState) -> TerminationStatus {
    let side = board.side_to_move;
    let in_check = is_king_in_check(board, side);
    let can_move = has_any_legal_move(board, side);

    if in_check && !can_move {
        TerminationStatus::Checkmate(side)
    } else if !can_move {
        TerminationStatus::Stalemate
    } else if is_insufficient_material(board) {
        TerminationStatus::InsufficientMaterial
    } else if is_fifty_move_draw(board) {
        TerminationStatus::FiftyMoveDraw
    } else {
        TerminationStatus::Ongoing
    }
}
