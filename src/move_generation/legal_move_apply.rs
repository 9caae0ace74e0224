//! Move execution.
//!
//! Every entry point clones the incoming board and returns the successor,
//! so a caller that discards the result has observed no mutation.

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::move_descriptions::{ChessMove, MoveKind};

/// Apply a whole half-move, including the promotion choice and turn switch.
pub fn apply_move(board: &BoardState, mv: &ChessMove) -> MoveGenResult<BoardState> {
    let mut next = board.clone();
    relocate_pieces(&mut next, mv)?;

    if mv.is_promotion {
        let kind = mv
            .promotion
            .ok_or(MoveGenerationError::MissingPromotionPiece(mv.to))?;
        promote_in_place(&mut next, mv.to, kind)?;
    }

    finish_turn(&mut next);
    Ok(next)
}

/// First stage of a promotion: the pawn lands on its last row and the
/// clocks are updated, but the turn does not pass.
pub fn advance_to_promotion(board: &BoardState, mv: &ChessMove) -> MoveGenResult<BoardState> {
    let mut next = board.clone();
    relocate_pieces(&mut next, mv)?;
    Ok(next)
}

/// Second stage of a promotion: swap the pawn on `square` and pass the turn.
pub fn complete_promotion(
    board: &BoardState,
    square: Square,
    kind: PieceKind,
) -> MoveGenResult<BoardState> {
    let mut next = board.clone();
    promote_in_place(&mut next, square, kind)?;
    finish_turn(&mut next);
    Ok(next)
}

/// Move the pieces on a scratch board without passing the turn. Shared by
/// the executor and the legality simulation.
pub(crate) fn relocate_pieces(board: &mut BoardState, mv: &ChessMove) -> MoveGenResult<()> {
    let mut piece = board
        .remove_piece(mv.from)
        .ok_or(MoveGenerationError::NoPieceOnSquare(mv.from))?;

    let captured = match mv.kind {
        MoveKind::EnPassant { captured } => board.remove_piece(captured),
        _ => board.remove_piece(mv.to),
    };
    if let Some(victim) = captured {
        if victim.kind == PieceKind::King || victim.color == piece.color {
            return Err(MoveGenerationError::InvalidState(format!(
                "move {}->{} would capture a {:?} {:?}",
                mv.from, mv.to, victim.color, victim.kind
            )));
        }
    }

    if let MoveKind::Castle { rook_from, rook_to } = mv.kind {
        let mut rook = board
            .remove_piece(rook_from)
            .ok_or(MoveGenerationError::NoPieceOnSquare(rook_from))?;
        rook.has_moved = true;
        board.place_piece(rook_to, rook);
    }

    piece.has_moved = true;
    board.en_passant_target = None;
    if mv.kind == MoveKind::DoubleStep {
        piece.last_double_step = Some(board.move_count);
        board.en_passant_target = Some(mv.to);
    }

    if piece.kind == PieceKind::Pawn || captured.is_some() {
        board.halfmove_clock = 0;
    } else {
        board.halfmove_clock = board.halfmove_clock.saturating_add(1);
    }

    board.place_piece(mv.to, piece);
    Ok(())
}

fn promote_in_place(board: &mut BoardState, square: Square, kind: PieceKind) -> MoveGenResult<()> {
    if !kind.is_promotion_choice() {
        return Err(MoveGenerationError::InvalidPromotionPiece(kind));
    }

    let pawn = board
        .remove_piece(square)
        .ok_or(MoveGenerationError::NoPieceOnSquare(square))?;
    if pawn.kind != PieceKind::Pawn {
        return Err(MoveGenerationError::InvalidState(format!(
            "promotion square {square} holds a {:?}",
            pawn.kind
        )));
    }

    board.place_piece(square, Piece::new(kind, pawn.color));
    Ok(())
}

fn finish_turn(board: &mut BoardState) {
    board.side_to_move = board.side_to_move.opposite();
    board.move_count = board.move_count.saturating_add(1);
}
