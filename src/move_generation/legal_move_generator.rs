//! Legality filter.
//!
//! Classifies a candidate `(from, to)` as a pseudo-legal or special move,
//! simulates it on a cloned board, and rejects it when the mover's King is
//! left attacked.

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_apply::{apply_move, relocate_pieces};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::move_generation::pseudo_legal::{is_pseudo_legal_move, pseudo_legal_targets};
use crate::move_generation::special_moves::{
    castling_candidates, castling_rook_squares, en_passant_candidates, en_passant_capture_square,
    is_promotion_move,
};
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::moves::pawn_moves::is_double_step;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &BoardState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut legal = Vec::<GeneratedMove>::with_capacity(64);

        for (from, _) in board.pieces_of(board.side_to_move) {
            for to in squares_of(candidate_destinations(board, from)) {
                let Some(mv) = legal_move(board, from, to) else {
                    continue;
                };

                if mv.is_promotion {
                    for choice in PROMOTION_CHOICES {
                        let promoted = mv.promoting(Some(choice));
                        legal.push(GeneratedMove {
                            chess_move: promoted,
                            board_after_move: apply_move(board, &promoted)?,
                        });
                    }
                } else {
                    legal.push(GeneratedMove {
                        chess_move: mv,
                        board_after_move: apply_move(board, &mv)?,
                    });
                }
            }
        }

        Ok(legal)
    }
}

/// Recognize `from -> to` as a pseudo-legal or special move, ignoring check.
/// Promotion moves come back flagged with no choice yet.
pub fn classify_move(board: &BoardState, from: Square, to: Square) -> Option<ChessMove> {
    let piece = board.piece_at(from)?;

    let castle_shape =
        piece.kind == PieceKind::King && from.row() == to.row() && from.col().abs_diff(to.col()) == 2;

    let kind = if castle_shape {
        let (rook_from, rook_to) = castling_rook_squares(board, from, to)?;
        MoveKind::Castle { rook_from, rook_to }
    } else if let Some(captured) = en_passant_capture_square(board, from, to) {
        MoveKind::EnPassant { captured }
    } else if is_pseudo_legal_move(board, from, to) {
        if !board.is_empty(to) {
            MoveKind::Capture
        } else if piece.kind == PieceKind::Pawn && is_double_step(piece.color, from, to) {
            MoveKind::DoubleStep
        } else {
            MoveKind::Quiet
        }
    } else {
        return None;
    };

    let mv = ChessMove::new(from, to, kind);
    if is_promotion_move(piece, to) {
        Some(mv.promoting(None))
    } else {
        Some(mv)
    }
}

/// The classified move when it is legal for the piece on `from`.
pub fn legal_move(board: &BoardState, from: Square, to: Square) -> Option<ChessMove> {
    let mv = classify_move(board, from, to)?;
    leaves_king_safe(board, &mv).then_some(mv)
}

#[inline]
pub fn is_legal_move(board: &BoardState, from: Square, to: Square) -> bool {
    legal_move(board, from, to).is_some()
}

/// Legal destinations of the piece on `from`, ascending by square index.
pub fn legal_destinations(board: &BoardState, from: Square) -> Vec<Square> {
    squares_of(candidate_destinations(board, from))
        .filter(|to| is_legal_move(board, from, *to))
        .collect()
}

pub fn has_any_legal_move(board: &BoardState, color: Color) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        squares_of(candidate_destinations(board, from)).any(|to| is_legal_move(board, from, to))
    })
}

/// Superset of the legal destinations: pattern moves plus special-move probes.
fn candidate_destinations(board: &BoardState, from: Square) -> u64 {
    pseudo_legal_targets(board, from)
        | castling_candidates(board, from)
        | en_passant_candidates(board, from)
}

/// Simulate on a scratch copy; the caller's board is untouched either way.
fn leaves_king_safe(board: &BoardState, mv: &ChessMove) -> bool {
    let Some(mover) = board.piece_at(mv.from) else {
        return false;
    };

    let mut scratch = board.clone();
    if relocate_pieces(&mut scratch, mv).is_err() {
        return false;
    }
    !is_king_in_check(&scratch, mover.color)
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move, is_legal_move, legal_destinations, LegalMoveGenerator};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::BoardState;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn fixture(fen: &str) -> BoardState {
        BoardState::from_fen(fen).expect("fixture FEN should parse")
    }

    #[test]
    fn twenty_legal_moves_from_the_start() {
        let board = BoardState::new_game();
        let moves = LegalMoveGenerator
            .generate_legal_moves(&board)
            .expect("move generation should succeed");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn same_color_destination_is_never_legal() {
        let board = BoardState::new_game();
        for (from, piece) in board.pieces() {
            for (to, _) in board.pieces_of(piece.color) {
                assert!(!is_legal_move(&board, from, to), "{from}->{to} hits a friendly piece");
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let board = fixture("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(!is_legal_move(&board, sq("e2"), sq("c3")));
        assert!(legal_destinations(&board, sq("e2")).is_empty());
        assert!(is_legal_move(&board, sq("e1"), sq("d1")));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let board = fixture("4k3/8/8/8/8/8/5r2/4K3 w - - 0 1");
        assert!(is_legal_move(&board, sq("e1"), sq("f2")));
        assert!(!is_legal_move(&board, sq("e1"), sq("e2")));
        assert!(!is_legal_move(&board, sq("e1"), sq("f1")));
        assert!(is_legal_move(&board, sq("e1"), sq("d1")));
    }

    #[test]
    fn rejected_probe_leaves_board_identical() {
        let board = fixture("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let before = board.clone();
        assert!(!is_legal_move(&board, sq("e2"), sq("g3")));
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_discovered_check_is_illegal() {
        let board = fixture("8/8/8/KPp4r/8/8/8/7k w - c6 0 2");
        assert!(!is_legal_move(&board, sq("b5"), sq("c6")));
        assert!(is_legal_move(&board, sq("b5"), sq("b6")));
    }

    #[test]
    fn castling_appears_among_king_destinations() {
        let board = fixture("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let destinations = legal_destinations(&board, sq("e1"));
        assert!(destinations.contains(&sq("g1")));
        assert!(destinations.contains(&sq("c1")));
    }

    #[test]
    fn bare_kings_still_have_moves() {
        let board = fixture("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(has_any_legal_move(&board, Color::White));
        assert!(has_any_legal_move(&board, Color::Black));
    }
}
