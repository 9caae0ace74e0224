//! Game session facade for the display collaborator.
//!
//! `ChessSession` owns the one live `BoardState` of a game and is the only
//! place it changes. `attempt_move` and `resolve_promotion` are the mutating
//! entry points; everything else is a read-only query. A rejected move is a
//! value, not an error, and leaves the session exactly as it was.

use std::error::Error;
use std::fmt;

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::game_termination::{termination_status, TerminationStatus};
use crate::move_generation::legal_move_apply::{advance_to_promotion, apply_move, complete_promotion};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_destinations, legal_move};
use crate::move_generation::move_generator::MoveGenerationError;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Rejected,
    Moved,
    MovedWithCapture,
    Castled,
    EnPassant,
    /// The pawn now on this square waits for `resolve_promotion`.
    PromotionPending(Square),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoPendingPromotion,
    InvalidPromotionPiece(PieceKind),
    Internal(MoveGenerationError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoPendingPromotion => write!(f, "no promotion is pending"),
            SessionError::InvalidPromotionPiece(kind) => {
                write!(f, "a pawn cannot promote to {kind:?}")
            }
            SessionError::Internal(err) => write!(f, "internal rules error: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SessionError::Internal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveGenerationError> for SessionError {
    fn from(err: MoveGenerationError) -> Self {
        SessionError::Internal(err)
    }
}

/// One completed half-move as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub outcome: MoveOutcome,
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Clone)]
struct PendingPromotion {
    mv: ChessMove,
    outcome_if_plain: MoveOutcome,
}

#[derive(Debug, Clone)]
pub struct ChessSession {
    board: BoardState,
    pending: Option<PendingPromotion>,
    termination: TerminationStatus,
    history: Vec<MoveRecord>,
}

impl Default for ChessSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessSession {
    pub fn new() -> Self {
        Self::with_board(BoardState::new_game())
    }

    /// Start from an arbitrary position. The position must hold one King
    /// per color.
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let board = BoardState::from_fen(fen)?;
        board.validate()?;
        Ok(Self::with_board(board))
    }

    fn with_board(board: BoardState) -> Self {
        let termination = termination_status(&board);
        Self {
            board,
            pending: None,
            termination,
            history: Vec::new(),
        }
    }

    /// Discard the game and set up the standard opening position.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.termination.is_over() || self.pending.is_some() {
            return MoveOutcome::Rejected;
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.board.side_to_move => {}
            _ => return MoveOutcome::Rejected,
        }
        let Some(mv) = legal_move(&self.board, from, to) else {
            return MoveOutcome::Rejected;
        };

        let outcome = match mv.kind {
            MoveKind::Castle { .. } => MoveOutcome::Castled,
            MoveKind::EnPassant { .. } => MoveOutcome::EnPassant,
            MoveKind::Capture => MoveOutcome::MovedWithCapture,
            MoveKind::Quiet | MoveKind::DoubleStep => MoveOutcome::Moved,
        };

        if mv.is_promotion {
            return match advance_to_promotion(&self.board, &mv) {
                Ok(next) => {
                    self.board = next;
                    self.pending = Some(PendingPromotion {
                        mv,
                        outcome_if_plain: outcome,
                    });
                    MoveOutcome::PromotionPending(to)
                }
                Err(err) => {
                    debug_assert!(false, "legal move {from}->{to} failed to apply: {err}");
                    MoveOutcome::Rejected
                }
            };
        }

        match apply_move(&self.board, &mv) {
            Ok(next) => {
                self.history.push(MoveRecord {
                    color: self.board.side_to_move,
                    from,
                    to,
                    outcome,
                    promotion: None,
                });
                self.commit(next);
                outcome
            }
            Err(err) => {
                debug_assert!(false, "legal move {from}->{to} failed to apply: {err}");
                MoveOutcome::Rejected
            }
        }
    }

    pub fn resolve_promotion(&mut self, kind: PieceKind) -> Result<(), SessionError> {
        let Some(pending) = self.pending.as_ref() else {
            return Err(SessionError::NoPendingPromotion);
        };
        if !kind.is_promotion_choice() {
            return Err(SessionError::InvalidPromotionPiece(kind));
        }

        let next = complete_promotion(&self.board, pending.mv.to, kind)?;
        let record = MoveRecord {
            color: self.board.side_to_move,
            from: pending.mv.from,
            to: pending.mv.to,
            outcome: pending.outcome_if_plain,
            promotion: Some(kind),
        };

        self.pending = None;
        self.history.push(record);
        self.commit(next);
        Ok(())
    }

    fn commit(&mut self, next: BoardState) {
        debug_assert!(
            next.validate().is_ok(),
            "board invariant broken: {:?}",
            next.validate()
        );
        self.board = next;
        self.termination = termination_status(&self.board);
    }

    /// Snapshot of every piece for display.
    pub fn current_board(&self) -> Vec<PieceRecord> {
        self.board.snapshot()
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    #[inline]
    pub fn termination_status(&self) -> TerminationStatus {
        self.termination
    }

    /// Square of the pawn waiting for a promotion choice.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending.as_ref().map(|pending| pending.mv.to)
    }

    /// Move hints for the piece on `square`. Empty unless that piece belongs
    /// to the side to move and the game is still accepting moves.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if self.termination.is_over() || self.pending.is_some() {
            return Vec::new();
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.board.side_to_move => {
                legal_destinations(&self.board, square)
            }
            _ => Vec::new(),
        }
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::{ChessSession, MoveOutcome, SessionError};
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::move_generation::game_termination::TerminationStatus;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn play(session: &mut ChessSession, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            let outcome = session.attempt_move(sq(from), sq(to));
            assert_ne!(outcome, MoveOutcome::Rejected, "{from}->{to} was rejected");
        }
    }

    #[test]
    fn e2_e4_opens_the_game() {
        let mut session = ChessSession::new();
        let e2 = Square::new(6, 4).expect("e2");
        let e4 = Square::new(4, 4).expect("e4");

        assert_eq!(session.attempt_move(e2, e4), MoveOutcome::Moved);
        assert_eq!(session.board().halfmove_clock, 0);
        assert_eq!(session.side_to_move(), Color::Black);
        assert_eq!(session.board().move_count, 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn wrong_side_and_illegal_moves_are_rejected_without_change() {
        let mut session = ChessSession::new();
        let before = session.board().clone();

        assert_eq!(session.attempt_move(sq("e7"), sq("e5")), MoveOutcome::Rejected);
        assert_eq!(session.attempt_move(sq("e2"), sq("e5")), MoveOutcome::Rejected);
        assert_eq!(session.attempt_move(sq("e4"), sq("e5")), MoveOutcome::Rejected);
        assert_eq!(session.attempt_move(sq("a1"), sq("a2")), MoveOutcome::Rejected);
        assert_eq!(session.board(), &before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn halfmove_clock_counts_quiet_piece_moves() {
        let mut session = ChessSession::new();
        play(&mut session, &[("g1", "f3"), ("g8", "f6"), ("b1", "c3")]);
        assert_eq!(session.board().halfmove_clock, 3);

        play(&mut session, &[("e7", "e5")]);
        assert_eq!(session.board().halfmove_clock, 0);

        play(&mut session, &[("f3", "g5"), ("f6", "e4")]);
        assert_eq!(session.board().halfmove_clock, 2);
        assert_eq!(session.attempt_move(sq("c3"), sq("e4")), MoveOutcome::MovedWithCapture);
        assert_eq!(session.board().halfmove_clock, 0);
    }

    #[test]
    fn kingside_castle_relocates_the_rook() {
        let mut session =
            ChessSession::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
                .expect("fixture FEN should load");
        let king_from = Square::new(7, 4).expect("e1");
        let king_to = Square::new(7, 6).expect("g1");

        assert!(session.legal_destinations(king_from).contains(&king_to));
        assert_eq!(session.attempt_move(king_from, king_to), MoveOutcome::Castled);

        let board = session.board();
        let rook = board.piece_at(Square::new(7, 5).expect("f1")).expect("rook on f1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(board.piece_at(Square::new(7, 7).expect("h1")).is_none());
        assert_eq!(session.side_to_move(), Color::Black);
    }

    #[test]
    fn king_that_returns_home_cannot_castle() {
        let mut session =
            ChessSession::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
                .expect("fixture FEN should load");
        play(
            &mut session,
            &[("e1", "f1"), ("h7", "h6"), ("f1", "e1"), ("h6", "h5")],
        );

        let king = session.board().piece_at(sq("e1")).expect("king back on e1");
        assert!(king.has_moved);
        assert!(!session.legal_destinations(sq("e1")).contains(&sq("g1")));
        assert_eq!(session.attempt_move(sq("e1"), sq("g1")), MoveOutcome::Rejected);
        assert_eq!(session.attempt_move(sq("e1"), sq("c1")), MoveOutcome::Rejected);
        assert_eq!(session.side_to_move(), Color::White);
    }

    #[test]
    fn rook_that_returns_home_loses_only_its_side() {
        let mut session =
            ChessSession::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
                .expect("fixture FEN should load");
        play(
            &mut session,
            &[("h1", "g1"), ("a7", "a6"), ("g1", "h1"), ("a6", "a5")],
        );

        let rook = session.board().piece_at(sq("h1")).expect("rook back on h1");
        assert!(rook.has_moved);
        assert_eq!(session.attempt_move(sq("e1"), sq("g1")), MoveOutcome::Rejected);
        assert_eq!(session.attempt_move(sq("e1"), sq("c1")), MoveOutcome::Castled);
    }

    #[test]
    fn fools_mate_ends_in_checkmate() {
        let mut session = ChessSession::new();
        play(&mut session, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
        assert_eq!(session.termination_status(), TerminationStatus::Ongoing);

        play(&mut session, &[("d8", "h4")]);
        assert!(session.is_in_check(Color::White));
        assert_eq!(
            session.termination_status(),
            TerminationStatus::Checkmate(Color::White)
        );
        assert_eq!(session.attempt_move(sq("e1"), sq("f2")), MoveOutcome::Rejected);
        assert!(session.legal_destinations(sq("a2")).is_empty());
    }

    #[test]
    fn black_gets_mated_by_mirrored_fools_mate() {
        let mut session = ChessSession::new();
        play(
            &mut session,
            &[("e2", "e4"), ("f7", "f6"), ("d2", "d4"), ("g7", "g5"), ("d1", "h5")],
        );
        assert_eq!(
            session.termination_status(),
            TerminationStatus::Checkmate(Color::Black)
        );
    }

    #[test]
    fn en_passant_window_is_one_half_move() {
        let mut session = ChessSession::new();
        play(&mut session, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);

        let mut late = session.clone();
        assert_eq!(session.attempt_move(sq("e5"), sq("d6")), MoveOutcome::EnPassant);
        assert!(session.board().piece_at(sq("d5")).is_none());
        assert_eq!(session.board().halfmove_clock, 0);

        play(&mut late, &[("h2", "h3"), ("h7", "h6")]);
        assert_eq!(late.attempt_move(sq("e5"), sq("d6")), MoveOutcome::Rejected);
    }

    #[test]
    fn promotion_blocks_the_turn_until_resolved() {
        let mut session = ChessSession::from_fen("7k/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("fixture FEN should load");

        assert_eq!(
            session.attempt_move(sq("a7"), sq("a8")),
            MoveOutcome::PromotionPending(sq("a8"))
        );
        assert_eq!(session.pending_promotion(), Some(sq("a8")));
        assert_eq!(session.side_to_move(), Color::White);
        assert_eq!(session.attempt_move(sq("e1"), sq("e2")), MoveOutcome::Rejected);
        assert_eq!(
            session.resolve_promotion(PieceKind::King),
            Err(SessionError::InvalidPromotionPiece(PieceKind::King))
        );

        session
            .resolve_promotion(PieceKind::Rook)
            .expect("rook promotion should resolve");
        assert_eq!(session.pending_promotion(), None);
        assert_eq!(session.side_to_move(), Color::Black);
        let rook = session.board().piece_at(sq("a8")).expect("rook on a8");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(session.is_in_check(Color::Black));
        assert_eq!(session.history().last().and_then(|r| r.promotion), Some(PieceKind::Rook));
        assert_eq!(session.resolve_promotion(PieceKind::Queen), Err(SessionError::NoPendingPromotion));
    }

    #[test]
    fn queen_promotion_can_deliver_mate() {
        let mut session = ChessSession::from_fen("k7/2P5/1K6/8/8/8/8/8 w - - 0 1")
            .expect("fixture FEN should load");
        assert_eq!(
            session.attempt_move(sq("c7"), sq("c8")),
            MoveOutcome::PromotionPending(sq("c8"))
        );
        session
            .resolve_promotion(PieceKind::Queen)
            .expect("queen promotion should resolve");
        assert_eq!(
            session.termination_status(),
            TerminationStatus::Checkmate(Color::Black)
        );
    }

    #[test]
    fn restart_discards_the_game() {
        let mut session = ChessSession::new();
        play(&mut session, &[("e2", "e4")]);
        session.restart();
        assert_eq!(session.current_board().len(), 32);
        assert_eq!(session.side_to_move(), Color::White);
        assert!(session.history().is_empty());
    }

    #[test]
    fn hints_only_for_the_side_to_move() {
        let session = ChessSession::new();
        assert_eq!(session.legal_destinations(sq("g1")), vec![sq("f3"), sq("h3")]);
        assert!(session.legal_destinations(sq("g8")).is_empty());
        assert!(session.legal_destinations(sq("e4")).is_empty());
    }
}
