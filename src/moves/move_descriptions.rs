//! Typed move descriptions.
//!
//! A `ChessMove` carries what the executor needs: origin, destination, the
//! special-move classification, and the promotion piece once it is known.

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    DoubleStep,
    Capture,
    Castle { rook_from: Square, rook_to: Square },
    /// `captured` is the square the taken pawn actually stands on.
    EnPassant { captured: Square },
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// Set for pawn moves onto the farthest row once the choice is known.
    pub promotion: Option<PieceKind>,
    /// True for pawn moves onto the farthest row, with or without a choice.
    pub is_promotion: bool,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self {
            from,
            to,
            kind,
            promotion: None,
            is_promotion: false,
        }
    }

    #[inline]
    pub const fn promoting(mut self, choice: Option<PieceKind>) -> Self {
        self.is_promotion = true;
        self.promotion = choice;
        self
    }
}
