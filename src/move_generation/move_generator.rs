use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::BoardState;
use crate::moves::move_descriptions::ChessMove;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    NoPieceOnSquare(Square),
    MissingPromotionPiece(Square),
    InvalidPromotionPiece(PieceKind),
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::NoPieceOnSquare(square) => {
                write!(f, "no piece on square {square}")
            }
            MoveGenerationError::MissingPromotionPiece(square) => {
                write!(f, "pawn reaching {square} needs a promotion piece")
            }
            MoveGenerationError::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid board state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub board_after_move: BoardState,
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal move for the side to move, with its successor state.
    fn generate_legal_moves(&self, board: &BoardState) -> MoveGenResult<Vec<GeneratedMove>>;
}
