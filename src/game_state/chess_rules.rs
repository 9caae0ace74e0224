//! Canonical chess-rule constants.
//!
//! Static rule literals shared by board setup, move execution, and the
//! termination evaluator.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from column 0 to column 7, identical for both colors.
pub const BACK_ROW_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may become on its farthest row, in dialog order.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Half-moves without a pawn move or capture that end the game.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// Column the King starts on.
pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
