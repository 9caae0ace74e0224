//! Pseudo-legal movement dispatch by piece kind.
//!
//! Pattern and path-blocking only. Check, castling, and en passant are
//! layered on top by the legality filter and the special-move handler.

use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::move_generation::legal_move_shared::{capturable_mask, landing_mask};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{pawn_attacks, pawn_pushes};
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Bitboard of pseudo-legal destinations for the piece on `from`.
pub fn pseudo_legal_targets(board: &BoardState, from: Square) -> u64 {
    let Some(piece) = board.piece_at(from) else {
        return 0;
    };
    let occupancy = board.occupancy();

    match piece.kind {
        PieceKind::Pawn => {
            pawn_pushes(piece.color, from, piece.has_moved, occupancy)
                | (pawn_attacks(piece.color, from) & capturable_mask(board, piece.color))
        }
        PieceKind::Knight => knight_attacks(from) & landing_mask(board, piece.color),
        PieceKind::Bishop => bishop_attacks(from, occupancy) & landing_mask(board, piece.color),
        PieceKind::Rook => rook_attacks(from, occupancy) & landing_mask(board, piece.color),
        PieceKind::Queen => queen_attacks(from, occupancy) & landing_mask(board, piece.color),
        PieceKind::King => king_attacks(from) & landing_mask(board, piece.color),
    }
}

#[inline]
pub fn is_pseudo_legal_move(board: &BoardState, from: Square, to: Square) -> bool {
    (pseudo_legal_targets(board, from) & to.bit()) != 0
}

#[cfg(test)]
mod tests {
    use super::{is_pseudo_legal_move, pseudo_legal_targets};
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::BoardState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn opening_pseudo_moves() {
        let board = BoardState::new_game();
        assert!(is_pseudo_legal_move(&board, sq("e2"), sq("e4")));
        assert!(is_pseudo_legal_move(&board, sq("g1"), sq("f3")));
        assert!(!is_pseudo_legal_move(&board, sq("f1"), sq("c4")));
        assert!(!is_pseudo_legal_move(&board, sq("a1"), sq("a2")));
        assert_eq!(pseudo_legal_targets(&board, sq("e1")), 0);
        assert_eq!(pseudo_legal_targets(&board, sq("e4")), 0);
    }

    #[test]
    fn pawn_captures_only_onto_enemies() {
        let board = BoardState::from_fen("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        assert!(is_pseudo_legal_move(&board, sq("e4"), sq("d5")));
        assert!(!is_pseudo_legal_move(&board, sq("e4"), sq("f5")));
        assert!(is_pseudo_legal_move(&board, sq("e4"), sq("e5")));
    }

    #[test]
    fn pawn_never_targets_a_king() {
        let board = BoardState::from_fen("8/8/8/3k4/4P3/8/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        assert!(!is_pseudo_legal_move(&board, sq("e4"), sq("d5")));
    }

    #[test]
    fn sliders_respect_blockers() {
        let board = BoardState::from_fen("4k3/8/8/8/8/2p5/8/Q3K3 w - - 0 1")
            .expect("fixture FEN should parse");
        assert!(is_pseudo_legal_move(&board, sq("a1"), sq("c3")));
        assert!(!is_pseudo_legal_move(&board, sq("a1"), sq("d4")));
        assert!(is_pseudo_legal_move(&board, sq("a1"), sq("a8")));
        assert!(!is_pseudo_legal_move(&board, sq("a1"), sq("e1")));
    }
}
