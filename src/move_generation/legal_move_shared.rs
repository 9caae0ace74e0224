use crate::game_state::{chess_types::*, game_state::BoardState};

/// Piece of `color` standing on `square`, if any.
#[inline]
pub fn piece_of_color_on(board: &BoardState, color: Color, square: Square) -> Option<Piece> {
    board.piece_at(square).filter(|piece| piece.color == color)
}

/// Squares `color` may land on by capture: opposing pieces other than the King.
#[inline]
pub fn capturable_mask(board: &BoardState, color: Color) -> u64 {
    let enemy = color.opposite();
    board.occupancy_by_color(enemy) & !board.pieces_bitboard(enemy, PieceKind::King)
}

/// Squares that are neither friendly nor the opposing King.
#[inline]
pub fn landing_mask(board: &BoardState, color: Color) -> u64 {
    !board.occupancy_by_color(color) & !board.pieces_bitboard(color.opposite(), PieceKind::King)
}
