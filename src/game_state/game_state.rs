//! Authoritative board state.
//!
//! `BoardState` is a plain value: a flat array-by-square of piece records plus
//! turn and clock fields. Every query takes `&BoardState`, and the move
//! executor produces successor states by cloning, so check simulation never
//! has to restore anything.

use crate::game_state::chess_rules::{BACK_ROW_LAYOUT, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub squares: [Option<Piece>; 64],

    pub side_to_move: Color,

    /// Completed half-moves since the game started.
    pub move_count: u32,
    /// Half-moves since the last pawn move or capture.
    pub halfmove_clock: u16,

    /// Square of the pawn currently capturable en passant.
    pub en_passant_target: Option<Square>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            side_to_move: Color::White,
            move_count: 0,
            halfmove_clock: 0,
            en_passant_target: None,
        }
    }
}

impl BoardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard 32-piece opening layout, White to move.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_row();
            let pawns = color.pawn_home_row();
            for (col, kind) in BACK_ROW_LAYOUT.iter().enumerate() {
                let col = col as u8;
                board.squares[usize::from(back) * 8 + usize::from(col)] =
                    Some(Piece::new(*kind, color));
                board.squares[usize::from(pawns) * 8 + usize::from(col)] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.squares[square.index()].as_mut()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Put `piece` on an empty square.
    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        debug_assert!(
            self.is_empty(square),
            "two pieces would share square {square}"
        );
        self.squares[square.index()] = Some(piece);
    }

    #[inline]
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Iterate `(square, piece)` pairs in ascending square index.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(index, slot)| {
            let piece = (*slot)?;
            Square::from_index(index as u8).map(|square| (square, piece))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupancy(&self) -> u64 {
        self.pieces().fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    pub fn occupancy_by_color(&self, color: Color) -> u64 {
        self.pieces_of(color)
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    /// Bitboard of `color`'s pieces of the given kind.
    pub fn pieces_bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Display snapshot of every piece.
    pub fn snapshot(&self) -> Vec<PieceRecord> {
        self.pieces()
            .map(|(square, piece)| PieceRecord {
                kind: piece.kind,
                color: piece.color,
                square,
                has_moved: piece.has_moved,
            })
            .collect()
    }

    /// Check the structural invariants that play relies on.
    pub fn validate(&self) -> Result<(), String> {
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(format!("{color} has {kings} kings, expected exactly one"));
            }
        }

        if let Some(target) = self.en_passant_target {
            match self.piece_at(target) {
                Some(piece) if piece.kind == PieceKind::Pawn => {}
                _ => return Err(format!("en passant target {target} does not hold a pawn")),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn new_game_has_thirty_two_pieces() {
        let board = BoardState::new_game();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.side_to_move, Color::White);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn new_game_matches_starting_fen() {
        let from_fen = BoardState::from_fen(BoardState::starting_fen())
            .expect("starting FEN should parse");
        assert_eq!(from_fen, BoardState::new_game());
    }

    #[test]
    fn kings_start_on_the_e_file() {
        let board = BoardState::new_game();
        assert_eq!(board.king_square(Color::White), Square::new(7, 4));
        assert_eq!(board.king_square(Color::Black), Square::new(0, 4));
        let d1 = Square::new(7, 3).expect("d1");
        assert_eq!(board.piece_at(d1).map(|p| p.kind), Some(PieceKind::Queen));
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = BoardState::new_game();
        let e8 = Square::new(0, 4).expect("e8");
        board.remove_piece(e8);
        assert!(board.validate().is_err());
    }

    #[test]
    fn snapshot_reports_squares() {
        let board = BoardState::new_game();
        let snapshot = board.snapshot();
        assert_eq!(snapshot.len(), 32);
        assert!(snapshot
            .iter()
            .any(|r| r.kind == PieceKind::King && r.color == Color::White && r.square.to_string() == "e1"));
        assert!(snapshot.iter().all(|r| !r.has_moved));
    }
}
