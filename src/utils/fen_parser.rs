//! FEN-to-BoardState parser.
//!
//! FEN has no per-piece history, so the flags are reconstructed: castling
//! rights decide whether the King and corner Rooks count as moved, pawns
//! off their home row count as moved, and the en passant square names the
//! pawn that just double-stepped.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::BoardState};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingRights {
    fn for_color(self, color: Color) -> (bool, bool) {
        match color {
            Color::White => (self.white_kingside, self.white_queenside),
            Color::Black => (self.black_kingside, self.black_queenside),
        }
    }
}

pub fn parse_fen(fen: &str) -> Result<BoardState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut board = BoardState::new_empty();

    parse_board(board_part, &mut board)?;
    board.side_to_move = parse_side_to_move(side_part)?;
    board.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    let fullmove = fullmove_part
        .parse::<u32>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;
    board.move_count = (fullmove.max(1) - 1)
        .saturating_mul(2)
        .saturating_add(u32::from(board.side_to_move == Color::Black));

    let rights = parse_castling_rights(castling_part)?;
    apply_castling_rights(&mut board, rights);
    apply_en_passant(&mut board, en_passant_part)?;

    Ok(board)
}

fn parse_board(board_part: &str, board: &mut BoardState) -> Result<(), String> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| "Board rank has too many files".to_owned())?;

            let mut piece = Piece::new(kind, color);
            if kind == PieceKind::Pawn {
                piece.has_moved = square.row() != color.pawn_home_row();
            }
            board.squares[square.index()] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

/// Kings and Rooks count as moved unless a castling right vouches for them.
fn apply_castling_rights(board: &mut BoardState, rights: CastlingRights) {
    for color in [Color::White, Color::Black] {
        let (kingside, queenside) = rights.for_color(color);
        let row = color.back_row();

        let squares: Vec<Square> = board
            .pieces_of(color)
            .filter(|(_, piece)| matches!(piece.kind, PieceKind::King | PieceKind::Rook))
            .map(|(square, _)| square)
            .collect();

        for square in squares {
            let on_back_row = square.row() == row;
            let Some(piece) = board.piece_at_mut(square) else {
                continue;
            };
            let vouched = match piece.kind {
                PieceKind::King => on_back_row && square.col() == KING_HOME_COL && (kingside || queenside),
                _ => {
                    on_back_row
                        && ((square.col() == KINGSIDE_ROOK_COL && kingside)
                            || (square.col() == QUEENSIDE_ROOK_COL && queenside))
                }
            };
            piece.has_moved = !vouched;
        }
    }
}

fn apply_en_passant(board: &mut BoardState, en_passant_part: &str) -> Result<(), String> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let skipped = algebraic_to_square(en_passant_part)?;
    let mover = board.side_to_move.opposite();
    let pawn_square = skipped
        .offset(mover.pawn_direction(), 0)
        .ok_or_else(|| format!("En-passant square {en_passant_part} is on the edge"))?;

    match board.piece_at(pawn_square) {
        Some(piece) if piece.kind == PieceKind::Pawn && piece.color == mover => {}
        _ => {
            return Err(format!(
                "En-passant square {en_passant_part} is not behind a {mover} pawn"
            ))
        }
    }

    // The double step happened on the previous half-move.
    board.move_count = board.move_count.max(1);
    let double_step_index = board.move_count - 1;
    if let Some(pawn) = board.piece_at_mut(pawn_square) {
        pawn.last_double_step = Some(double_step_index);
    }
    board.en_passant_target = Some(pawn_square);
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Square};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::render_game_state::render_game_state;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&board));

        assert_eq!(board.side_to_move, Color::White);
        assert_eq!(board.move_count, 0);
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn castling_rights_become_moved_flags() {
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        let flag = |name: &str| board.piece_at(sq(name)).map(|p| p.has_moved);

        assert_eq!(flag("e1"), Some(false));
        assert_eq!(flag("h1"), Some(false));
        assert_eq!(flag("a1"), Some(true));
        assert_eq!(flag("e8"), Some(false));
        assert_eq!(flag("a8"), Some(false));
        assert_eq!(flag("h8"), Some(true));
    }

    #[test]
    fn en_passant_square_names_the_double_stepped_pawn() {
        let board = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        assert_eq!(board.en_passant_target, Some(sq("e4")));
        assert_eq!(board.move_count, 1);
        let pawn = board.piece_at(sq("e4")).expect("pawn on e4");
        assert_eq!(pawn.last_double_step, Some(0));
        assert!(pawn.has_moved);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        assert!(parse_fen("8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1").is_err());
    }
}
