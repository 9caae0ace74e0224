//! Perft node counting for validating the legality filter.
//!
//! Leaf positions are tallied by move type, and by whether the move gives
//! check or mate, so counts can be compared against published tables.

use crate::game_state::game_state::BoardState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &BoardState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board)? {
        let mut subtree = PerftCounts::default();
        perft_recurse(generator, &mv, depth, 1, &mut subtree)?;
        total.merge(subtree);
    }

    Ok(total)
}

/// Per-root-move node counts, sorted by origin then destination.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &BoardState,
    depth: u8,
) -> MoveGenResult<Vec<(String, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in generator.generate_legal_moves(board)? {
        let mut local = PerftCounts::default();
        perft_recurse(generator, &mv, depth, 1, &mut local)?;

        let mut label = format!("{}{}", mv.chess_move.from, mv.chess_move.to);
        if let Some(kind) = mv.chess_move.promotion {
            label.push_str(&format!("={kind:?}"));
        }
        out.push((label, local.nodes));
    }
    out.sort();
    Ok(out)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        tally_leaf(mv, counts);
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.board_after_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

fn tally_leaf(mv: &GeneratedMove, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let kind = mv.chess_move.kind;
    if kind.is_capture() {
        counts.captures += 1;
    }
    match kind {
        MoveKind::EnPassant { .. } => counts.en_passant += 1,
        MoveKind::Castle { .. } => counts.castles += 1,
        _ => {}
    }
    if mv.chess_move.promotion.is_some() {
        counts.promotions += 1;
    }

    let after = &mv.board_after_move;
    if is_king_in_check(after, after.side_to_move) {
        counts.checks += 1;
        if !has_any_legal_move(after, after.side_to_move) {
            counts.checkmates += 1;
        }
    }
}
