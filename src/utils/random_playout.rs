//! Seeded random self-play through the session API.
//!
//! Plays uniformly random legal moves for both colors, checking board
//! invariants after every half-move. Used as a soak test for the rules
//! engine, not as an opponent.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::BoardState;
use crate::move_generation::game_termination::{termination_status, TerminationStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::session::chess_session::{ChessSession, MoveOutcome};

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub moves: u32,
    pub captures: u32,
    pub castles: u32,
    pub en_passant: u32,
    pub promotions: u32,
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub seed: u64,
    pub termination: TerminationStatus,
    pub plies: u16,
    pub tally: OutcomeTally,
    pub final_board: BoardState,
}

impl PlayoutResult {
    pub fn report(&self) -> String {
        format!(
            "seed={} result={:?} plies={} captures={} castles={} en_passant={} promotions={}",
            self.seed,
            self.termination,
            self.plies,
            self.tally.captures,
            self.tally.castles,
            self.tally.en_passant,
            self.tally.promotions
        )
    }
}

/// Play one random game from the standard opening position.
pub fn play_random_game(config: &PlayoutConfig) -> Result<PlayoutResult, String> {
    play_random_game_from(ChessSession::new(), config)
}

/// Play one random game from a caller-provided session.
pub fn play_random_game_from(
    mut session: ChessSession,
    config: &PlayoutConfig,
) -> Result<PlayoutResult, String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut tally = OutcomeTally::default();
    let mut plies = 0u16;

    while plies < config.max_plies && !session.termination_status().is_over() {
        let candidates = legal_pairs(&session);
        if candidates.is_empty() {
            return Err(format!(
                "seed {}: no legal move but status is {:?}",
                config.seed,
                session.termination_status()
            ));
        }

        let (from, to) = candidates[rng.random_range(0..candidates.len())];
        let mover = session.side_to_move();
        let outcome = session.attempt_move(from, to);

        match outcome {
            MoveOutcome::Rejected => {
                return Err(format!(
                    "seed {}: hinted move {from}{to} was rejected",
                    config.seed
                ))
            }
            MoveOutcome::MovedWithCapture => tally.captures += 1,
            MoveOutcome::Castled => tally.castles += 1,
            MoveOutcome::EnPassant => {
                tally.en_passant += 1;
                tally.captures += 1;
            }
            MoveOutcome::PromotionPending(_) => {
                let choice = PROMOTION_CHOICES[rng.random_range(0..PROMOTION_CHOICES.len())];
                session
                    .resolve_promotion(choice)
                    .map_err(|e| format!("seed {}: promotion failed: {e}", config.seed))?;
                tally.promotions += 1;
            }
            MoveOutcome::Moved => {}
        }
        tally.moves += 1;
        plies += 1;

        check_invariants(&session, mover.opposite() == session.side_to_move())
            .map_err(|e| format!("seed {} ply {plies}: {e}", config.seed))?;
        if is_king_in_check(session.board(), mover) {
            return Err(format!(
                "seed {} ply {plies}: {mover} left its own king in check",
                config.seed
            ));
        }
    }

    Ok(PlayoutResult {
        seed: config.seed,
        termination: session.termination_status(),
        plies,
        tally,
        final_board: session.board().clone(),
    })
}

fn legal_pairs(session: &ChessSession) -> Vec<(Square, Square)> {
    let side = session.side_to_move();
    session
        .board()
        .pieces_of(side)
        .flat_map(|(from, _)| {
            session
                .legal_destinations(from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

fn check_invariants(session: &ChessSession, turn_passed: bool) -> Result<(), String> {
    let board = session.board();
    board.validate()?;

    if !turn_passed {
        return Err("turn did not pass after a completed move".to_owned());
    }
    if session.termination_status() != termination_status(board) {
        return Err("cached termination status is stale".to_owned());
    }
    Ok(())
}
