//! Root move selection
//!
//! Candidates are shuffled before they are scored. The evaluator is coarse,
//! so many moves tie; the shuffle decides which of them is played, while the
//! first candidate seen keeps priority among equal scores. Legality and the
//! chosen score are unaffected.

use super::alphabeta::{AlphaBeta, SearchStats};
use super::clamp_depth;
use super::plies::legal_plies;
use crate::make_move::apply_ply;
use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;
use tracing::debug;

/// Result of a root search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Winning ply (a quiet move or a full capture sequence)
    pub ply: Ply,
    /// Minimax score of the position after `ply`, White's point of view
    pub score: f64,
    pub stats: SearchStats,
}

/// Search every legal ply of `player` and return the best one
///
/// Each candidate is played on a copy of the board and scored with the
/// opponent to move at `depth - 1`. A depth of 0 scores candidates by static
/// evaluation. Returns `None` when `player` has no legal ply.
pub fn search_best_ply<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    depth: u32,
    rng: &mut R,
) -> Option<SearchOutcome> {
    let depth = clamp_depth(depth);
    let start = Instant::now();

    let mut candidates = legal_plies(board, player);
    if candidates.is_empty() {
        debug!("[SEARCH] no legal move for {}", player);
        return None;
    }
    candidates.shuffle(rng);

    let mut engine = AlphaBeta::new();
    let mut best: Option<(Ply, f64)> = None;

    for ply in candidates {
        let next = apply_ply(board, &ply);
        let score = engine.search(
            &next,
            depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            !player.is_maximizing(),
        );

        let improves = match &best {
            None => true,
            Some((_, best_score)) if player.is_maximizing() => score > *best_score,
            Some((_, best_score)) => score < *best_score,
        };
        if improves {
            best = Some((ply, score));
        }
    }

    let (ply, score) = best?;
    let stats = engine.stats();
    debug!(
        "[SEARCH] {} plays [{}] | Score={} | Depth={} | Nodes={} | Cutoffs={} | Time={:.3}s",
        player,
        ply,
        score,
        depth,
        stats.nodes,
        stats.cutoffs,
        start.elapsed().as_secs_f64()
    );

    Some(SearchOutcome { ply, score, stats })
}

/// Best move for `player`, using `rng` to order candidates
///
/// Only the first step of a multi-jump is returned. After playing it the
/// caller asks again; the remaining jumps are then the only legal plies.
pub fn find_best_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    depth: u32,
    rng: &mut R,
) -> Option<Move> {
    search_best_ply(board, player, depth, rng).map(|outcome| outcome.ply.first_move())
}

/// Best move for `player` searching `depth` plies, `None` if it cannot move
pub fn find_best_move(board: &Board, player: Player, depth: u32) -> Option<Move> {
    find_best_move_with_rng(board, player, depth, &mut rand::rng())
}
