//! Minimax with alpha-beta pruning
//!
//! Scores are from White's point of view, so White maximizes and Black
//! minimizes. A side without any legal ply has lost: the node scores
//! `-inf` (White to move) or `+inf` (Black to move) whatever depth remains.

use super::clamp_depth;
use super::plies::legal_plies;
use crate::evaluation::evaluate_board;
use crate::make_move::apply_ply;
use crate::types::*;

/// Node and cutoff counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Sibling lists abandoned by a beta/alpha cutoff
    pub cutoffs: u64,
}

/// Recursive searcher carrying statistics across nodes
#[derive(Debug, Default)]
pub(crate) struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }

    pub(crate) fn search(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.stats.nodes += 1;

        if depth == 0 {
            return evaluate_board(board);
        }

        let player = if maximizing {
            Player::White
        } else {
            Player::Black
        };

        let plies = legal_plies(board, player);
        if plies.is_empty() {
            return if maximizing {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        if maximizing {
            let mut max_eval = f64::NEG_INFINITY;
            for ply in &plies {
                let next = apply_ply(board, ply);
                let eval = self.search(&next, depth - 1, alpha, beta, false);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = f64::INFINITY;
            for ply in &plies {
                let next = apply_ply(board, ply);
                let eval = self.search(&next, depth - 1, alpha, beta, true);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }
}

/// Score `board` by searching `depth` plies ahead
///
/// `maximizing` selects the side to move (true = White). Pass
/// `f64::NEG_INFINITY` / `f64::INFINITY` as the initial window.
/// Depths above [`crate::constants::MAX_SEARCH_DEPTH`] are clamped.
pub fn minimax(board: &Board, depth: u32, alpha: f64, beta: f64, maximizing: bool) -> f64 {
    AlphaBeta::new().search(board, clamp_depth(depth), alpha, beta, maximizing)
}
