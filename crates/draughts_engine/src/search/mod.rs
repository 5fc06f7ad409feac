//! Minimax search with alpha-beta pruning
//!
//! This module implements the engine's move choice using:
//! - Plain recursive minimax (White maximizes, Black minimizes)
//! - Alpha-beta pruning
//! - Mandatory-capture aware candidate generation
//! - Random ordering of root candidates to vary play between equal moves
//!
//! Every node works on its own copy of the board, so sibling branches never
//! observe each other's simulated moves. There is no transposition table:
//! positions reached through different move orders are searched again.
//!
//! ## Module Organization
//!
//! - `plies` - Legal plies for the side to move (forced captures or plain moves)
//! - `alphabeta` - Core minimax / alpha-beta recursion
//! - `selector` - Root move selection

mod alphabeta;
mod plies;
mod selector;

pub use alphabeta::{minimax, SearchStats};
pub use plies::legal_plies;
pub use selector::{find_best_move, find_best_move_with_rng, search_best_ply, SearchOutcome};

use crate::constants::MAX_SEARCH_DEPTH;
use tracing::warn;

/// Clamp a caller-supplied depth to [`MAX_SEARCH_DEPTH`]
pub(crate) fn clamp_depth(depth: u32) -> u32 {
    if depth > MAX_SEARCH_DEPTH {
        warn!(
            "search depth {} exceeds maximum, clamping to {}",
            depth, MAX_SEARCH_DEPTH
        );
        MAX_SEARCH_DEPTH
    } else {
        depth
    }
}
